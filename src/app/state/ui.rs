/// UI-bezogener Zustand, der zwischen Aufrufen bestehen bleibt.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Statusmeldung (wird auch an den Agenten zurückgegeben)
    pub status_message: Option<String>,
    /// Pfad der zuletzt geladenen oder gespeicherten Map
    pub current_file_path: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Entnimmt die Statusmeldung.
    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }
}
