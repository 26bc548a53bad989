//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt eine Map aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_map_file(state, path)
}

/// Speichert die Map.
///
/// `None` speichert unter dem zuletzt bekannten Pfad.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_map_file(state, path)
}
