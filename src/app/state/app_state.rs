use crate::app::generators::{BuiltinGenerator, TileGenerator};
use crate::app::history::UndoHistory;
use crate::app::notifications::{LayerObserver, LayerObservers};
use crate::app::CommandLog;
use crate::core::{LayerStore, StructureRules};
use crate::shared::EditorOptions;

use super::{SelectionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Tile-Puffer der Map (Basis, Feature, benannte Layer)
    pub map: LayerStore,
    /// Integritätsregeln für mehrzellige Objekte
    pub rules: StructureRules,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo-Snapshots (letzter Aufruf / Turn-Start)
    pub history: UndoHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Empfänger für Layer-Benachrichtigungen
    pub observers: LayerObservers,
    /// Quelle für Generator-Aufrufe
    pub generator: Box<dyn TileGenerator>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit leerer Map in der konfigurierten Größe
    pub fn with_options(options: EditorOptions) -> Self {
        let map = LayerStore::new(options.grid_width, options.grid_height, options.ground_tile);
        Self {
            map,
            rules: StructureRules::builtin(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: UndoHistory::new(options.start_with_pending_turn),
            options,
            observers: LayerObservers::new(),
            generator: Box::new(BuiltinGenerator),
        }
    }

    /// Registriert einen Beobachter für Layer-Events.
    pub fn add_observer(&mut self, observer: impl LayerObserver + 'static) {
        self.observers.register(observer);
    }

    /// Ersetzt den Generator (z.B. durch einen externen Agenten).
    pub fn set_generator(&mut self, generator: impl TileGenerator + 'static) {
        self.generator = Box::new(generator);
    }

    /// Anzahl benannter Layer (für Statusanzeigen)
    pub fn layer_count(&self) -> usize {
        self.map.named_layer_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
