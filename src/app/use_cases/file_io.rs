//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::history::UndoHistory;
use crate::app::notifications::LayerEvent;
use crate::app::{AppState, SelectionState};
use anyhow::Context;

/// Lädt eine Map-Datei in den AppState.
pub fn load_map_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Map-Datei '{}' nicht lesbar", path))?;
    load_map_json(state, &content)?;

    // Merke Pfad für späteres Save
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Ersetzt die Map durch ein JSON-Dokument.
///
/// Auswahl, benannte Layer, Regionsbaum und Undo-Snapshots werden
/// zurückgesetzt. Bei einem Parse-Fehler bleibt der Zustand unverändert.
pub fn load_map_json(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    let map = crate::json::parse_tile_map(json, state.options.ground_tile)?;

    let removed: Vec<String> = state
        .map
        .named_layers()
        .map(|layer| layer.name.clone())
        .collect();

    state.map = map;
    state.selection = SelectionState::new();
    state.history = UndoHistory::new(state.options.start_with_pending_turn);
    for name in removed {
        state.observers.notify(LayerEvent::Deleted { name });
    }

    log::info!(
        "Map geladen: {}x{}, {} Feature-Tiles",
        state.map.width(),
        state.map.height(),
        state.map.feature().occupied_count()
    );
    state.ui.set_status(format!(
        "Map geladen: {}x{}",
        state.map.width(),
        state.map.height()
    ));
    Ok(())
}

/// Speichert die verschmolzene Map als JSON.
///
/// Ohne Pfad wird unter dem zuletzt geladenen/gespeicherten Pfad gespeichert.
pub fn save_map_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        anyhow::bail!("Kein Speicherpfad bekannt");
    };
    let json = crate::json::write_tile_map(&state.map)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Map-Datei '{}' nicht schreibbar", path))?;

    log::info!("Map gespeichert nach: {}", path);
    state.ui.set_status(format!("Map gespeichert: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}
