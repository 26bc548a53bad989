//! Handler für benannte Layer und den Regionsbaum.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerContents;

/// Benennt die aktuelle Auswahl als neuen Layer.
pub fn create(state: &mut AppState, name: &str) {
    use_cases::layers::create_from_selection(state, name);
}

/// Benennt einen Layer um.
pub fn rename(state: &mut AppState, old: &str, new: &str) {
    use_cases::layers::rename(state, old, new);
}

/// Löscht einen Layer (optional mit Nachfahren).
pub fn delete(state: &mut AppState, name: &str, cascade: bool, contents: LayerContents) {
    use_cases::layers::delete(state, name, cascade, contents);
}

/// Aktiviert einen Layer als Auswahl-Klammer.
pub fn activate(state: &mut AppState, name: &str) {
    use_cases::layers::activate(state, name);
}

/// Hebt die Auswahl-Klammer auf.
pub fn deactivate(state: &mut AppState) {
    use_cases::layers::deactivate(state);
}

/// Hängt einen Regionsknoten um.
pub fn move_to(state: &mut AppState, name: &str, parent: Option<&str>) {
    use_cases::layers::move_to(state, name, parent);
}
