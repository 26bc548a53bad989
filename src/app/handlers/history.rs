//! Handler für Undo und Turn-Verwaltung.

use crate::app::events::UndoScope;
use crate::app::use_cases;
use crate::app::AppState;

/// Spielt den Snapshot des gewählten Umfangs zurück.
pub fn undo(state: &mut AppState, scope: UndoScope) {
    use_cases::history::undo(state, scope);
}

/// Beginnt einen neuen Turn.
pub fn mark_new_turn(state: &mut AppState) {
    use_cases::history::mark_new_turn(state);
}
