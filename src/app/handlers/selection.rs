//! Handler für Auswahl-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::IVec2;

/// Beginnt eine Drag-Auswahl.
pub fn begin_drag(state: &mut AppState, pos: IVec2) {
    use_cases::selection::begin_drag(state, pos);
}

/// Aktualisiert den zweiten Eckpunkt der Drag-Auswahl.
pub fn update_drag(state: &mut AppState, pos: IVec2) {
    use_cases::selection::update_drag(state, pos);
}

/// Setzt die Auswahl über zwei Eckpunkte.
pub fn set_rect(state: &mut AppState, start: IVec2, end: IVec2) {
    use_cases::selection::set_rect(state, start, end);
}

/// Verwirft die Auswahl.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}
