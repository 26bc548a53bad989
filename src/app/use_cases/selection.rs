//! Use-Case-Funktionen für die Rechteck-Auswahl.
//!
//! Alle Positionen werden auf die Map bzw. den aktiven Layer geklemmt.

use crate::app::AppState;
use glam::IVec2;

/// Beginnt eine Drag-Auswahl.
pub fn begin_drag(state: &mut AppState, pos: IVec2) {
    let map = state.map.bounds();
    state.selection.begin_drag(pos, map);
}

/// Aktualisiert den zweiten Eckpunkt.
pub fn update_drag(state: &mut AppState, pos: IVec2) {
    let map = state.map.bounds();
    state.selection.update_drag(pos, map);
}

/// Setzt die Auswahl über zwei beliebig geordnete Eckpunkte.
pub fn set_rect(state: &mut AppState, start: IVec2, end: IVec2) {
    let map = state.map.bounds();
    state.selection.set_corners(start, end, map);
    if let Some(rect) = state.selection.rect() {
        let [[x0, y0], [x1, y1]] = rect.corners();
        state.ui.set_status(format!(
            "Auswahl [{}, {}]-[{}, {}] ({}x{})",
            x0, y0, x1, y1, rect.width, rect.height
        ));
    }
}

/// Verwirft die Auswahl; eine aktive Layer-Klammer bleibt bestehen.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
