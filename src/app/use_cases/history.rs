//! Use-Case-Funktionen für Undo und Turns.

use crate::app::events::UndoScope;
use crate::app::history::SnapshotSlot;
use crate::app::AppState;
use crate::core::{PlaceOptions, PlacementBuffer, PlacementEngine};
use glam::IVec2;

/// Spielt einen Snapshot über die Platzierung im Undo-Modus zurück.
///
/// Gibt die Anzahl tatsächlich veränderter Zellen zurück, `None` wenn kein
/// Snapshot vorliegt. Die Snapshots bleiben erhalten.
pub fn undo(state: &mut AppState, scope: UndoScope) -> Option<usize> {
    let (slot, label) = match scope {
        UndoScope::LastCall => (SnapshotSlot::LastCall, "Letzter Aufruf"),
        UndoScope::Turn => (SnapshotSlot::TurnStart, "Turn"),
    };
    let Some(snapshot) = state.history.snapshot(slot) else {
        log::debug!("Undo ({}): nichts zu tun", label);
        state.ui.set_status("Nichts rückgängig zu machen");
        return None;
    };
    let buffer = PlacementBuffer::from_grid(snapshot.to_rows());
    let before = state.map.flatten();

    PlacementEngine::new(&mut state.map, &state.rules, state.options.prune_margin).place(
        &buffer,
        IVec2::ZERO,
        None,
        PlaceOptions::undo(),
    );

    let after = state.map.flatten();
    let changed = state
        .map
        .bounds()
        .cells()
        .filter(|&pos| before.get(pos) != after.get(pos))
        .count();
    log::info!("{} rückgängig gemacht: {} Zellen geändert", label, changed);
    state.ui.set_status(format!(
        "{} rückgängig gemacht: {} Zellen geändert",
        label, changed
    ));
    Some(changed)
}

/// Beginnt einen neuen Turn; der nächste Aufruf legt den Turn-Snapshot an.
pub fn mark_new_turn(state: &mut AppState) {
    state.history.mark_new_turn();
    log::debug!("Neuer Turn markiert");
    state.ui.set_status("Neuer Turn begonnen");
}
