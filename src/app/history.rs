//! Zwei-Stufen-Undo auf Basis vollständiger Grid-Snapshots.
//!
//! Gehalten werden der Zustand direkt vor dem letzten Platzierungsaufruf und
//! der Zustand zu Beginn des aktuellen Turns. Beide sind unabhängige Kopien
//! des verschmolzenen Grids.

use crate::core::{LayerStore, TileGrid};

/// Welcher Snapshot wiederhergestellt werden soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSlot {
    LastCall,
    TurnStart,
}

/// Undo-Speicher mit "letzter Aufruf"- und "Turn-Start"-Slot.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    last_call: Option<TileGrid>,
    turn_start: Option<TileGrid>,
    turn_start_pending: bool,
}

impl UndoHistory {
    /// Erstellt einen leeren Undo-Speicher.
    ///
    /// `turn_start_pending` bestimmt, ob schon der erste Aufruf ohne
    /// vorheriges [`Self::mark_new_turn`] einen Turn-Snapshot anlegt.
    pub fn new(turn_start_pending: bool) -> Self {
        Self {
            last_call: None,
            turn_start: None,
            turn_start_pending,
        }
    }

    /// Sichert den aktuellen Zustand in den "letzter Aufruf"-Slot.
    pub fn snapshot_before_call(&mut self, store: &LayerStore) {
        self.last_call = Some(store.flatten());
    }

    /// Sichert den Turn-Start, falls ein neuer Turn markiert ist.
    ///
    /// Gibt `true` zurück, wenn ein Snapshot angelegt wurde.
    pub fn snapshot_turn_start_if_needed(&mut self, store: &LayerStore) -> bool {
        if !self.turn_start_pending {
            return false;
        }
        self.turn_start = Some(store.flatten());
        self.turn_start_pending = false;
        log::debug!("Turn-Start-Snapshot angelegt");
        true
    }

    /// Markiert den Beginn eines neuen Turns.
    pub fn mark_new_turn(&mut self) {
        self.turn_start_pending = true;
    }

    pub fn is_turn_start_pending(&self) -> bool {
        self.turn_start_pending
    }

    /// Snapshot eines Slots; `None` wenn nie etwas gesichert wurde.
    pub fn snapshot(&self, slot: SnapshotSlot) -> Option<&TileGrid> {
        let grid = match slot {
            SnapshotSlot::LastCall => self.last_call.as_ref(),
            SnapshotSlot::TurnStart => self.turn_start.as_ref(),
        };
        grid.filter(|g| !g.is_empty())
    }

    pub fn can_undo(&self, slot: SnapshotSlot) -> bool {
        self.snapshot(slot).is_some()
    }

    /// Verwirft beide Snapshots; der Turn-Status wird neu gesetzt.
    pub fn reset(&mut self, turn_start_pending: bool) {
        *self = Self::new(turn_start_pending);
    }
}
