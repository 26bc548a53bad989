//! Platzierung von Tile-Puffern mit Prioritäts-Arbitrierung.
//!
//! Pro Zelle wird der Ziel-Layer bestimmt (aktiver Layer → erster benannter
//! Layer → Feature-Layer), die Priorität gegen das vorhandene Tile geprüft und
//! die Zelle ggf. geschrieben. Danach werden beschädigte Objekte entfernt.

use super::grid::{GridRect, TileId, CLEAR_TILE, EMPTY_TILE};
use super::layer_store::{LayerStore, LayerTarget};
use super::structure_rules::StructureRules;
use super::tile_priority::may_overwrite;
use glam::IVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Punkt in Grid-Koordinaten im JSON-Format `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl From<GridPoint> for IVec2 {
    fn from(p: GridPoint) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl From<IVec2> for GridPoint {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Ausgabe eines Generators: Tile-Zeilen plus benannte Punkte (relativ zum Puffer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBuffer {
    pub grid: Vec<Vec<TileId>>,
    #[serde(default)]
    pub points_of_interest: IndexMap<String, GridPoint>,
}

impl PlacementBuffer {
    pub fn from_grid(grid: Vec<Vec<TileId>>) -> Self {
        Self {
            grid,
            points_of_interest: IndexMap::new(),
        }
    }

    /// Puffer der Größe `width`×`height` mit `tile` in jeder Zelle.
    pub fn filled(width: usize, height: usize, tile: TileId) -> Self {
        Self::from_grid(vec![vec![tile; width]; height])
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Breite der längsten Zeile.
    pub fn width(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Schalter eines Platzierungsaufrufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceOptions {
    /// Anker bei (0, 0) statt an der Selektion (wertet der Aufrufer aus)
    pub world_override: bool,
    /// `CLEAR_TILE` löscht die dargestellte Zelle
    pub accept_explicit_clear: bool,
    /// Wiederherstellung: jede Zelle (auch leere) überschreibt ohne Prioritätsprüfung
    pub is_undo: bool,
}

impl PlaceOptions {
    /// Optionen für das Zurückspielen eines Snapshots.
    pub fn undo() -> Self {
        Self {
            world_override: true,
            accept_explicit_clear: true,
            is_undo: true,
        }
    }
}

/// Ergebnis eines Platzierungsaufrufs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub placed: usize,
    pub skipped: usize,
    pub total: usize,
    /// Durch Pruning entfernte Objektzellen
    pub pruned: usize,
    /// Geschriebene Zellen (`placed == changed.len()`)
    pub changed: Vec<IVec2>,
    /// Punkte des Puffers in absoluten Koordinaten
    pub points_of_interest: Vec<(String, IVec2)>,
}

/// Einordnung eines Platzierungsergebnisses für Statusmeldungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Keine beabsichtigten Schreibzugriffe
    NothingToPlace,
    Complete,
    /// Ein Teil wurde durch höhere Prioritäten blockiert
    Partial,
    /// Alle Zellen blockiert
    Blocked,
}

impl PlacementReport {
    pub fn outcome(&self) -> PlacementOutcome {
        if self.total == 0 {
            PlacementOutcome::NothingToPlace
        } else if self.placed == 0 {
            PlacementOutcome::Blocked
        } else if self.skipped > 0 {
            PlacementOutcome::Partial
        } else {
            PlacementOutcome::Complete
        }
    }
}

/// Führt Platzierungen auf einem [`LayerStore`] aus.
pub struct PlacementEngine<'a> {
    store: &'a mut LayerStore,
    rules: &'a StructureRules,
    prune_margin: i32,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(store: &'a mut LayerStore, rules: &'a StructureRules, prune_margin: i32) -> Self {
        Self {
            store,
            rules,
            prune_margin,
        }
    }

    /// Platziert `buffer` mit der oberen linken Ecke an `anchor`.
    ///
    /// `active_layer` ist die Klammer der Selektion: Zellen innerhalb dieses
    /// Layers landen immer dort. Zellen außerhalb der Map werden stillschweigend
    /// übersprungen.
    pub fn place(
        &mut self,
        buffer: &PlacementBuffer,
        anchor: IVec2,
        active_layer: Option<&str>,
        options: PlaceOptions,
    ) -> PlacementReport {
        let active = active_layer.and_then(|name| {
            let index = self.store.layer_index(name)?;
            let bounds = self.store.named_layer(name)?.bounds;
            Some((index, bounds))
        });

        let mut report = PlacementReport::default();
        for (dy, row) in buffer.grid.iter().enumerate() {
            for (dx, &tile) in row.iter().enumerate() {
                let Some(pos) = offset_cell(anchor, dx, dy) else {
                    continue;
                };
                if !self.store.in_bounds(pos) {
                    continue;
                }

                if tile == CLEAR_TILE {
                    // Nur Zellen zählen, in denen tatsächlich etwas gelöscht wurde
                    if options.accept_explicit_clear && self.store.clear_rendered(pos) {
                        report.total += 1;
                        report.changed.push(pos);
                    }
                    continue;
                }
                if tile == EMPTY_TILE && !options.is_undo {
                    continue;
                }
                if tile < CLEAR_TILE {
                    continue;
                }

                report.total += 1;
                let target = self.resolve_target(pos, active);
                // Gegen das sichtbare Tile prüfen, egal in welchem Layer es liegt
                let existing = self.store.read_combined(pos);

                if options.is_undo || may_overwrite(tile, existing) {
                    self.store.write(target, pos, tile);
                    report.changed.push(pos);
                } else {
                    report.skipped += 1;
                }
            }
        }
        report.placed = report.changed.len();

        if !report.changed.is_empty() {
            let hint = Some(report.changed.as_slice());
            report.pruned = self
                .rules
                .prune_broken_structures(self.store, hint, self.prune_margin)
                .len();
        }

        report.points_of_interest = buffer
            .points_of_interest
            .iter()
            .map(|(name, point)| (name.clone(), anchor.saturating_add(IVec2::from(*point))))
            .collect();

        log::debug!(
            "Platzierung an {}: {}/{} gesetzt, {} blockiert, {} gepruned",
            anchor,
            report.placed,
            report.total,
            report.skipped,
            report.pruned
        );
        report
    }

    fn resolve_target(&self, pos: IVec2, active: Option<(usize, GridRect)>) -> LayerTarget {
        if let Some((index, bounds)) = active {
            if bounds.contains(pos) {
                return LayerTarget::Named(index);
            }
        }
        match self.store.layer_at(pos) {
            Some(index) => LayerTarget::Named(index),
            None => LayerTarget::Feature,
        }
    }
}

/// Absolute Zelle `anchor + (dx, dy)`; `None` wenn sie außerhalb des
/// Koordinatenbereichs läge.
fn offset_cell(anchor: IVec2, dx: usize, dy: usize) -> Option<IVec2> {
    let dx = i32::try_from(dx).ok()?;
    let dy = i32::try_from(dy).ok()?;
    Some(IVec2::new(anchor.x.checked_add(dx)?, anchor.y.checked_add(dy)?))
}
