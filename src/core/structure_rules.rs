//! Integritätsregeln für mehrzellige Objekte (Bäume, Büsche, Brunnen).
//!
//! Jede Zelle eines Objekts erwartet alle übrigen Teile an festen relativen
//! Offsets. Fehlt ein Teil, gilt die Zelle als beschädigt und wird beim
//! Pruning entfernt, damit nie ein halb zerstörtes Objekt stehen bleibt.

use super::grid::{GridRect, TileId, EMPTY_TILE};
use super::layer_store::LayerStore;
use super::tile_priority::palette::*;
use glam::IVec2;
use std::collections::HashMap;

/// Erwartetes Nachbar-Tile relativ zur geprüften Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborRule {
    pub dx: i32,
    pub dy: i32,
    pub expected: TileId,
}

/// Deklarative Form eines mehrzelligen Objekts: `(dx, dy, tile)` je Zelle.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDef {
    pub name: &'static str,
    pub cells: &'static [(i32, i32, TileId)],
}

/// Eingebaute Objektformen der Palette.
pub const BUILTIN_SHAPES: &[ShapeDef] = &[
    ShapeDef {
        name: "tree",
        cells: &[(0, 0, TREE_TOP), (0, 1, TREE_TRUNK)],
    },
    ShapeDef {
        name: "pine",
        cells: &[(0, 0, PINE_TOP), (0, 1, PINE_TRUNK)],
    },
    ShapeDef {
        name: "bush",
        cells: &[
            (0, 0, BUSH_TL),
            (1, 0, BUSH_TR),
            (0, 1, BUSH_BL),
            (1, 1, BUSH_BR),
        ],
    },
    ShapeDef {
        name: "rock",
        cells: &[
            (0, 0, ROCK_TL),
            (1, 0, ROCK_TR),
            (0, 1, ROCK_BL),
            (1, 1, ROCK_BR),
        ],
    },
    ShapeDef {
        name: "fountain",
        cells: &[
            (1, 0, FOUNTAIN_N),
            (0, 1, FOUNTAIN_W),
            (1, 1, FOUNTAIN_C),
            (2, 1, FOUNTAIN_E),
            (1, 2, FOUNTAIN_S),
        ],
    },
];

/// Vorberechnete Nachbarregeln je Tile-ID.
#[derive(Debug, Clone, Default)]
pub struct StructureRules {
    rules: HashMap<TileId, Vec<NeighborRule>>,
}

impl StructureRules {
    /// Baut die Regeltabelle aus Objektformen.
    ///
    /// Jede Zelle erhält eine Regel pro Partnerzelle derselben Form. Taucht eine
    /// Tile-ID in mehreren Formen auf, gewinnt die erste Form.
    pub fn from_shapes(shapes: &[ShapeDef]) -> Self {
        let mut rules: HashMap<TileId, Vec<NeighborRule>> = HashMap::new();
        for shape in shapes {
            for &(cx, cy, tile) in shape.cells {
                if rules.contains_key(&tile) {
                    log::warn!(
                        "Tile {} gehört bereits zu einer anderen Form, '{}' wird ignoriert",
                        tile,
                        shape.name
                    );
                    continue;
                }
                let partners = shape
                    .cells
                    .iter()
                    .filter(|&&(px, py, _)| (px, py) != (cx, cy))
                    .map(|&(px, py, expected)| NeighborRule {
                        dx: px - cx,
                        dy: py - cy,
                        expected,
                    })
                    .collect();
                rules.insert(tile, partners);
            }
        }
        Self { rules }
    }

    /// Regeltabelle der eingebauten Palette.
    pub fn builtin() -> Self {
        Self::from_shapes(BUILTIN_SHAPES)
    }

    /// Regeln eines Tiles; `None` für Tiles ohne Objektzugehörigkeit.
    pub fn rules_for(&self, tile: TileId) -> Option<&[NeighborRule]> {
        self.rules.get(&tile).map(Vec::as_slice)
    }

    pub fn is_structural(&self, tile: TileId) -> bool {
        self.rules.contains_key(&tile)
    }

    /// Prüft, ob alle Partner eines Tiles an `pos` vorhanden sind.
    pub fn is_intact(&self, tile: TileId, pos: IVec2, read: impl Fn(IVec2) -> TileId) -> bool {
        match self.rules_for(tile) {
            Some(rules) => rules
                .iter()
                .all(|rule| read(pos + IVec2::new(rule.dx, rule.dy)) == rule.expected),
            None => true,
        }
    }

    /// Entfernt alle beschädigten Objektzellen im Umfeld der geänderten Zellen.
    ///
    /// Gescannt wird die Bounding-Box von `changed`, erweitert um `margin`;
    /// ohne Hinweis (`None`) das ganze Grid. Der Scan wird über demselben
    /// Fenster wiederholt, bis keine beschädigte Zelle mehr übrig ist.
    /// Gibt die gelöschten Zellen zurück.
    pub fn prune_broken_structures(
        &self,
        store: &mut LayerStore,
        changed: Option<&[IVec2]>,
        margin: i32,
    ) -> Vec<IVec2> {
        let grid_rect = store.bounds();
        let window = match changed {
            Some(cells) => match GridRect::bounding(cells) {
                Some(rect) => rect.expanded(margin).intersection(&grid_rect),
                None => None,
            },
            None => Some(grid_rect),
        };
        let Some(window) = window else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        loop {
            let broken: Vec<IVec2> = window
                .cells()
                .filter(|&pos| {
                    let tile = store.read_combined(pos);
                    tile != EMPTY_TILE
                        && !self.is_intact(tile, pos, |p| store.read_combined(p))
                })
                .collect();
            if broken.is_empty() {
                break;
            }
            let before = removed.len();
            for pos in broken {
                if store.clear_rendered(pos) {
                    removed.push(pos);
                }
            }
            // Nur Basis-Tiles beschädigt: nichts mehr löschbar
            if removed.len() == before {
                break;
            }
        }

        if !removed.is_empty() {
            log::debug!(
                "Pruning: {} beschädigte Objektzellen entfernt (Fenster {:?})",
                removed.len(),
                window
            );
        }
        removed
    }
}
