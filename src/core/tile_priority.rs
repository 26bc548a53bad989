//! Prioritätsklassen der Tile-Palette.
//!
//! Eine Schreiboperation darf ein vorhandenes Tile nur überschreiben, wenn
//! `priority_of(neu) >= priority_of(alt)` gilt (Gleichstand: das neue Tile gewinnt).
//! IDs ohne Eintrag in [`TILE_CLASS_TABLE`] werden als [`TileClass::Grass`]
//! eingestuft, die niedrigste nicht-leere Klasse.

use super::grid::{TileId, EMPTY_TILE};
use std::ops::RangeInclusive;

/// Bekannte Tile-IDs, die in Tests und Generatoren namentlich gebraucht werden.
pub mod palette {
    use super::TileId;

    pub const GRASS: TileId = 0;
    pub const GRASS_FLOWERS: TileId = 1;
    pub const GRASS_DRY: TileId = 2;
    pub const TREE_TOP: TileId = 4;
    pub const TREE_TRUNK: TileId = 16;
    pub const PINE_TOP: TileId = 5;
    pub const PINE_TRUNK: TileId = 17;
    pub const BUSH_TL: TileId = 6;
    pub const BUSH_TR: TileId = 7;
    pub const BUSH_BL: TileId = 18;
    pub const BUSH_BR: TileId = 19;
    pub const ROCK_TL: TileId = 8;
    pub const ROCK_TR: TileId = 9;
    pub const ROCK_BL: TileId = 20;
    pub const ROCK_BR: TileId = 21;
    pub const FOUNTAIN_N: TileId = 94;
    pub const FOUNTAIN_W: TileId = 105;
    pub const FOUNTAIN_C: TileId = 106;
    pub const FOUNTAIN_E: TileId = 107;
    pub const FOUNTAIN_S: TileId = 118;
    pub const PATH: TileId = 40;
    pub const FENCE_TOP: TileId = 45;
    pub const HOUSE_ROOF: TileId = 52;
}

/// Prioritätsklasse eines Tiles, aufsteigend geordnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileClass {
    Empty,
    Grass,
    Forest,
    Decor,
    Path,
    Fence,
    House,
}

impl TileClass {
    /// Ganzzahliger Rang der Klasse (`Empty` = 0).
    pub fn rank(self) -> i32 {
        self as i32
    }
}

/// Statische ID-Bereiche je Klasse. Nicht gelistete IDs fallen auf `Grass` zurück.
pub const TILE_CLASS_TABLE: &[(RangeInclusive<TileId>, TileClass)] = &[
    (0..=2, TileClass::Grass),
    (12..=14, TileClass::Grass),
    (3..=11, TileClass::Forest),
    (15..=23, TileClass::Forest),
    (27..=35, TileClass::Forest),
    (24..=26, TileClass::Decor),
    (36..=39, TileClass::Decor),
    (92..=95, TileClass::Decor),
    (104..=107, TileClass::Decor),
    (116..=119, TileClass::Decor),
    (40..=43, TileClass::Path),
    (96..=103, TileClass::Path),
    (44..=47, TileClass::Fence),
    (56..=59, TileClass::Fence),
    (68..=71, TileClass::Fence),
    (48..=55, TileClass::House),
    (60..=67, TileClass::House),
    (72..=91, TileClass::House),
];

/// Klassifiziert ein Tile. Totale Funktion: negative IDs sind `Empty`,
/// unbekannte IDs werden als `Grass` behandelt.
pub fn classify(tile: TileId) -> TileClass {
    if tile <= EMPTY_TILE {
        return TileClass::Empty;
    }
    TILE_CLASS_TABLE
        .iter()
        .find(|(range, _)| range.contains(&tile))
        .map_or(TileClass::Grass, |(_, class)| *class)
}

/// Rang eines Tiles für die Überschreib-Arbitrierung.
pub fn priority_of(tile: TileId) -> i32 {
    classify(tile).rank()
}

/// Darf `incoming` das vorhandene Tile `existing` überschreiben?
pub fn may_overwrite(incoming: TileId, existing: TileId) -> bool {
    priority_of(incoming) >= priority_of(existing)
}
