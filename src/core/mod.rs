//! Core-Domänentypen: Grid, Layer, Regionsbaum, Prioritäten und Platzierung.

pub mod error;
pub mod grid;
pub mod layer_store;
pub mod placement;
pub mod region_tree;
/// Integritätsregeln für mehrzellige Objekte
pub mod structure_rules;
pub mod tile_priority;

pub use error::LayerError;
pub use grid::{GridRect, TileGrid, TileId, CLEAR_TILE, EMPTY_TILE};
pub use layer_store::{LayerContents, LayerStore, LayerTarget, NamedLayer};
pub use placement::{
    GridPoint, PlaceOptions, PlacementBuffer, PlacementEngine, PlacementOutcome, PlacementReport,
};
pub use region_tree::{RegionNode, RegionSnapshot, RegionTree};
pub use structure_rules::{NeighborRule, ShapeDef, StructureRules, BUILTIN_SHAPES};
pub use tile_priority::{classify, may_overwrite, palette, priority_of, TileClass};
