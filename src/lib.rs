//! Tile Layer Editor Library.
//! Ebenenbasierte Tile-Map mit Prioritäts-Arbitrierung, Regionsbaum und
//! Turn-Undo; als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{
    invoke_tool, invoke_tool_json, AppCommand, AppController, AppIntent, AppState, LayerEvent,
    ToolCall, UiState,
};
pub use core::{
    GridRect, LayerContents, LayerError, LayerStore, PlacementBuffer, PlacementReport,
    RegionTree, StructureRules, TileGrid, TileId, CLEAR_TILE, EMPTY_TILE,
};
pub use json::{parse_tile_map, write_tile_map};
pub use shared::EditorOptions;
