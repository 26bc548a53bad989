//! Writer für Tile-Maps im JSON-Zeilenformat.

use crate::core::LayerStore;
use anyhow::Result;

/// Schreibt die verschmolzene Sicht aller Layer als JSON-Array von Zeilen.
pub fn write_tile_map(store: &LayerStore) -> Result<String> {
    let rows = store.flatten().to_rows();
    Ok(serde_json::to_string(&rows)?)
}
