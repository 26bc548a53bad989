//! Parser für Tile-Maps im JSON-Zeilenformat.

use crate::core::{LayerStore, TileGrid, TileId, EMPTY_TILE};
use crate::shared::MAX_BASE_TILE;
use anyhow::{bail, Context, Result};
use glam::IVec2;

/// Parsed eine Tile-Map aus einem JSON-String.
///
/// Werte `0..=MAX_BASE_TILE` landen im Basis-Layer, größere im Feature-Layer.
/// Negative Werte gelten als leer; der Basis-Layer erhält dort `ground_tile`.
/// Das Dokument wird vollständig validiert, bevor etwas aufgebaut wird.
pub fn parse_tile_map(json_content: &str, ground_tile: TileId) -> Result<LayerStore> {
    let rows: Vec<Vec<TileId>> =
        serde_json::from_str(json_content).context("Tile-Map ist kein Array von Zeilen")?;

    let Some(width) = rows.first().map(Vec::len) else {
        bail!("Tile-Map enthält keine Zeilen");
    };
    if width == 0 {
        bail!("Tile-Map enthält leere Zeilen");
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        bail!(
            "Zeile {} hat {} Werte, erwartet {}",
            index,
            row.len(),
            width
        );
    }

    let height = rows.len();
    let mut base = TileGrid::filled(width, height, ground_tile);
    let mut feature = TileGrid::empty(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            let pos = IVec2::new(x as i32, y as i32);
            if tile <= EMPTY_TILE {
                continue;
            }
            if tile <= MAX_BASE_TILE {
                base.set(pos, tile);
            } else {
                feature.set(pos, tile);
            }
        }
    }

    log::info!(
        "Tile-Map geladen: {}x{}, {} Feature-Tiles",
        width,
        height,
        feature.occupied_count()
    );
    Ok(LayerStore::from_layers(base, feature))
}
