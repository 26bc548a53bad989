//! Werkzeug-Schnittstelle für einen externen Konversations-Agenten.
//!
//! Jeder Aufruf ist ein kleiner, getaggter JSON-Datensatz und liefert eine
//! kurze Statusmeldung zurück.

use super::events::{PlaceOrigin, UndoScope};
use super::generators::GeneratorArgs;
use super::{AppController, AppIntent, AppState};
use crate::core::{GridPoint, GridRect, LayerContents, PlacementBuffer, TileId};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Ein einzelnes Tile an absoluter Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub x: i32,
    pub y: i32,
    pub tile: TileId,
}

/// Werkzeugaufruf des Agenten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCall {
    PlaceTiles {
        tiles: Vec<TilePlacement>,
    },
    /// Puffer an der Auswahl, an `at` oder mit `world` bei (0, 0)
    PlaceBuffer {
        buffer: PlacementBuffer,
        #[serde(default)]
        at: Option<GridPoint>,
        #[serde(default)]
        world: bool,
        #[serde(default)]
        accept_explicit_clear: bool,
    },
    Generate {
        generator: GeneratorArgs,
        #[serde(default)]
        world: bool,
    },
    /// Rechteck über inklusive Eckpunkte, ohne Angabe die Auswahl
    ClearRect {
        #[serde(default)]
        corners: Option<[[i32; 2]; 2]>,
    },
    SelectRect {
        start: GridPoint,
        end: GridPoint,
    },
    NameRegion {
        name: String,
    },
    RenameRegion {
        old: String,
        new: String,
    },
    DeleteRegion {
        name: String,
        #[serde(default)]
        cascade: bool,
        #[serde(default)]
        discard_tiles: bool,
    },
    /// Region aktivieren, ohne Namen die Klammer aufheben
    SelectRegion {
        #[serde(default)]
        name: Option<String>,
    },
    MoveRegion {
        name: String,
        #[serde(default)]
        parent: Option<String>,
    },
    Undo {
        #[serde(default)]
        scope: UndoScope,
    },
    BeginTurn,
}

impl ToolCall {
    /// Übersetzt den Aufruf in einen App-Intent.
    ///
    /// Rechteck-Eckpunkte werden auf `map` beschnitten; liegen sie ganz
    /// außerhalb, entsteht ein leeres Rechteck.
    pub fn into_intent(self, map: GridRect) -> AppIntent {
        match self {
            Self::PlaceTiles { tiles } => AppIntent::PlaceTilesRequested {
                tiles: tiles
                    .into_iter()
                    .map(|t| (IVec2::new(t.x, t.y), t.tile))
                    .collect(),
            },
            Self::PlaceBuffer {
                buffer,
                at,
                world,
                accept_explicit_clear,
            } => AppIntent::PlaceBufferRequested {
                buffer,
                origin: origin_for(at, world),
                accept_explicit_clear,
            },
            Self::Generate { generator, world } => AppIntent::GeneratorRequested {
                args: generator,
                origin: origin_for(None, world),
            },
            Self::ClearRect { corners } => AppIntent::ClearRectRequested {
                rect: corners.map(|[[x0, y0], [x1, y1]]| {
                    GridRect::from_corners_within(IVec2::new(x0, y0), IVec2::new(x1, y1), &map)
                        .unwrap_or(GridRect::new(0, 0, 0, 0))
                }),
            },
            Self::SelectRect { start, end } => AppIntent::SelectionRectRequested {
                start: start.into(),
                end: end.into(),
            },
            Self::NameRegion { name } => AppIntent::NameSelectionRequested { name },
            Self::RenameRegion { old, new } => AppIntent::RenameRegionRequested { old, new },
            Self::DeleteRegion {
                name,
                cascade,
                discard_tiles,
            } => AppIntent::DeleteRegionRequested {
                name,
                cascade,
                contents: if discard_tiles {
                    LayerContents::Discard
                } else {
                    LayerContents::Keep
                },
            },
            Self::SelectRegion { name: Some(name) } => AppIntent::SelectRegionRequested { name },
            Self::SelectRegion { name: None } => AppIntent::DeselectRegionRequested,
            Self::MoveRegion { name, parent } => AppIntent::MoveRegionRequested { name, parent },
            Self::Undo { scope } => AppIntent::UndoRequested { scope },
            Self::BeginTurn => AppIntent::BeginTurnRequested,
        }
    }
}

fn origin_for(at: Option<GridPoint>, world: bool) -> PlaceOrigin {
    match (at, world) {
        (_, true) => PlaceOrigin::World,
        (Some(point), false) => PlaceOrigin::At(point.into()),
        (None, false) => PlaceOrigin::Selection,
    }
}

/// Führt einen Werkzeugaufruf aus und liefert die Statusmeldung.
pub fn invoke_tool(
    controller: &mut AppController,
    state: &mut AppState,
    call: ToolCall,
) -> anyhow::Result<String> {
    state.ui.status_message = None;
    let map = state.map.bounds();
    controller.handle_intent(state, call.into_intent(map))?;
    Ok(state.ui.take_status().unwrap_or_else(|| "OK".to_string()))
}

/// Wie [`invoke_tool`], mit dem Aufruf als JSON-Text.
pub fn invoke_tool_json(
    controller: &mut AppController,
    state: &mut AppState,
    json: &str,
) -> anyhow::Result<String> {
    let call: ToolCall = serde_json::from_str(json)?;
    invoke_tool(controller, state, call)
}
