//! Mapping von UI- und Agent-Intents auf mutierende App-Commands.

use super::events::PlaceOrigin;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{GridRect, PlacementBuffer, TileId, EMPTY_TILE};
use glam::IVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectionDragStarted { pos } => vec![AppCommand::BeginSelectionDrag { pos }],
        AppIntent::SelectionDragUpdated { pos } => vec![AppCommand::UpdateSelectionDrag { pos }],
        AppIntent::SelectionRectRequested { start, end } => {
            vec![AppCommand::SetSelectionRect { start, end }]
        }
        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection],

        AppIntent::NameSelectionRequested { name } => vec![AppCommand::CreateNamedLayer { name }],
        AppIntent::RenameRegionRequested { old, new } => {
            vec![AppCommand::RenameNamedLayer { old, new }]
        }
        AppIntent::DeleteRegionRequested {
            name,
            cascade,
            contents,
        } => vec![AppCommand::DeleteNamedLayer {
            name,
            cascade,
            contents,
        }],
        AppIntent::SelectRegionRequested { name } => {
            // Schon aktiv: nur die Auswahl neu auf den Layer setzen
            if state.selection.active_layer.as_deref() == Some(name.as_str()) {
                vec![AppCommand::ActivateNamedLayer { name }]
            } else {
                vec![
                    AppCommand::DeactivateNamedLayer,
                    AppCommand::ActivateNamedLayer { name },
                ]
            }
        }
        AppIntent::DeselectRegionRequested => vec![AppCommand::DeactivateNamedLayer],
        AppIntent::MoveRegionRequested { name, parent } => {
            vec![AppCommand::MoveNamedLayer { name, parent }]
        }

        AppIntent::PlaceBufferRequested {
            buffer,
            origin,
            accept_explicit_clear,
        } => vec![AppCommand::PlaceBuffer {
            buffer,
            origin,
            accept_explicit_clear,
        }],
        AppIntent::PlaceTilesRequested { tiles } => {
            let (buffer, anchor) = buffer_from_tiles(&tiles, state.map.bounds());
            vec![AppCommand::PlaceBuffer {
                buffer,
                origin: PlaceOrigin::At(anchor),
                accept_explicit_clear: false,
            }]
        }
        AppIntent::ClearRectRequested { rect } => vec![AppCommand::ClearRect { rect }],
        AppIntent::GeneratorRequested { args, origin } => {
            vec![AppCommand::RunGenerator { args, origin }]
        }

        AppIntent::UndoRequested { scope } => vec![AppCommand::Undo { scope }],
        AppIntent::BeginTurnRequested => vec![AppCommand::MarkNewTurn],

        AppIntent::LoadRequested { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested { path } => vec![AppCommand::SaveFile { path }],
    }
}

/// Baut aus Einzel-Tiles einen Puffer über ihre Bounding-Box.
///
/// Tiles außerhalb von `map` werden verworfen. Unbelegte Zellen bleiben
/// `EMPTY_TILE` und werden bei der Platzierung übersprungen. Bei doppelten
/// Positionen gewinnt der letzte Eintrag.
fn buffer_from_tiles(tiles: &[(IVec2, TileId)], map: GridRect) -> (PlacementBuffer, IVec2) {
    let tiles: Vec<(IVec2, TileId)> = tiles
        .iter()
        .copied()
        .filter(|(pos, _)| map.contains(*pos))
        .collect();
    let positions: Vec<IVec2> = tiles.iter().map(|(pos, _)| *pos).collect();
    let Some(bbox) = GridRect::bounding(&positions) else {
        return (PlacementBuffer::default(), IVec2::ZERO);
    };

    let mut buffer =
        PlacementBuffer::filled(bbox.width as usize, bbox.height as usize, EMPTY_TILE);
    for (pos, tile) in tiles {
        let local = pos - bbox.origin();
        buffer.grid[local.y as usize][local.x as usize] = tile;
    }
    (buffer, bbox.origin())
}
