use glam::IVec2;
use tile_layer_editor::app::PlaceOrigin;
use tile_layer_editor::core::palette;
use tile_layer_editor::core::{classify, priority_of, LayerTarget};
use tile_layer_editor::{
    AppController, AppIntent, AppState, EditorOptions, GridRect, PlacementBuffer, EMPTY_TILE,
};

fn small_state() -> AppState {
    AppState::with_options(EditorOptions {
        grid_width: 12,
        grid_height: 10,
        ..Default::default()
    })
}

fn place_tiles(
    controller: &mut AppController,
    state: &mut AppState,
    tiles: &[(i32, i32, i32)],
) -> String {
    controller
        .handle_intent(
            state,
            AppIntent::PlaceTilesRequested {
                tiles: tiles
                    .iter()
                    .map(|&(x, y, t)| (IVec2::new(x, y), t))
                    .collect(),
            },
        )
        .expect("Platzierung sollte ohne Fehler durchlaufen");
    state.ui.take_status().unwrap_or_default()
}

#[test]
fn fence_on_empty_grid_is_placed() {
    let mut controller = AppController::new();
    let mut state = small_state();

    let status = place_tiles(&mut controller, &mut state, &[(2, 2, palette::FENCE_TOP)]);

    assert_eq!(status, "1 Tiles platziert");
    assert_eq!(state.map.read_combined(IVec2::new(2, 2)), palette::FENCE_TOP);
}

#[test]
fn grass_over_fence_is_blocked() {
    let mut controller = AppController::new();
    let mut state = small_state();
    place_tiles(&mut controller, &mut state, &[(2, 2, palette::FENCE_TOP)]);

    let status = place_tiles(&mut controller, &mut state, &[(2, 2, palette::GRASS)]);

    assert!(status.starts_with("Nichts platziert"), "Status: {status}");
    assert_eq!(state.map.read_combined(IVec2::new(2, 2)), palette::FENCE_TOP);
}

#[test]
fn partial_placement_reports_blocked_cells() {
    let mut controller = AppController::new();
    let mut state = small_state();
    place_tiles(&mut controller, &mut state, &[(3, 3, palette::HOUSE_ROOF)]);

    let status = place_tiles(
        &mut controller,
        &mut state,
        &[
            (2, 3, palette::PATH),
            (3, 3, palette::PATH),
            (4, 3, palette::PATH),
        ],
    );

    assert!(
        status.starts_with("Teilweise platziert: 2 von 3"),
        "Status: {status}"
    );
    assert_eq!(state.map.read_combined(IVec2::new(3, 3)), palette::HOUSE_ROOF);
    assert_eq!(state.map.read_combined(IVec2::new(4, 3)), palette::PATH);
}

#[test]
fn higher_priority_always_wins_lower_never_does() {
    let tiles = [
        palette::GRASS_DRY,
        palette::TREE_TOP,
        palette::FOUNTAIN_C,
        palette::PATH,
        palette::FENCE_TOP,
        palette::HOUSE_ROOF,
    ];
    let mut controller = AppController::new();
    for &low in &tiles {
        for &high in &tiles {
            if priority_of(high) <= priority_of(low) {
                continue;
            }
            // Direkt schreiben: isolierte Objektteile würden sonst sofort gepruned
            let mut state = small_state();
            state.map.write(LayerTarget::Feature, IVec2::new(6, 6), low);
            let up = place_tiles(&mut controller, &mut state, &[(6, 6, high)]);
            assert!(
                up.starts_with("1 Tiles"),
                "{:?} über {:?}: {up}",
                classify(high),
                classify(low)
            );

            let mut state = small_state();
            state.map.write(LayerTarget::Feature, IVec2::new(6, 6), high);
            let down = place_tiles(&mut controller, &mut state, &[(6, 6, low)]);
            assert!(
                down.starts_with("Nichts platziert"),
                "{:?} über {:?}: {down}",
                classify(low),
                classify(high)
            );
        }
    }
}

#[test]
fn deleting_tree_trunk_prunes_top() {
    let mut controller = AppController::new();
    let mut state = small_state();
    place_tiles(
        &mut controller,
        &mut state,
        &[(5, 5, palette::TREE_TOP), (5, 6, palette::TREE_TRUNK)],
    );
    assert_eq!(state.map.read_combined(IVec2::new(5, 5)), palette::TREE_TOP);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClearRectRequested {
                rect: Some(GridRect::new(5, 6, 1, 1)),
            },
        )
        .expect("Leeren sollte durchlaufen");
    let status = state.ui.take_status().unwrap_or_default();

    assert!(
        status.contains("1 beschädigte Objekt-Tiles entfernt"),
        "Status: {status}"
    );
    assert_eq!(state.map.feature().get(IVec2::new(5, 5)), Some(EMPTY_TILE));
    assert_eq!(state.map.read_combined(IVec2::new(5, 5)), palette::GRASS);
}

#[test]
fn half_a_tree_never_survives_placement() {
    let mut controller = AppController::new();
    let mut state = small_state();

    let status = place_tiles(&mut controller, &mut state, &[(1, 1, palette::TREE_TOP)]);

    assert!(
        status.contains("1 beschädigte Objekt-Tiles entfernt"),
        "Status: {status}"
    );
    assert_eq!(state.map.read_combined(IVec2::new(1, 1)), palette::GRASS);
}

#[test]
fn buffer_is_anchored_at_selection_origin() {
    let mut controller = AppController::new();
    let mut state = small_state();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionRectRequested {
                start: IVec2::new(6, 4),
                end: IVec2::new(4, 3),
            },
        )
        .expect("Auswahl");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceBufferRequested {
                buffer: PlacementBuffer::filled(3, 2, palette::PATH),
                origin: PlaceOrigin::Selection,
                accept_explicit_clear: false,
            },
        )
        .expect("Platzierung");

    assert_eq!(state.map.read_combined(IVec2::new(4, 3)), palette::PATH);
    assert_eq!(state.map.read_combined(IVec2::new(6, 4)), palette::PATH);
    assert_eq!(state.map.read_combined(IVec2::new(3, 3)), palette::GRASS);
}

#[test]
fn buffer_overhanging_grid_skips_outside_cells() {
    let mut controller = AppController::new();
    let mut state = small_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceBufferRequested {
                buffer: PlacementBuffer::filled(4, 4, palette::PATH),
                origin: PlaceOrigin::At(IVec2::new(10, 8)),
                accept_explicit_clear: false,
            },
        )
        .expect("Platzierung außerhalb darf nicht fehlschlagen");

    assert_eq!(state.ui.take_status().as_deref(), Some("4 Tiles platziert"));
    assert_eq!(state.map.read_combined(IVec2::new(11, 9)), palette::PATH);
}

#[test]
fn world_origin_ignores_selection() {
    let mut controller = AppController::new();
    let mut state = small_state();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionRectRequested {
                start: IVec2::new(5, 5),
                end: IVec2::new(6, 6),
            },
        )
        .expect("Auswahl");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceBufferRequested {
                buffer: PlacementBuffer::filled(1, 1, palette::HOUSE_ROOF),
                origin: PlaceOrigin::World,
                accept_explicit_clear: false,
            },
        )
        .expect("Platzierung");

    assert_eq!(state.map.read_combined(IVec2::ZERO), palette::HOUSE_ROOF);
    assert_eq!(state.map.read_combined(IVec2::new(5, 5)), palette::GRASS);
}

#[test]
fn clear_without_selection_reports_status() {
    let mut controller = AppController::new();
    let mut state = small_state();

    controller
        .handle_intent(&mut state, AppIntent::ClearRectRequested { rect: None })
        .expect("Leeren ohne Auswahl ist kein Fehler");

    assert_eq!(
        state.ui.take_status().as_deref(),
        Some("Keine Auswahl zum Leeren")
    );
}
