use glam::IVec2;
use std::cell::RefCell;
use std::rc::Rc;
use tile_layer_editor::app::use_cases::file_io::load_map_json;
use tile_layer_editor::core::palette;
use tile_layer_editor::{
    parse_tile_map, write_tile_map, AppController, AppIntent, AppState, EditorOptions, LayerEvent,
    EMPTY_TILE,
};

fn populated_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(EditorOptions {
        grid_width: 10,
        grid_height: 8,
        ..Default::default()
    });
    let tiles = vec![
        (IVec2::new(1, 1), palette::TREE_TOP),
        (IVec2::new(1, 2), palette::TREE_TRUNK),
        (IVec2::new(4, 4), palette::HOUSE_ROOF),
        (IVec2::new(5, 4), palette::FENCE_TOP),
        (IVec2::new(7, 6), palette::GRASS_FLOWERS),
    ];
    controller
        .handle_intent(&mut state, AppIntent::PlaceTilesRequested { tiles })
        .expect("Platzierung");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionRectRequested {
                start: IVec2::new(3, 3),
                end: IVec2::new(6, 5),
            },
        )
        .expect("Auswahl");
    controller
        .handle_intent(
            &mut state,
            AppIntent::NameSelectionRequested {
                name: "yard".into(),
            },
        )
        .expect("Benennen");
    (controller, state)
}

#[test]
fn flatten_then_load_preserves_combined_view() {
    let (_, state) = populated_state();

    let json = write_tile_map(&state.map).expect("serialisierbar");
    let reloaded = parse_tile_map(&json, 0).expect("parsebar");

    assert_eq!(reloaded.width(), state.map.width());
    assert_eq!(reloaded.height(), state.map.height());
    for pos in state.map.bounds().cells() {
        assert_eq!(
            reloaded.read_combined(pos),
            state.map.read_combined(pos),
            "Zelle {pos}"
        );
    }
    assert_eq!(reloaded.named_layer_count(), 0);
}

#[test]
fn written_document_is_array_of_rows() {
    let (_, state) = populated_state();

    let json = write_tile_map(&state.map).expect("serialisierbar");
    let rows: Vec<Vec<i32>> = serde_json::from_str(&json).expect("Array von Zeilen");

    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|row| row.len() == 10));
    assert_eq!(rows[4][4], palette::HOUSE_ROOF);
    assert!(rows.iter().flatten().all(|&t| t != EMPTY_TILE));
}

#[test]
fn loading_resets_layers_selection_and_history() {
    let (mut controller, mut state) = populated_state();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    state.add_observer(move |event: &LayerEvent| sink.borrow_mut().push(event.clone()));

    load_map_json(&mut state, "[[0, 40, 3], [1, 2, -1]]").expect("gültige Map");

    assert_eq!(state.map.named_layer_count(), 0);
    assert!(state.map.regions().is_empty());
    assert!(state.selection.rect().is_none());
    assert_eq!(state.map.read_combined(IVec2::new(1, 0)), palette::PATH);
    assert_eq!(state.map.base().get(IVec2::new(1, 1)), Some(2));
    assert_eq!(state.map.read_combined(IVec2::new(2, 1)), 0);
    assert_eq!(
        *events.borrow(),
        vec![LayerEvent::Deleted {
            name: "yard".into()
        }]
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::UndoRequested {
                scope: tile_layer_editor::app::UndoScope::Turn,
            },
        )
        .expect("Undo");
    assert_eq!(
        state.ui.take_status().as_deref(),
        Some("Nichts rückgängig zu machen")
    );
}

#[test]
fn malformed_document_leaves_state_untouched() {
    let (_, mut state) = populated_state();

    assert!(load_map_json(&mut state, "[[0, 1], [2]]").is_err());
    assert!(load_map_json(&mut state, "[]").is_err());
    assert!(load_map_json(&mut state, "{\"rows\": 3}").is_err());

    assert_eq!(state.map.named_layer_count(), 1);
    assert_eq!(state.map.read_combined(IVec2::new(4, 4)), palette::HOUSE_ROOF);
}

#[test]
fn save_and_load_through_controller() {
    let (mut controller, mut state) = populated_state();
    let path = std::env::temp_dir().join(format!(
        "tile_layer_editor_roundtrip_{}.json",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().to_string();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveRequested {
                path: Some(path_str.clone()),
            },
        )
        .expect("Speichern");
    let expected: Vec<Vec<i32>> = state.map.flatten().to_rows();

    let mut fresh = AppState::new();
    controller
        .handle_intent(&mut fresh, AppIntent::LoadRequested { path: path_str.clone() })
        .expect("Laden");

    assert_eq!(fresh.map.flatten().to_rows(), expected);
    assert_eq!(fresh.ui.current_file_path.as_deref(), Some(path_str.as_str()));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_without_known_path_is_an_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(&mut state, AppIntent::SaveRequested { path: None });

    assert!(result.is_err());
}

#[test]
fn loading_missing_file_is_an_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadRequested {
            path: "/nonexistent/map.json".into(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.map.width(), 40);
}
