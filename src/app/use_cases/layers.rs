//! Use-Case-Funktionen für benannte Layer.
//!
//! Erwartbare Fehler (Name vergeben, Region unbekannt, Zyklus) landen als
//! Statusmeldung im UI-State. Benachrichtigungen gehen erst nach erfolgreicher
//! Mutation raus.

use crate::app::notifications::LayerEvent;
use crate::app::AppState;
use crate::core::{LayerContents, LayerError};

fn report_error(state: &mut AppState, error: &LayerError) {
    log::warn!("Layer-Operation fehlgeschlagen: {}", error);
    state.ui.set_status(format!("Fehlgeschlagen: {}", error));
}

/// Benennt die aktuelle Auswahl als neuen Layer.
///
/// Liegt die Auswahl vollständig im aktiven Layer, wird die neue Region dessen
/// Kind, sonst hängt sie an der Wurzel.
pub fn create_from_selection(state: &mut AppState, name: &str) {
    let Some(rect) = state.selection.rect() else {
        log::warn!("Region '{}': keine Auswahl", name);
        state.ui.set_status("Keine Auswahl zum Benennen");
        return;
    };
    let parent = match (&state.selection.active_layer, state.selection.active_layer_bounds) {
        (Some(active), Some(bounds)) if bounds.contains_rect(&rect) => Some(active.clone()),
        _ => None,
    };

    match state.map.create_named_layer(name, rect, parent.as_deref()) {
        Ok(bounds) => {
            let [[x0, y0], [x1, y1]] = bounds.corners();
            log::info!("Region '{}' erstellt: [{}, {}]-[{}, {}]", name, x0, y0, x1, y1);
            state.ui.set_status(format!(
                "Region '{}' erstellt: [{}, {}]-[{}, {}]",
                name, x0, y0, x1, y1
            ));
            state.observers.notify(LayerEvent::Created {
                name: name.to_string(),
            });
        }
        Err(e) => report_error(state, &e),
    }
}

/// Benennt einen Layer um und hält die Auswahl-Klammer synchron.
pub fn rename(state: &mut AppState, old: &str, new: &str) {
    match state.map.rename_named_layer(old, new) {
        Ok(()) => {
            if state.selection.active_layer.as_deref() == Some(old) {
                state.selection.active_layer = Some(new.to_string());
            }
            log::info!("Region '{}' umbenannt in '{}'", old, new);
            state
                .ui
                .set_status(format!("Region '{}' umbenannt in '{}'", old, new));
            state.observers.notify(LayerEvent::Renamed {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        Err(e) => report_error(state, &e),
    }
}

/// Löscht einen Layer, mit `cascade` auch alle Nachfahren.
pub fn delete(state: &mut AppState, name: &str, cascade: bool, contents: LayerContents) {
    match state.map.delete_named_layer(name, cascade, contents) {
        Ok(deleted) => {
            let active_deleted = state
                .selection
                .active_layer
                .as_ref()
                .is_some_and(|active| deleted.contains(active));
            if active_deleted {
                state.selection.deactivate_layer();
            }
            let policy = match contents {
                LayerContents::Keep => "Tiles behalten",
                LayerContents::Discard => "Tiles verworfen",
            };
            log::info!("{} Region(en) gelöscht ({}): {:?}", deleted.len(), policy, deleted);
            state.ui.set_status(format!(
                "{} Region(en) gelöscht ({}): {}",
                deleted.len(),
                policy,
                deleted.join(", ")
            ));
            for name in deleted {
                state.observers.notify(LayerEvent::Deleted { name });
            }
        }
        Err(e) => report_error(state, &e),
    }
}

/// Aktiviert einen Layer als Auswahl-Klammer; die Auswahl wird sein Rechteck.
pub fn activate(state: &mut AppState, name: &str) {
    let Some(bounds) = state.map.named_layer(name).map(|layer| layer.bounds) else {
        report_error(state, &LayerError::not_found(name));
        return;
    };
    state.selection.activate_layer(name, bounds);
    log::info!("Region '{}' aktiviert", name);
    state.ui.set_status(format!("Region '{}' ausgewählt", name));
    state.observers.notify(LayerEvent::Selected {
        name: name.to_string(),
    });
}

/// Hebt die Auswahl-Klammer auf.
pub fn deactivate(state: &mut AppState) {
    if let Some(name) = state.selection.active_layer.take() {
        log::debug!("Region '{}' deaktiviert", name);
    }
    state.selection.deactivate_layer();
}

/// Hängt einen Regionsknoten um (`None` = Wurzel).
pub fn move_to(state: &mut AppState, name: &str, parent: Option<&str>) {
    match state.map.move_named_layer(name, parent) {
        Ok(()) => {
            let target = parent.unwrap_or("Wurzel");
            log::info!("Region '{}' verschoben nach '{}'", name, target);
            state
                .ui
                .set_status(format!("Region '{}' verschoben nach '{}'", name, target));
        }
        Err(e) => report_error(state, &e),
    }
}
