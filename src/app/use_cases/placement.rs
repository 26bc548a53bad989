//! Use-Case-Funktionen für Platzierungen.
//!
//! Vor jedem Aufruf werden die Undo-Snapshots angelegt: zuerst der
//! Turn-Start (falls ein neuer Turn markiert ist), dann der letzte Aufruf.

use crate::app::events::PlaceOrigin;
use crate::app::generators::GeneratorArgs;
use crate::app::AppState;
use crate::core::{
    GridRect, PlaceOptions, PlacementBuffer, PlacementEngine, PlacementOutcome, PlacementReport,
    CLEAR_TILE,
};
use glam::IVec2;

/// Ermittelt den Anker eines Puffers.
///
/// Ohne aktive Auswahl wird ein halber Drag-Zustand verworfen und bei (0, 0)
/// verankert.
fn resolve_anchor(state: &mut AppState, origin: PlaceOrigin) -> IVec2 {
    match origin {
        PlaceOrigin::World => IVec2::ZERO,
        PlaceOrigin::At(pos) => pos,
        PlaceOrigin::Selection => match state.selection.rect() {
            Some(rect) => rect.origin(),
            None => {
                state.selection.clear();
                IVec2::ZERO
            }
        },
    }
}

/// Platziert einen Puffer und schreibt eine Statusmeldung.
pub fn place_buffer(
    state: &mut AppState,
    buffer: &PlacementBuffer,
    origin: PlaceOrigin,
    accept_explicit_clear: bool,
) -> PlacementReport {
    let anchor = resolve_anchor(state, origin);
    let options = PlaceOptions {
        world_override: origin == PlaceOrigin::World,
        accept_explicit_clear,
        is_undo: false,
    };

    state.history.snapshot_turn_start_if_needed(&state.map);
    state.history.snapshot_before_call(&state.map);

    let report = PlacementEngine::new(&mut state.map, &state.rules, state.options.prune_margin)
        .place(
            buffer,
            anchor,
            state.selection.active_layer.as_deref(),
            options,
        );

    let message = placement_status(&report);
    match report.outcome() {
        PlacementOutcome::Blocked => log::warn!("{}", message),
        _ => log::info!("{}", message),
    }
    state.ui.set_status(message);
    report
}

/// Leert ein Rechteck (ohne Angabe die aktuelle Auswahl).
pub fn clear_rect(state: &mut AppState, rect: Option<GridRect>) {
    let Some(rect) = rect.or_else(|| state.selection.rect()) else {
        log::warn!("Leeren ohne Auswahl angefordert");
        state.ui.set_status("Keine Auswahl zum Leeren");
        return;
    };
    let Some(rect) = rect.intersection(&state.map.bounds()).filter(|r| !r.is_empty()) else {
        state
            .ui
            .set_status("Rechteck leer oder außerhalb der Map, nichts zu leeren");
        return;
    };
    let buffer = PlacementBuffer::filled(rect.width as usize, rect.height as usize, CLEAR_TILE);
    place_buffer(state, &buffer, PlaceOrigin::At(rect.origin()), true);
}

/// Erzeugt einen Puffer in Größe der Auswahl (oder der Map) und platziert ihn.
pub fn run_generator(state: &mut AppState, args: &GeneratorArgs, origin: PlaceOrigin) {
    let area = state.selection.rect().unwrap_or_else(|| state.map.bounds());
    let result = state
        .generator
        .generate(args, area.width.max(0) as usize, area.height.max(0) as usize);

    match result {
        Ok(buffer) => {
            place_buffer(state, &buffer, origin, false);
        }
        Err(e) => {
            log::warn!("Generator '{}' fehlgeschlagen: {:#}", args.label(), e);
            state
                .ui
                .set_status(format!("Generator '{}' fehlgeschlagen: {:#}", args.label(), e));
        }
    }
}

/// Menschenlesbare Zusammenfassung eines Platzierungsaufrufs.
///
/// Teilerfolg (einige Zellen blockiert) und Totalausfall (keine Zelle gesetzt)
/// werden getrennt gemeldet.
pub fn placement_status(report: &PlacementReport) -> String {
    let mut message = match report.outcome() {
        PlacementOutcome::NothingToPlace => "Nichts zu platzieren".to_string(),
        PlacementOutcome::Complete => format!("{} Tiles platziert", report.placed),
        PlacementOutcome::Partial => format!(
            "Teilweise platziert: {} von {} Tiles, {} durch höhere Priorität blockiert",
            report.placed, report.total, report.skipped
        ),
        PlacementOutcome::Blocked => format!(
            "Nichts platziert: alle {} Tiles durch höhere Priorität blockiert",
            report.total
        ),
    };
    if report.pruned > 0 {
        message.push_str(&format!(
            "; {} beschädigte Objekt-Tiles entfernt",
            report.pruned
        ));
    }
    if !report.points_of_interest.is_empty() {
        let points: Vec<String> = report
            .points_of_interest
            .iter()
            .map(|(name, pos)| format!("{}=({}, {})", name, pos.x, pos.y))
            .collect();
        message.push_str(&format!("; Punkte: {}", points.join(", ")));
    }
    message
}
