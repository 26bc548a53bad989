//! Handler für Platzierungen und Generatoren.

use crate::app::events::PlaceOrigin;
use crate::app::generators::GeneratorArgs;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GridRect, PlacementBuffer};

/// Platziert einen fertigen Puffer.
pub fn place_buffer(
    state: &mut AppState,
    buffer: &PlacementBuffer,
    origin: PlaceOrigin,
    accept_explicit_clear: bool,
) {
    use_cases::placement::place_buffer(state, buffer, origin, accept_explicit_clear);
}

/// Leert ein Rechteck oder die aktuelle Auswahl.
pub fn clear_rect(state: &mut AppState, rect: Option<GridRect>) {
    use_cases::placement::clear_rect(state, rect);
}

/// Führt den Generator aus und platziert das Ergebnis.
pub fn run_generator(state: &mut AppState, args: &GeneratorArgs, origin: PlaceOrigin) {
    use_cases::placement::run_generator(state, args, origin);
}
