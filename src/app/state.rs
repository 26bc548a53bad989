//! Application State: zentrale Datenhaltung.

mod app_state;
mod selection;
mod ui;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use ui::UiState;
