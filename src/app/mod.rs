//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod agent_tools;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod generators;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod notifications;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Map, Auswahl, Undo).
pub mod state;
pub mod use_cases;

pub use agent_tools::{invoke_tool, invoke_tool_json, TilePlacement, ToolCall};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PlaceOrigin, UndoScope};
pub use generators::{BuiltinGenerator, GeneratorArgs, TileGenerator};
pub use history::{SnapshotSlot, UndoHistory};
pub use notifications::{LayerEvent, LayerObserver, LayerObservers};
pub use state::{AppState, SelectionState, UiState};
