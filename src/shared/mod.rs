//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, die von `app`, `json` und der Binary gleichermaßen
//! gebraucht wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{GROUND_TILE, MAX_BASE_TILE, PRUNE_MARGIN};
