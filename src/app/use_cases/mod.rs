//! Use-Cases der Application-Layer-Orchestrierung.

pub mod file_io;
pub mod history;
pub mod layers;
pub mod placement;
pub mod selection;
