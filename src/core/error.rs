//! Fehler der Layer- und Regionsverwaltung.
//!
//! Alle Operationen, die einen dieser Fehler liefern, haben vorher nichts
//! verändert.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    #[error("Name '{name}' ist bereits vergeben")]
    NameTaken { name: String },
    #[error("Region '{name}' existiert nicht")]
    NotFound { name: String },
    #[error("Region '{name}' kann nicht unter ihren Nachfahren '{target}' verschoben werden")]
    Cycle { name: String, target: String },
    #[error("Regionsname darf nicht leer sein")]
    EmptyName,
    #[error("Auswahl liegt außerhalb des Grids oder ist leer")]
    EmptyRect,
}

impl LayerError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    pub(crate) fn name_taken(name: &str) -> Self {
        Self::NameTaken {
            name: name.to_string(),
        }
    }
}
