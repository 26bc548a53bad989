//! Zentrale Konfiguration für den Tile-Layer-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TileId;
use serde::{Deserialize, Serialize};

// ── Grid ────────────────────────────────────────────────────────────

/// Standard-Breite einer neuen Map in Zellen.
pub const GRID_WIDTH: usize = 40;
/// Standard-Höhe einer neuen Map in Zellen.
pub const GRID_HEIGHT: usize = 30;
/// Boden-Tile, mit dem der Basis-Layer gefüllt wird.
pub const GROUND_TILE: TileId = 0;
/// Höchste Tile-ID, die beim Laden in den Basis-Layer wandert.
pub const MAX_BASE_TILE: TileId = 2;

// ── Integrität ──────────────────────────────────────────────────────

/// Rand (Zellen) um geänderte Zellen, der beim Pruning mitgescannt wird.
pub const PRUNE_MARGIN: i32 = 2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `tile_layer_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Breite neuer Maps
    pub grid_width: usize,
    /// Höhe neuer Maps
    pub grid_height: usize,
    /// Boden-Tile des Basis-Layers
    pub ground_tile: TileId,
    /// Pruning-Rand um geänderte Zellen
    #[serde(default = "default_prune_margin")]
    pub prune_margin: i32,
    /// Ob der erste Platzierungsaufruf ohne expliziten Turn-Start einen
    /// Turn-Snapshot anlegt
    #[serde(default = "default_start_with_pending_turn")]
    pub start_with_pending_turn: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            ground_tile: GROUND_TILE,
            prune_margin: PRUNE_MARGIN,
            start_with_pending_turn: true,
        }
    }
}

/// Serde-Default für `prune_margin` (Abwärtskompatibilität).
fn default_prune_margin() -> i32 {
    PRUNE_MARGIN
}

fn default_start_with_pending_turn() -> bool {
    true
}

impl EditorOptions {
    /// Prüft die Wertebereiche der Optionen.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid_width > 0, "grid_width muss > 0 sein");
        anyhow::ensure!(self.grid_height > 0, "grid_height muss > 0 sein");
        anyhow::ensure!(
            self.ground_tile >= 0,
            "ground_tile muss >= 0 sein, ist {}",
            self.ground_tile
        );
        anyhow::ensure!(
            self.prune_margin >= 0,
            "prune_margin muss >= 0 sein, ist {}",
            self.prune_margin
        );
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler oder ungültigen
    /// Werten: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("tile_layer_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("tile_layer_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let opts = EditorOptions {
            grid_width: 12,
            grid_height: 9,
            ground_tile: 1,
            prune_margin: 3,
            start_with_pending_turn: false,
        };
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let parsed: EditorOptions =
            toml::from_str("grid_width = 8\ngrid_height = 6\nground_tile = 0\n")
                .expect("parsebar");
        assert_eq!(parsed.prune_margin, PRUNE_MARGIN);
        assert!(parsed.start_with_pending_turn);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(EditorOptions::default().validate().is_ok());
        let bad = [
            EditorOptions {
                ground_tile: -1,
                ..Default::default()
            },
            EditorOptions {
                grid_width: 0,
                ..Default::default()
            },
            EditorOptions {
                grid_height: 0,
                ..Default::default()
            },
            EditorOptions {
                prune_margin: -3,
                ..Default::default()
            },
        ];
        for opts in &bad {
            assert!(opts.validate().is_err(), "{opts:?}");
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "tile_layer_editor_invalid_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "grid_width = 0\ngrid_height = 6\nground_tile = -1\nprune_margin = -2\n",
        )
        .expect("schreibbar");

        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/tile_layer_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
