//! Eingebaute Tile-Generatoren mit typisierten Argumenten.
//!
//! Ein Generator entscheidet nur, *was* platziert wird. Wo eine Platzierung
//! erlaubt ist, entscheidet die [`PlacementEngine`](crate::core::PlacementEngine).

use crate::core::{GridPoint, PlacementBuffer, TileId, EMPTY_TILE};
use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

/// Geschlossene Menge von Generator-Argumenten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorArgs {
    /// Gesamte Fläche mit einem Tile füllen
    Fill { tile: TileId },
    /// Nur den Rand der Fläche belegen
    Outline { tile: TileId },
    /// Fertigen Puffer übernehmen (auf die Zielgröße zugeschnitten)
    Stamp { buffer: PlacementBuffer },
}

impl GeneratorArgs {
    /// Prüft die Argumente, bevor irgendetwas erzeugt wird.
    pub fn validate(&self) -> anyhow::Result<()> {
        match self {
            Self::Fill { tile } | Self::Outline { tile } => {
                ensure!(*tile >= EMPTY_TILE, "Ungültige Tile-ID {}", tile);
            }
            Self::Stamp { buffer } => {
                ensure!(!buffer.grid.is_empty(), "Stempel enthält keine Zeilen");
                if buffer.grid.iter().any(Vec::is_empty) {
                    bail!("Stempel enthält leere Zeilen");
                }
            }
        }
        Ok(())
    }

    /// Kurzname für Log- und Statusmeldungen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fill { .. } => "fill",
            Self::Outline { .. } => "outline",
            Self::Stamp { .. } => "stamp",
        }
    }
}

/// Quelle für Platzierungspuffer.
pub trait TileGenerator {
    /// Erzeugt einen Puffer der Größe `width`×`height`.
    fn generate(
        &self,
        args: &GeneratorArgs,
        width: usize,
        height: usize,
    ) -> anyhow::Result<PlacementBuffer>;
}

/// Generator für die eingebauten [`GeneratorArgs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGenerator;

impl TileGenerator for BuiltinGenerator {
    fn generate(
        &self,
        args: &GeneratorArgs,
        width: usize,
        height: usize,
    ) -> anyhow::Result<PlacementBuffer> {
        args.validate()?;
        ensure!(width > 0 && height > 0, "Zielfläche ist leer");

        let buffer = match args {
            GeneratorArgs::Fill { tile } => PlacementBuffer::filled(width, height, *tile),
            GeneratorArgs::Outline { tile } => {
                let mut buffer = PlacementBuffer::filled(width, height, EMPTY_TILE);
                for (y, row) in buffer.grid.iter_mut().enumerate() {
                    for (x, cell) in row.iter_mut().enumerate() {
                        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                            *cell = *tile;
                        }
                    }
                }
                buffer.points_of_interest.insert(
                    "center".to_string(),
                    GridPoint {
                        x: (width / 2) as i32,
                        y: (height / 2) as i32,
                    },
                );
                buffer
            }
            GeneratorArgs::Stamp { buffer } => {
                let grid = buffer
                    .grid
                    .iter()
                    .take(height)
                    .map(|row| row.iter().copied().take(width).collect())
                    .collect();
                let points_of_interest = buffer
                    .points_of_interest
                    .iter()
                    .filter(|(_, p)| {
                        p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height
                    })
                    .map(|(name, p)| (name.clone(), *p))
                    .collect();
                PlacementBuffer {
                    grid,
                    points_of_interest,
                }
            }
        };
        log::debug!(
            "Generator '{}' erzeugte {}x{}",
            args.label(),
            buffer.width(),
            buffer.height()
        );
        Ok(buffer)
    }
}
