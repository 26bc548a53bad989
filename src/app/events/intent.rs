use crate::app::generators::GeneratorArgs;
use crate::core::{GridRect, LayerContents, PlacementBuffer, TileId};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Verankerung eines Platzierungspuffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOrigin {
    /// Obere linke Ecke der aktuellen Auswahl, ohne Auswahl (0, 0)
    Selection,
    /// Immer (0, 0)
    World,
    /// Feste Grid-Position
    At(IVec2),
}

/// Umfang eines Undo-Schritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoScope {
    /// Zustand vor dem letzten Platzierungsaufruf
    #[default]
    LastCall,
    /// Zustand vor dem ersten Aufruf des aktuellen Turns
    Turn,
}

/// App-Intents: Eingaben aus UI oder Agent ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Drag-Auswahl beginnen
    SelectionDragStarted { pos: IVec2 },
    /// Drag-Auswahl fortsetzen
    SelectionDragUpdated { pos: IVec2 },
    /// Auswahl direkt über zwei Eckpunkte setzen
    SelectionRectRequested { start: IVec2, end: IVec2 },
    /// Auswahl verwerfen
    SelectionCleared,

    /// Aktuelle Auswahl als Region benennen
    NameSelectionRequested { name: String },
    /// Region umbenennen
    RenameRegionRequested { old: String, new: String },
    /// Region löschen
    DeleteRegionRequested {
        name: String,
        cascade: bool,
        contents: LayerContents,
    },
    /// Region als Auswahl-Klammer aktivieren
    SelectRegionRequested { name: String },
    /// Auswahl-Klammer aufheben
    DeselectRegionRequested,
    /// Region umhängen (`None` = Wurzel)
    MoveRegionRequested { name: String, parent: Option<String> },

    /// Fertigen Puffer platzieren
    PlaceBufferRequested {
        buffer: PlacementBuffer,
        origin: PlaceOrigin,
        accept_explicit_clear: bool,
    },
    /// Einzelne Tiles an absoluten Positionen setzen
    PlaceTilesRequested { tiles: Vec<(IVec2, TileId)> },
    /// Rechteck (oder ohne Angabe die Auswahl) leeren
    ClearRectRequested { rect: Option<GridRect> },
    /// Generator auf die Auswahl anwenden
    GeneratorRequested {
        args: GeneratorArgs,
        origin: PlaceOrigin,
    },

    /// Undo
    UndoRequested { scope: UndoScope },
    /// Neuen Turn beginnen
    BeginTurnRequested,

    /// Map aus JSON-Datei laden
    LoadRequested { path: String },
    /// Map speichern (`None` = aktueller Pfad)
    SaveRequested { path: Option<String> },
}
