use super::{PlaceOrigin, UndoScope};
use crate::app::generators::GeneratorArgs;
use crate::core::{GridRect, LayerContents, PlacementBuffer};
use glam::IVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag-Auswahl an Position beginnen
    BeginSelectionDrag { pos: IVec2 },
    /// Zweiten Eckpunkt der Drag-Auswahl setzen
    UpdateSelectionDrag { pos: IVec2 },
    /// Auswahl über zwei Eckpunkte setzen
    SetSelectionRect { start: IVec2, end: IVec2 },
    /// Auswahl verwerfen
    ClearSelection,

    /// Benannten Layer aus der Auswahl erstellen
    CreateNamedLayer { name: String },
    /// Benannten Layer umbenennen
    RenameNamedLayer { old: String, new: String },
    /// Benannten Layer löschen
    DeleteNamedLayer {
        name: String,
        cascade: bool,
        contents: LayerContents,
    },
    /// Layer als Auswahl-Klammer aktivieren
    ActivateNamedLayer { name: String },
    /// Auswahl-Klammer aufheben
    DeactivateNamedLayer,
    /// Regionsknoten umhängen
    MoveNamedLayer { name: String, parent: Option<String> },

    /// Puffer platzieren
    PlaceBuffer {
        buffer: PlacementBuffer,
        origin: PlaceOrigin,
        accept_explicit_clear: bool,
    },
    /// Rechteck leeren (`None` = aktuelle Auswahl)
    ClearRect { rect: Option<GridRect> },
    /// Generator ausführen und Ergebnis platzieren
    RunGenerator {
        args: GeneratorArgs,
        origin: PlaceOrigin,
    },

    /// Snapshot zurückspielen
    Undo { scope: UndoScope },
    /// Neuen Turn markieren
    MarkNewTurn,

    /// Map laden
    LoadFile { path: String },
    /// Map speichern
    SaveFile { path: Option<String> },
}
