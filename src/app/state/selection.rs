use crate::core::GridRect;
use glam::IVec2;

/// Auswahlbezogener Anwendungszustand.
///
/// `start` und `end` sind ungeordnet; das effektive Rechteck umfasst beide
/// Eckpunkte. Ist ein Layer aktiv, wird jede weitere Auswahl auf dessen
/// Rechteck geklemmt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Erster Eckpunkt (Drag-Beginn)
    pub start: Option<IVec2>,
    /// Zweiter Eckpunkt (aktuelle Drag-Position)
    pub end: Option<IVec2>,
    /// Name des aktiven Layers
    pub active_layer: Option<String>,
    /// Rechteck des aktiven Layers (Klammer für die Auswahl)
    pub active_layer_bounds: Option<GridRect>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effektives Rechteck; `None` solange nicht beide Eckpunkte gesetzt sind.
    pub fn rect(&self) -> Option<GridRect> {
        Some(GridRect::from_corners(self.start?, self.end?))
    }

    pub fn has_selection(&self) -> bool {
        self.rect().is_some()
    }

    /// Verwirft die Eckpunkte, der aktive Layer bleibt.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Klemmt eine Position auf den aktiven Layer bzw. die Map.
    pub fn clamp(&self, pos: IVec2, map: GridRect) -> IVec2 {
        let area = self
            .active_layer_bounds
            .and_then(|b| b.intersection(&map))
            .unwrap_or(map);
        pos.clamp(area.origin(), area.max_corner())
    }

    /// Beginnt eine Drag-Auswahl an `pos`.
    pub fn begin_drag(&mut self, pos: IVec2, map: GridRect) {
        let pos = self.clamp(pos, map);
        self.start = Some(pos);
        self.end = Some(pos);
    }

    /// Aktualisiert den zweiten Eckpunkt; ohne Drag-Beginn wird einer gestartet.
    pub fn update_drag(&mut self, pos: IVec2, map: GridRect) {
        if self.start.is_none() {
            self.begin_drag(pos, map);
            return;
        }
        self.end = Some(self.clamp(pos, map));
    }

    /// Setzt beide Eckpunkte in einem Schritt.
    pub fn set_corners(&mut self, start: IVec2, end: IVec2, map: GridRect) {
        self.start = Some(self.clamp(start, map));
        self.end = Some(self.clamp(end, map));
    }

    /// Aktiviert einen Layer und übernimmt sein Rechteck als Auswahl.
    pub fn activate_layer(&mut self, name: &str, bounds: GridRect) {
        self.active_layer = Some(name.to_string());
        self.active_layer_bounds = Some(bounds);
        self.start = Some(bounds.origin());
        self.end = Some(bounds.max_corner());
    }

    /// Hebt die Layer-Klammer auf.
    pub fn deactivate_layer(&mut self) {
        self.active_layer = None;
        self.active_layer_bounds = None;
    }
}
