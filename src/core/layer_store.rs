//! Die Layer-Datenhaltung: Basis-, Feature- und benannte Layer.
//!
//! Sichtbarkeit einer Zelle (erste Quelle gewinnt):
//! 1. benannte Layer in Einfügereihenfolge, sofern ihr Rechteck die Zelle enthält
//!    und ihr Puffer dort nicht leer ist
//! 2. Feature-Layer
//! 3. Basis-Layer
//!
//! Jeder benannte Layer hat genau einen Knoten im [`RegionTree`] und umgekehrt.

use super::error::LayerError;
use super::grid::{GridRect, TileGrid, TileId, EMPTY_TILE};
use super::region_tree::RegionTree;
use glam::IVec2;
use indexmap::IndexMap;

/// Ein benannter Layer mit eigenem, auf `bounds` beschränktem Puffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedLayer {
    pub name: String,
    pub bounds: GridRect,
    tiles: TileGrid,
}

impl NamedLayer {
    fn new(name: &str, bounds: GridRect) -> Self {
        Self {
            name: name.to_string(),
            bounds,
            tiles: TileGrid::empty(bounds.width as usize, bounds.height as usize),
        }
    }

    /// Tile an einer Weltposition; `None` außerhalb von `bounds`.
    pub fn get(&self, pos: IVec2) -> Option<TileId> {
        self.tiles.get(pos - self.bounds.origin())
    }

    fn set(&mut self, pos: IVec2, tile: TileId) -> bool {
        self.tiles.set(pos - self.bounds.origin(), tile)
    }

    /// Lokaler Puffer (Ursprung = `bounds.origin()`).
    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Nicht-leere Tiles mit Weltposition.
    pub fn occupied(&self) -> impl Iterator<Item = (IVec2, TileId)> + '_ {
        self.bounds
            .cells()
            .filter_map(|pos| self.get(pos).map(|t| (pos, t)))
            .filter(|&(_, t)| t != EMPTY_TILE)
    }
}

/// Ziel-Layer einer Schreiboperation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerTarget {
    /// Benannter Layer über seinen Index in Einfügereihenfolge
    Named(usize),
    Feature,
}

/// Was beim Löschen eines benannten Layers mit dessen Tiles passiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerContents {
    /// Nicht-leere Tiles wandern zurück in den Feature-Layer
    #[default]
    Keep,
    /// Tiles werden mit dem Puffer verworfen
    Discard,
}

/// Besitzt alle Tile-Puffer der Map.
#[derive(Debug, Clone)]
pub struct LayerStore {
    base: TileGrid,
    feature: TileGrid,
    named: IndexMap<String, NamedLayer>,
    regions: RegionTree,
}

impl LayerStore {
    /// Neue Map, deren Basis-Layer vollständig mit `ground_tile` gefüllt ist.
    pub fn new(width: usize, height: usize, ground_tile: TileId) -> Self {
        Self {
            base: TileGrid::filled(width, height, ground_tile),
            feature: TileGrid::empty(width, height),
            named: IndexMap::new(),
            regions: RegionTree::new(),
        }
    }

    /// Map aus fertigen Basis- und Feature-Puffern (gleiche Größe vorausgesetzt).
    pub fn from_layers(base: TileGrid, feature: TileGrid) -> Self {
        debug_assert_eq!(
            (base.width(), base.height()),
            (feature.width(), feature.height())
        );
        Self {
            base,
            feature,
            named: IndexMap::new(),
            regions: RegionTree::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.base.width()
    }

    pub fn height(&self) -> usize {
        self.base.height()
    }

    /// Rechteck der gesamten Map.
    pub fn bounds(&self) -> GridRect {
        self.base.rect()
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.bounds().contains(pos)
    }

    pub fn base(&self) -> &TileGrid {
        &self.base
    }

    pub fn feature(&self) -> &TileGrid {
        &self.feature
    }

    pub fn regions(&self) -> &RegionTree {
        &self.regions
    }

    /// Benannte Layer in stabiler Einfügereihenfolge.
    pub fn named_layers(&self) -> impl Iterator<Item = &NamedLayer> {
        self.named.values()
    }

    pub fn named_layer(&self, name: &str) -> Option<&NamedLayer> {
        self.named.get(name)
    }

    pub fn named_layer_count(&self) -> usize {
        self.named.len()
    }

    /// Index eines benannten Layers in Einfügereihenfolge.
    pub fn layer_index(&self, name: &str) -> Option<usize> {
        self.named.get_index_of(name)
    }

    /// Erster benannter Layer, dessen Rechteck `pos` enthält.
    pub fn layer_at(&self, pos: IVec2) -> Option<usize> {
        self.named.values().position(|l| l.bounds.contains(pos))
    }

    /// Sichtbares Tile an `pos`; `EMPTY_TILE` außerhalb der Map.
    pub fn read_combined(&self, pos: IVec2) -> TileId {
        if !self.in_bounds(pos) {
            return EMPTY_TILE;
        }
        self.named
            .values()
            .filter_map(|layer| layer.get(pos))
            .find(|&t| t != EMPTY_TILE)
            .or_else(|| self.feature.get(pos).filter(|&t| t != EMPTY_TILE))
            .or_else(|| self.base.get(pos))
            .unwrap_or(EMPTY_TILE)
    }

    /// Liest ein Rechteck frisch aus den aktuellen Puffern.
    ///
    /// Zellen außerhalb der Map liefern `EMPTY_TILE`.
    pub fn read_live(&self, rect: GridRect) -> Vec<Vec<TileId>> {
        (rect.y..rect.y + rect.height)
            .map(|y| {
                (rect.x..rect.x + rect.width)
                    .map(|x| self.read_combined(IVec2::new(x, y)))
                    .collect()
            })
            .collect()
    }

    /// Verschmilzt alle Layer zu einem Puffer.
    ///
    /// Benannte Layer werden in umgekehrter Reihenfolge aufgetragen, damit das
    /// Ergebnis mit [`Self::read_combined`] übereinstimmt.
    pub fn flatten(&self) -> TileGrid {
        let mut out = self.base.clone();
        for pos in self.bounds().cells() {
            if let Some(tile) = self.feature.get(pos).filter(|&t| t != EMPTY_TILE) {
                out.set(pos, tile);
            }
        }
        for layer in self.named.values().rev() {
            for (pos, tile) in layer.occupied() {
                out.set(pos, tile);
            }
        }
        out
    }

    /// Schreibt in einen Ziel-Layer; `false` wenn `pos` dort nicht existiert.
    pub fn write(&mut self, target: LayerTarget, pos: IVec2, tile: TileId) -> bool {
        match target {
            LayerTarget::Named(index) => self
                .named
                .get_index_mut(index)
                .is_some_and(|(_, layer)| layer.set(pos, tile)),
            LayerTarget::Feature => self.feature.set(pos, tile),
        }
    }

    /// Löscht das Tile in dem Layer, der `pos` gerade darstellt.
    ///
    /// Der Basis-Layer wird nie geleert; gibt `false` zurück, wenn nur er an
    /// `pos` etwas zeigt.
    pub fn clear_rendered(&mut self, pos: IVec2) -> bool {
        let named_hit = self
            .named
            .values()
            .position(|layer| layer.get(pos).is_some_and(|t| t != EMPTY_TILE));
        if let Some(index) = named_hit {
            return self.write(LayerTarget::Named(index), pos, EMPTY_TILE);
        }
        if self.feature.get(pos).is_some_and(|t| t != EMPTY_TILE) {
            return self.feature.set(pos, EMPTY_TILE);
        }
        false
    }

    /// Erstellt einen benannten Layer aus einem Rechteck der Map.
    ///
    /// Das Rechteck wird auf die Map zugeschnitten. Feature-Tiles darin wandern in
    /// den neuen Puffer und werden im Feature-Layer geleert. Gibt das effektive
    /// Rechteck zurück.
    pub fn create_named_layer(
        &mut self,
        name: &str,
        rect: GridRect,
        parent: Option<&str>,
    ) -> Result<GridRect, LayerError> {
        if name.trim().is_empty() {
            return Err(LayerError::EmptyName);
        }
        if self.named.contains_key(name) || self.regions.contains(name) {
            return Err(LayerError::name_taken(name));
        }
        let bounds = rect
            .intersection(&self.bounds())
            .ok_or(LayerError::EmptyRect)?;
        self.regions.add(name, bounds, parent)?;

        let mut layer = NamedLayer::new(name, bounds);
        for pos in bounds.cells() {
            if let Some(tile) = self.feature.get(pos).filter(|&t| t != EMPTY_TILE) {
                layer.set(pos, tile);
                self.feature.set(pos, EMPTY_TILE);
            }
        }
        log::debug!(
            "Layer '{}' erstellt: {:?}, {} Tiles übernommen",
            name,
            bounds,
            layer.tiles.occupied_count()
        );
        self.named.insert(name.to_string(), layer);
        Ok(bounds)
    }

    /// Löscht einen benannten Layer samt Regionsknoten.
    ///
    /// Mit `cascade` werden zuerst alle Nachfahren (tiefste zuerst) gelöscht,
    /// sonst wandern deren Knoten unter die Wurzel. Gibt die gelöschten Namen in
    /// Löschreihenfolge zurück.
    pub fn delete_named_layer(
        &mut self,
        name: &str,
        cascade: bool,
        contents: LayerContents,
    ) -> Result<Vec<String>, LayerError> {
        if !self.named.contains_key(name) {
            return Err(LayerError::not_found(name));
        }
        let mut doomed = if cascade {
            self.regions.descendants(name)
        } else {
            Vec::new()
        };
        doomed.push(name.to_string());

        for victim in &doomed {
            if let Err(e) = self.regions.delete(victim) {
                log::warn!("Regionsknoten '{}' fehlt beim Löschen: {}", victim, e);
            }
            let Some(layer) = self.named.shift_remove(victim) else {
                continue;
            };
            if contents == LayerContents::Keep {
                for (pos, tile) in layer.occupied() {
                    self.feature.set(pos, tile);
                }
            }
        }
        Ok(doomed)
    }

    /// Benennt einen Layer um; Tiles, Reihenfolge und Baumposition bleiben.
    pub fn rename_named_layer(&mut self, old: &str, new: &str) -> Result<(), LayerError> {
        if !self.named.contains_key(old) {
            return Err(LayerError::not_found(old));
        }
        if old != new && self.named.contains_key(new) {
            return Err(LayerError::name_taken(new));
        }
        self.regions.rename(old, new)?;

        if let Some((index, _, mut layer)) = self.named.shift_remove_full(old) {
            layer.name = new.to_string();
            self.named.shift_insert(index, new.to_string(), layer);
        }
        Ok(())
    }

    /// Hängt den Regionsknoten eines Layers um (`None` = Wurzel).
    pub fn move_named_layer(&mut self, name: &str, parent: Option<&str>) -> Result<(), LayerError> {
        match parent {
            Some(parent) => self.regions.move_to(name, parent),
            None => self.regions.move_to_root(name),
        }
    }
}
