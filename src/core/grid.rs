//! Grid-Primitive: Tile-IDs, Rechtecke und dichte Tile-Puffer.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Tile-Identifier aus der festen Palette (`>= 0`) oder ein Sentinel.
pub type TileId = i32;

/// Leere Zelle.
pub const EMPTY_TILE: TileId = -1;
/// Expliziter Lösch-Marker. Nur in Platzierungspuffern gültig, wird nie gespeichert.
pub const CLEAR_TILE: TileId = -2;

/// Achsenparalleles Rechteck in Grid-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GridRect {
    /// Erstellt ein Rechteck aus Ursprung und Größe.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rechteck aus zwei beliebig geordneten Eckpunkten (beide inklusive).
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        // Sättigend: extreme Eckpunkte liefern das größte darstellbare Rechteck
        let width = max.x.saturating_sub(min.x).saturating_add(1);
        let height = max.y.saturating_sub(min.y).saturating_add(1);
        Self::new(min.x, min.y, width, height)
    }

    /// Wie [`GridRect::from_corners`], aber vorher auf `bounds` beschnitten.
    /// `None` wenn die Eckpunkte `bounds` nicht überlappen.
    pub fn from_corners_within(a: IVec2, b: IVec2, bounds: &GridRect) -> Option<Self> {
        let min = a.min(b).max(bounds.origin());
        let max = a.max(b).min(bounds.max_corner());
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Self::from_corners(min, max))
    }

    /// Obere linke Ecke.
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Untere rechte Ecke (inklusive).
    pub fn max_corner(&self) -> IVec2 {
        IVec2::new(
            self.x.saturating_add(self.width.saturating_sub(1)),
            self.y.saturating_add(self.height.saturating_sub(1)),
        )
    }

    /// Eckpunkte im Format `[[x0, y0], [x1, y1]]` (inklusive).
    pub fn corners(&self) -> [[i32; 2]; 2] {
        let max = self.max_corner();
        [[self.x, self.y], [max.x, max.y]]
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        let (x, y) = (i64::from(pos.x), i64::from(pos.y));
        x >= i64::from(self.x)
            && y >= i64::from(self.y)
            && x < i64::from(self.x) + i64::from(self.width)
            && y < i64::from(self.y) + i64::from(self.height)
    }

    /// Liegt `other` vollständig in diesem Rechteck?
    pub fn contains_rect(&self, other: &GridRect) -> bool {
        !other.is_empty() && self.contains(other.origin()) && self.contains(other.max_corner())
    }

    /// Schnittmenge zweier Rechtecke; `None` wenn sie sich nicht überlappen.
    pub fn intersection(&self, other: &GridRect) -> Option<GridRect> {
        let min = self.origin().max(other.origin());
        let max = self.max_corner().min(other.max_corner());
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(GridRect::from_corners(min, max))
    }

    /// Um `margin` Zellen in alle Richtungen erweitert.
    pub fn expanded(&self, margin: i32) -> GridRect {
        GridRect::new(
            self.x.saturating_sub(margin),
            self.y.saturating_sub(margin),
            self.width.saturating_add(margin.saturating_mul(2)),
            self.height.saturating_add(margin.saturating_mul(2)),
        )
    }

    /// Iteriert zeilenweise über alle Zellen.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.y..self.y.saturating_add(self.height)).flat_map(move |y| {
            (self.x..self.x.saturating_add(self.width)).map(move |x| IVec2::new(x, y))
        })
    }

    /// Kleinstes Rechteck, das alle Punkte umschließt.
    pub fn bounding(points: &[IVec2]) -> Option<GridRect> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(GridRect::from_corners(min, max))
    }
}

/// Dichter, zeilenweise gespeicherter Tile-Puffer fester Größe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileId>,
}

impl TileGrid {
    /// Erstellt einen Puffer, in dem jede Zelle `fill` enthält.
    pub fn filled(width: usize, height: usize, fill: TileId) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Leerer Puffer (alle Zellen `EMPTY_TILE`).
    pub fn empty(width: usize, height: usize) -> Self {
        Self::filled(width, height, EMPTY_TILE)
    }

    /// Baut einen Puffer aus Zeilen; `None` bei ungleich langen Zeilen.
    pub fn from_rows(rows: &[Vec<TileId>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: rows.concat(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rechteck des Puffers mit Ursprung (0, 0).
    pub fn rect(&self) -> GridRect {
        GridRect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Liest eine Zelle; `None` außerhalb des Puffers.
    pub fn get(&self, pos: IVec2) -> Option<TileId> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Schreibt eine Zelle; gibt `false` außerhalb des Puffers zurück.
    pub fn set(&mut self, pos: IVec2, tile: TileId) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Kopie als Zeilenliste (`height` Zeilen mit je `width` Werten).
    pub fn to_rows(&self) -> Vec<Vec<TileId>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[TileId]>::to_vec).collect()
    }

    /// Anzahl nicht-leerer Zellen.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t != EMPTY_TILE).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_unordered_corners_is_inclusive() {
        let rect = GridRect::from_corners(IVec2::new(3, 3), IVec2::new(0, 1));
        assert_eq!(rect, GridRect::new(0, 1, 4, 3));
        assert_eq!(rect.corners(), [[0, 1], [3, 3]]);
        assert!(rect.contains(IVec2::new(3, 3)));
        assert!(!rect.contains(IVec2::new(4, 3)));
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = GridRect::new(0, 0, 2, 2);
        let b = GridRect::new(5, 5, 2, 2);
        assert!(a.intersection(&b).is_none());
        assert_eq!(
            a.intersection(&GridRect::new(1, 1, 5, 5)),
            Some(GridRect::new(1, 1, 1, 1))
        );
    }

    #[test]
    fn extreme_corners_do_not_overflow() {
        let lo = IVec2::new(i32::MIN, i32::MIN);
        let hi = IVec2::new(i32::MAX, i32::MAX);
        let rect = GridRect::from_corners(lo, hi);
        assert_eq!(rect.width, i32::MAX);
        assert_eq!(rect.height, i32::MAX);
        assert!(rect.contains(IVec2::new(i32::MIN, i32::MIN)));
        let grown = GridRect::new(i32::MAX - 1, 0, 2, 2).expanded(i32::MAX);
        assert_eq!(grown.width, i32::MAX);
        assert!(!GridRect::new(i32::MAX - 1, 0, 2, 2).contains(IVec2::new(i32::MIN, 0)));
    }

    #[test]
    fn corners_within_clip_to_bounds() {
        let map = GridRect::new(0, 0, 10, 8);
        assert_eq!(
            GridRect::from_corners_within(IVec2::new(i32::MIN, 0), IVec2::new(i32::MAX, 0), &map),
            Some(GridRect::new(0, 0, 10, 1))
        );
        assert_eq!(
            GridRect::from_corners_within(IVec2::new(0, 0), IVec2::new(200_000, 200_000), &map),
            Some(map)
        );
        assert!(GridRect::from_corners_within(
            IVec2::new(50, 50),
            IVec2::new(i32::MAX, i32::MAX),
            &map
        )
        .is_none());
    }

    #[test]
    fn tile_grid_rejects_ragged_rows() {
        assert!(TileGrid::from_rows(&[vec![1, 2], vec![3]]).is_none());
        let grid = TileGrid::from_rows(&[vec![1, 2], vec![3, 4]]).expect("rechteckig");
        assert_eq!(grid.get(IVec2::new(1, 1)), Some(4));
        assert_eq!(grid.get(IVec2::new(2, 0)), None);
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }
}
