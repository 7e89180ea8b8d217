//! Composite terrain unit pairing graphics cells with a 2x heightmap

use serde::{Deserialize, Serialize};

use crate::geom::{CellCoords, Point, HEIGHT_UNIT};
use crate::grid::Grid;

/// Opaque identifier for the graphic drawn in one tile cell. Zero is the
/// blank square.
pub type TileGraphic = u32;

/// A rectangular terrain section: one graphics grid (cell = 32 units) and
/// one height grid sampled at twice the linear resolution (cell = 16
/// units), covering the same physical area.
///
/// Invariant: the height grid is always exactly twice the graphics grid in
/// each dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTile {
    graphics: Grid<TileGraphic>,
    heights: Grid<i32>,
}

impl MapTile {
    /// Create a blank tile `width x height` graphics cells in size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            graphics: Grid::new(width, height),
            heights: Grid::new(width * 2, height * 2),
        }
    }

    /// Width in graphics cells
    pub fn width(&self) -> u32 {
        self.graphics.width()
    }

    /// Height in graphics cells
    pub fn height(&self) -> u32 {
        self.graphics.height()
    }

    pub fn graphics(&self) -> &Grid<TileGraphic> {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut Grid<TileGraphic> {
        &mut self.graphics
    }

    pub fn heights(&self) -> &Grid<i32> {
        &self.heights
    }

    pub fn heights_mut(&mut self) -> &mut Grid<i32> {
        &mut self.heights
    }

    /// Merge the whole of `other` into this tile at `(x, y)` graphics cells
    pub fn merge(&mut self, other: &MapTile, x: u32, y: u32) {
        self.merge_region(other, 0, 0, x, y, other.width(), other.height());
    }

    /// Merge a sub-rectangle of `other` into this tile. Coordinates and
    /// dimensions are in graphics cells; the height grids are composed at
    /// doubled coordinates to preserve the 2:1 resolution ratio.
    pub fn merge_region(
        &mut self,
        other: &MapTile,
        source_x: u32,
        source_y: u32,
        dest_x: u32,
        dest_y: u32,
        width: u32,
        height: u32,
    ) {
        self.graphics
            .merge(&other.graphics, source_x, source_y, dest_x, dest_y, width, height);
        self.heights.merge(
            &other.heights,
            source_x * 2,
            source_y * 2,
            dest_x * 2,
            dest_y * 2,
            width * 2,
            height * 2,
        );
    }

    /// Sample the height grid at a cell, degrading to height 0 when the
    /// coordinate falls outside the grid
    pub fn height_at(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.heights.get(x as u32, y as u32).copied().unwrap_or(0)
    }

    /// Project a raw spatial point onto the height grid, or `None` when it
    /// lies outside the tile
    pub fn screen_to_height_index(&self, p: Point) -> Option<CellCoords> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let x = p.x / HEIGHT_UNIT;
        let y = p.y / HEIGHT_UNIT;
        if (x as u32) < self.heights.width() && (y as u32) < self.heights.height() {
            Some(CellCoords::new(x, y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_grid_is_double_resolution() {
        let tile = MapTile::new(5, 3);
        assert_eq!(tile.graphics().width(), 5);
        assert_eq!(tile.graphics().height(), 3);
        assert_eq!(tile.heights().width(), 10);
        assert_eq!(tile.heights().height(), 6);
    }

    #[test]
    fn test_merge_composes_both_grids() {
        let mut base = MapTile::new(4, 4);
        let mut section = MapTile::new(2, 2);
        section.graphics_mut().set(0, 0, 7);
        section.heights_mut().set(0, 0, 50);
        section.heights_mut().set(3, 3, 60);

        base.merge(&section, 1, 1);

        assert_eq!(base.graphics()[(1, 1)], 7);
        // Height cells land at doubled coordinates
        assert_eq!(base.heights()[(2, 2)], 50);
        assert_eq!(base.heights()[(5, 5)], 60);
        assert_eq!(base.heights()[(0, 0)], 0);
    }

    #[test]
    fn test_merge_region_scales_offsets() {
        let mut base = MapTile::new(4, 4);
        let mut section = MapTile::new(2, 2);
        section.heights_mut().set(2, 2, 9);

        base.merge_region(&section, 1, 1, 0, 0, 1, 1);
        assert_eq!(base.heights()[(0, 0)], 9);
    }

    #[test]
    fn test_height_at_degrades_out_of_range() {
        let mut tile = MapTile::new(2, 2);
        tile.heights_mut().set(1, 1, 42);

        assert_eq!(tile.height_at(1, 1), 42);
        assert_eq!(tile.height_at(-1, 0), 0);
        assert_eq!(tile.height_at(100, 100), 0);
    }

    #[test]
    fn test_screen_to_height_index() {
        let tile = MapTile::new(2, 2);
        assert_eq!(
            tile.screen_to_height_index(Point::new(33, 17)),
            Some(CellCoords::new(2, 1))
        );
        assert_eq!(tile.screen_to_height_index(Point::new(-1, 0)), None);
        assert_eq!(tile.screen_to_height_index(Point::new(64, 0)), None);
    }
}
