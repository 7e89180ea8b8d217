//! Geometry primitives shared by the grid, tile and session types

use serde::{Deserialize, Serialize};

/// Size in spatial units of one graphics-grid cell
pub const TILE_UNIT: i32 = 32;
/// Size in spatial units of one height-grid cell (half a graphics cell)
pub const HEIGHT_UNIT: i32 = 16;
/// Size in spatial units of one feature-grid cell
pub const FEATURE_UNIT: i32 = 16;

/// A point in raw spatial units (pointer coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A location on one of the cell grids (tile, height or feature units)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellCoords {
    pub x: i32,
    pub y: i32,
}

impl CellCoords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This coordinate shifted by a whole-cell delta
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle in spatial units
///
/// Always well-formed: `width` and `height` are non-negative and `(x, y)`
/// is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalized rectangle spanning two corner points, independent of the
    /// order the corners were given in
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Convert a raw spatial point to the tile cell containing it
pub fn screen_to_tile_cell(p: Point) -> CellCoords {
    CellCoords::new(p.x / TILE_UNIT, p.y / TILE_UNIT)
}

/// Convert a raw spatial point to the feature/height cell containing it
pub fn screen_to_feature_cell(p: Point) -> CellCoords {
    CellCoords::new(p.x / FEATURE_UNIT, p.y / FEATURE_UNIT)
}
