//! Dense fixed-size 2D cell storage

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by checked grid composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("source rectangle ({x}, {y}) {width}x{height} out of bounds for {grid_width}x{grid_height} grid")]
    SourceOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },
    #[error("destination rectangle ({x}, {y}) {width}x{height} out of bounds for {grid_width}x{grid_height} grid")]
    DestOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },
}

/// A dense `width x height` array of cells addressable by `(x, y)` or
/// linear index. Dimensions are fixed at construction; composition never
/// grows a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to the default value
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; (width * height) as usize],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Linear index of a cell
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.index_of(x, y))
    }

    /// Set a cell. Out-of-range coordinates are a no-op.
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index_of(x, y);
        self.cells[index] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn rect_in_bounds(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        x.checked_add(width).is_some_and(|r| r <= self.width)
            && y.checked_add(height).is_some_and(|b| b <= self.height)
    }
}

impl<T: Clone> Grid<T> {
    /// Copy a `width x height` sub-rectangle of `source` starting at
    /// `(source_x, source_y)` into this grid at `(dest_x, dest_y)`, cell by
    /// cell, with no interpolation.
    ///
    /// Out-of-range rectangles are a caller contract violation.
    ///
    /// # Panics
    ///
    /// Panics if either rectangle falls outside its grid. Callers that want
    /// an error instead should use [`Grid::try_merge`].
    pub fn merge(
        &mut self,
        source: &Grid<T>,
        source_x: u32,
        source_y: u32,
        dest_x: u32,
        dest_y: u32,
        width: u32,
        height: u32,
    ) {
        if let Err(e) = self.try_merge(source, source_x, source_y, dest_x, dest_y, width, height) {
            panic!("grid merge contract violation: {e}");
        }
    }

    /// Checked variant of [`Grid::merge`]
    pub fn try_merge(
        &mut self,
        source: &Grid<T>,
        source_x: u32,
        source_y: u32,
        dest_x: u32,
        dest_y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), GridError> {
        if !source.rect_in_bounds(source_x, source_y, width, height) {
            return Err(GridError::SourceOutOfBounds {
                x: source_x,
                y: source_y,
                width,
                height,
                grid_width: source.width,
                grid_height: source.height,
            });
        }
        if !self.rect_in_bounds(dest_x, dest_y, width, height) {
            return Err(GridError::DestOutOfBounds {
                x: dest_x,
                y: dest_y,
                width,
                height,
                grid_width: self.width,
                grid_height: self.height,
            });
        }

        for row in 0..height {
            for col in 0..width {
                let value = source.cells[source.index_of(source_x + col, source_y + row)].clone();
                let index = self.index_of(dest_x + col, dest_y + row);
                self.cells[index] = value;
            }
        }

        Ok(())
    }
}

impl<T> std::ops::Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "grid index ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[(y * self.width + x) as usize]
    }
}

impl<T> std::ops::IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        assert!(
            x < self.width && y < self.height,
            "grid index ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        &mut self.cells[(y * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_default_filled() {
        let grid: Grid<u32> = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_merge_overwrites_sub_rectangle() {
        let mut dest = Grid::filled(4, 4, 'B');
        let source = Grid::filled(2, 2, 'A');

        dest.merge(&source, 0, 0, 1, 1, 2, 2);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if (1..=2).contains(&x) && (1..=2).contains(&y) {
                    'A'
                } else {
                    'B'
                };
                assert_eq!(dest[(x, y)], expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_merge_partial_source_rectangle() {
        let mut dest = Grid::filled(3, 3, 0);
        let mut source = Grid::filled(2, 2, 0);
        source[(1, 1)] = 7;

        dest.merge(&source, 1, 1, 0, 0, 1, 1);
        assert_eq!(dest[(0, 0)], 7);
        assert_eq!(dest[(1, 0)], 0);
    }

    #[test]
    fn test_try_merge_source_out_of_bounds() {
        let mut dest = Grid::filled(4, 4, 0);
        let source = Grid::filled(2, 2, 1);
        let result = dest.try_merge(&source, 1, 1, 0, 0, 2, 2);
        assert!(matches!(result, Err(GridError::SourceOutOfBounds { .. })));
        // Destination untouched on failure
        assert!(dest.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_try_merge_dest_out_of_bounds() {
        let mut dest = Grid::filled(4, 4, 0);
        let source = Grid::filled(2, 2, 1);
        let result = dest.try_merge(&source, 0, 0, 3, 3, 2, 2);
        assert!(matches!(result, Err(GridError::DestOutOfBounds { .. })));
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_merge_panics_on_bad_rectangle() {
        let mut dest: Grid<u8> = Grid::new(2, 2);
        let source: Grid<u8> = Grid::new(4, 4);
        dest.merge(&source, 0, 0, 0, 0, 4, 4);
    }

    #[test]
    fn test_set_out_of_range_is_noop() {
        let mut grid = Grid::filled(2, 2, 0);
        grid.set(5, 5, 9);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }
}
