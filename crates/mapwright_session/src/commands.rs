//! Abstract mutation interface for the currently open map
//!
//! The session engine never touches map storage directly; every mutation
//! goes through this trait so the host can route it into its undo/redo
//! machinery. All operations act on the currently open map and are no-ops
//! (or `None`/`false`) when none is open.

use mapwright_core::{CellCoords, FeatureInstance};

pub trait MapCommands {
    /// Place a new floating tile section at a tile-cell location, returning
    /// its index in the floating set
    fn place_tile(&mut self, id: i32, x: i32, y: i32) -> Option<usize>;

    /// Remove a floating tile by index
    fn remove_tile(&mut self, index: usize);

    /// Move a floating tile by a whole-cell delta
    fn translate_tile(&mut self, index: usize, dx: i32, dy: i32);

    /// Merge a floating tile down into the base terrain, removing it from
    /// the floating set
    fn merge_tile(&mut self, index: usize);

    /// Lift a rectangle of base terrain (tile cells) into a new floating
    /// tile, returning its index
    fn lift_area(&mut self, x: i32, y: i32, width: i32, height: i32) -> Option<usize>;

    /// Place a feature at a feature-cell location. `None` when placement is
    /// rejected (collision, unknown type, no open map).
    fn place_feature(&mut self, name: &str, coords: CellCoords) -> Option<FeatureInstance>;

    /// Remove the feature occupying a feature cell
    fn remove_feature(&mut self, coords: CellCoords);

    /// Move a set of features by a whole-cell delta as one atomic batch:
    /// either every feature moves and `true` is returned, or none do.
    fn translate_feature_batch(&mut self, coords: &[CellCoords], dx: i32, dy: i32) -> bool;

    /// Close the current translation session so the host can coalesce the
    /// accumulated moves into one undoable unit
    fn flush_translation(&mut self);

    /// Place or move a numbered start position at raw spatial coordinates
    fn set_start_position(&mut self, index: usize, x: i32, y: i32);

    /// Move a start position by a raw 1:1 delta
    fn translate_start_position(&mut self, index: usize, dx: i32, dy: i32);

    /// Remove a start position
    fn remove_start_position(&mut self, index: usize);

    /// Project a raw spatial point onto the open map's height/feature grid.
    /// `None` when the point lies outside the map or no map is open.
    fn height_index_of(&self, x: i32, y: i32) -> Option<CellCoords>;
}
