//! Core data structures for the mapwright map editor
//!
//! This crate provides the fundamental types for representing tile/feature
//! maps:
//! - `Grid<T>` - Dense fixed-size 2D cell storage with sub-rectangle merge
//! - `MapTile` - Graphics grid paired with a 2x-resolution height grid
//! - `FeatureInstance` / `FeatureRecord` - Placed features and their metadata
//! - `Positioned<T>` - Floating tiles awaiting merge into the base terrain
//! - Geometry primitives shared with the session engine

mod feature;
mod geom;
mod grid;
mod tile;

pub use feature::{FeatureInstance, FeatureRecord, Positioned};
pub use geom::{
    screen_to_feature_cell, screen_to_tile_cell, CellCoords, Point, Rect, Size, FEATURE_UNIT,
    HEIGHT_UNIT, TILE_UNIT,
};
pub use grid::{Grid, GridError};
pub use tile::{MapTile, TileGraphic};
