//! Shared test doubles for the session engine

use std::collections::BTreeMap;

use mapwright_core::{CellCoords, FeatureInstance, Point, Rect};

use crate::commands::MapCommands;
use crate::items::{ItemIndex, MapItem};

/// Map pixel size the recording map pretends to have
const MAP_EXTENT: i32 = 2048;

/// `MapCommands` double that records every call and lets tests force
/// failure outcomes
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub tiles: Vec<CellCoords>,
    pub features: BTreeMap<CellCoords, FeatureInstance>,
    pub start_positions: BTreeMap<usize, Point>,

    pub tile_moves: Vec<(usize, i32, i32)>,
    pub batch_calls: Vec<(Vec<CellCoords>, i32, i32)>,
    pub start_moves: Vec<(usize, i32, i32)>,
    pub merged_tiles: Vec<usize>,
    pub removed_tiles: Vec<usize>,
    pub removed_features: Vec<CellCoords>,
    pub removed_starts: Vec<usize>,
    pub lift_calls: Vec<(i32, i32, i32, i32)>,
    pub flush_count: usize,

    pub fail_batch: bool,
    pub reject_placement: bool,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapCommands for RecordingMap {
    fn place_tile(&mut self, _id: i32, x: i32, y: i32) -> Option<usize> {
        self.tiles.push(CellCoords::new(x, y));
        Some(self.tiles.len() - 1)
    }

    fn remove_tile(&mut self, index: usize) {
        self.removed_tiles.push(index);
    }

    fn translate_tile(&mut self, index: usize, dx: i32, dy: i32) {
        self.tile_moves.push((index, dx, dy));
        if let Some(loc) = self.tiles.get_mut(index) {
            *loc = loc.translated(dx, dy);
        }
    }

    fn merge_tile(&mut self, index: usize) {
        self.merged_tiles.push(index);
    }

    fn lift_area(&mut self, x: i32, y: i32, width: i32, height: i32) -> Option<usize> {
        self.lift_calls.push((x, y, width, height));
        self.tiles.push(CellCoords::new(x, y));
        Some(self.tiles.len() - 1)
    }

    fn place_feature(&mut self, name: &str, coords: CellCoords) -> Option<FeatureInstance> {
        if self.reject_placement || self.features.contains_key(&coords) {
            return None;
        }
        let instance = FeatureInstance::new(name, coords);
        self.features.insert(coords, instance.clone());
        Some(instance)
    }

    fn remove_feature(&mut self, coords: CellCoords) {
        self.features.remove(&coords);
        self.removed_features.push(coords);
    }

    fn translate_feature_batch(&mut self, coords: &[CellCoords], dx: i32, dy: i32) -> bool {
        self.batch_calls.push((coords.to_vec(), dx, dy));
        if self.fail_batch {
            return false;
        }
        for c in coords {
            if let Some(instance) = self.features.remove(c) {
                let moved = c.translated(dx, dy);
                self.features.insert(
                    moved,
                    FeatureInstance {
                        location: moved,
                        ..instance
                    },
                );
            }
        }
        true
    }

    fn flush_translation(&mut self) {
        self.flush_count += 1;
    }

    fn set_start_position(&mut self, index: usize, x: i32, y: i32) {
        self.start_positions.insert(index, Point::new(x, y));
    }

    fn translate_start_position(&mut self, index: usize, dx: i32, dy: i32) {
        self.start_moves.push((index, dx, dy));
        if let Some(p) = self.start_positions.get_mut(&index) {
            p.x += dx;
            p.y += dy;
        }
    }

    fn remove_start_position(&mut self, index: usize) {
        self.start_positions.remove(&index);
        self.removed_starts.push(index);
    }

    fn height_index_of(&self, x: i32, y: i32) -> Option<CellCoords> {
        if x < 0 || y < 0 || x >= MAP_EXTENT || y >= MAP_EXTENT {
            return None;
        }
        Some(CellCoords::new(x / 16, y / 16))
    }
}

/// `ItemIndex` double backed by a fixed item list; everything intersects
/// and nothing is highlighted unless configured
#[derive(Debug, Default)]
pub struct StubItems {
    pub items: Vec<MapItem>,
    pub hit: Option<MapItem>,
    pub in_selection: bool,
}

impl ItemIndex for StubItems {
    fn hit_test(&self, _x: i32, _y: i32) -> Option<MapItem> {
        self.hit
    }

    fn items_intersecting(&self, _rect: Rect) -> Vec<MapItem> {
        self.items.clone()
    }

    fn is_in_selection(&self, _x: i32, _y: i32) -> bool {
        self.in_selection
    }
}
