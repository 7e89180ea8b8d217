//! Presentation-item queries supplied by the host
//!
//! Hit-testing and rectangle queries run against whatever the host is
//! currently drawing, so the session engine asks rather than guessing from
//! map data.

use mapwright_core::{CellCoords, Rect};

/// What a presentation item stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTag {
    /// A floating tile, by index in the floating set
    Tile(usize),
    /// A feature, by feature-cell location
    Feature(CellCoords),
    /// A numbered start position
    StartPosition(usize),
}

/// A selectable item as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapItem {
    pub tag: ItemTag,
    pub visible: bool,
    pub locked: bool,
}

impl MapItem {
    pub fn new(tag: ItemTag) -> Self {
        Self {
            tag,
            visible: true,
            locked: false,
        }
    }

    pub fn selectable(&self) -> bool {
        self.visible && !self.locked
    }
}

/// Spatial queries over the host's presentation items
pub trait ItemIndex {
    /// Topmost selectable item under a raw spatial point
    fn hit_test(&self, x: i32, y: i32) -> Option<MapItem>;

    /// Every item whose draw bounds intersect `rect`
    fn items_intersecting(&self, rect: Rect) -> Vec<MapItem>;

    /// Whether the point lies inside the currently highlighted selection
    fn is_in_selection(&self, x: i32, y: i32) -> bool;
}
