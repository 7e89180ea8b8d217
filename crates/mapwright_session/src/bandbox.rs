//! Rubber-band marquee state machine and commit strategies
//!
//! Two behaviors share one state machine: the tile variant lifts the
//! covered base terrain into a floating section, the feature variant
//! accumulates intersecting features into the multi-feature selection. The
//! active behavior is host configuration, not something the engine decides.

use mapwright_core::{CellCoords, Point, Rect, TILE_UNIT};

use crate::items::{ItemIndex, ItemTag};

/// What committing the marquee asks the selection model to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandboxCommit {
    /// Marquee was empty or matched nothing
    Nothing,
    /// Lift this region of base terrain (tile cells) into a floating tile
    /// and select it
    LiftRegion {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Add these features to the selection set
    SelectFeatures(Vec<CellCoords>),
}

/// Marquee strategy: `Idle -> Growing -> (Committed | Idle)`
pub trait BandboxBehavior {
    /// Record both corners at the start point and begin growing
    fn start(&mut self, x: i32, y: i32);

    /// Advance the finish corner by a pointer delta
    fn grow(&mut self, dx: i32, dy: i32);

    /// Normalized marquee rectangle, empty while idle
    fn rect(&self) -> Rect;

    /// Raw start/finish corners in drag order (the line fill needs the
    /// direction, not the normalized rect)
    fn corners(&self) -> (Point, Point);

    /// Resolve the marquee against the host's items and return to idle
    fn commit(&mut self, items: &dyn ItemIndex) -> BandboxCommit;

    /// Discard the marquee without committing
    fn reset(&mut self);
}

/// Corner-pair state shared by both behaviors
#[derive(Debug, Default)]
struct BandboxState {
    start: Point,
    finish: Point,
    rect: Rect,
    growing: bool,
}

impl BandboxState {
    fn start(&mut self, x: i32, y: i32) {
        self.start = Point::new(x, y);
        self.finish = self.start;
        self.rect = Rect::from_corners(self.start, self.finish);
        self.growing = true;
    }

    fn grow(&mut self, dx: i32, dy: i32) {
        if !self.growing {
            return;
        }
        self.finish.x += dx;
        self.finish.y += dy;
        self.rect = Rect::from_corners(self.start, self.finish);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Bulk terrain selection: committing lifts the covered tile cells into a
/// floating section
#[derive(Debug, Default)]
pub struct TileBandboxBehavior {
    state: BandboxState,
}

impl TileBandboxBehavior {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BandboxBehavior for TileBandboxBehavior {
    fn start(&mut self, x: i32, y: i32) {
        self.state.start(x, y);
    }

    fn grow(&mut self, dx: i32, dy: i32) {
        self.state.grow(dx, dy);
    }

    fn rect(&self) -> Rect {
        self.state.rect
    }

    fn corners(&self) -> (Point, Point) {
        (self.state.start, self.state.finish)
    }

    fn commit(&mut self, _items: &dyn ItemIndex) -> BandboxCommit {
        let rect = self.state.rect;
        self.state.reset();

        if rect.is_empty() {
            return BandboxCommit::Nothing;
        }

        // Cover every tile cell the marquee touches
        let left = rect.x.div_euclid(TILE_UNIT);
        let top = rect.y.div_euclid(TILE_UNIT);
        let right = (rect.right() + TILE_UNIT - 1).div_euclid(TILE_UNIT);
        let bottom = (rect.bottom() + TILE_UNIT - 1).div_euclid(TILE_UNIT);

        BandboxCommit::LiftRegion {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}

/// Bulk feature selection: committing gathers intersecting, visible,
/// unlocked features into the selection set
#[derive(Debug, Default)]
pub struct FeatureBandboxBehavior {
    state: BandboxState,
}

impl FeatureBandboxBehavior {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BandboxBehavior for FeatureBandboxBehavior {
    fn start(&mut self, x: i32, y: i32) {
        self.state.start(x, y);
    }

    fn grow(&mut self, dx: i32, dy: i32) {
        self.state.grow(dx, dy);
    }

    fn rect(&self) -> Rect {
        self.state.rect
    }

    fn corners(&self) -> (Point, Point) {
        (self.state.start, self.state.finish)
    }

    fn commit(&mut self, items: &dyn ItemIndex) -> BandboxCommit {
        let rect = self.state.rect;
        self.state.reset();

        if rect.is_empty() {
            return BandboxCommit::Nothing;
        }

        let matched: Vec<CellCoords> = items
            .items_intersecting(rect)
            .into_iter()
            .filter(|item| item.selectable())
            .filter_map(|item| match item.tag {
                ItemTag::Feature(coords) => Some(coords),
                _ => None,
            })
            .collect();

        if matched.is_empty() {
            BandboxCommit::Nothing
        } else {
            BandboxCommit::SelectFeatures(matched)
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
