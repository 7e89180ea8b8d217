//! Single source of truth for what is currently selected
//!
//! Three mutually exclusive selection kinds share one tagged variant, so
//! the exclusivity invariant holds by construction. A floating tile is
//! selected-only state: losing its selection always merges it back into
//! the base terrain.

use std::collections::BTreeSet;

use tracing::debug;

use mapwright_core::{
    screen_to_tile_cell, CellCoords, FeatureInstance, Point, Rect, FEATURE_UNIT, TILE_UNIT,
};

use crate::bandbox::{BandboxBehavior, BandboxCommit};
use crate::commands::MapCommands;
use crate::events::{EventQueue, SessionEvent};
use crate::items::ItemIndex;

/// The current selection, exactly one kind at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// A floating tile, by index in the floating set
    Tile(usize),
    /// One or more features, by feature-cell location
    Features(BTreeSet<CellCoords>),
    /// A numbered start position
    StartPosition(usize),
}

/// Selection state plus the quantized drag accumulator and the marquee
/// strategy the host configured
pub struct SelectionModel {
    selection: Selection,
    delta_x: i32,
    delta_y: i32,
    translation_open: bool,
    bandbox: Box<dyn BandboxBehavior>,
    events: EventQueue,
}

impl SelectionModel {
    pub fn new(bandbox: Box<dyn BandboxBehavior>) -> Self {
        Self {
            selection: Selection::None,
            delta_x: 0,
            delta_y: 0,
            translation_open: false,
            bandbox,
            events: EventQueue::default(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn has_selection(&self) -> bool {
        self.selection != Selection::None
    }

    /// Raw drag distance not yet emitted as whole-cell moves
    pub fn pending_translation(&self) -> (i32, i32) {
        (self.delta_x, self.delta_y)
    }

    /// Take every pending change notification
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    /// Swap the marquee strategy (host configuration, e.g. when the active
    /// editing tab changes). Any in-progress marquee is discarded.
    pub fn set_bandbox_behavior(&mut self, bandbox: Box<dyn BandboxBehavior>) {
        self.bandbox = bandbox;
        self.events.push(SessionEvent::BandboxChanged);
    }

    pub fn select_tile(&mut self, map: &mut dyn MapCommands, index: usize) {
        if self.translation_open {
            self.flush_translation(map);
        }
        self.set_selection(Selection::Tile(index));
    }

    pub fn select_feature(&mut self, map: &mut dyn MapCommands, coords: CellCoords) {
        self.merge_down_selected_tile(map);
        self.set_selection(Selection::Features(BTreeSet::from([coords])));
    }

    /// Replace the selection with a set of features (empty clears it)
    pub fn select_features(&mut self, map: &mut dyn MapCommands, coords: Vec<CellCoords>) {
        self.merge_down_selected_tile(map);
        if coords.is_empty() {
            self.set_selection(Selection::None);
        } else {
            self.set_selection(Selection::Features(coords.into_iter().collect()));
        }
    }

    pub fn select_start_position(&mut self, map: &mut dyn MapCommands, index: usize) {
        self.merge_down_selected_tile(map);
        self.set_selection(Selection::StartPosition(index));
    }

    /// Flush any open translation, merge a selected floating tile back into
    /// the base terrain, and empty the selection
    pub fn clear_selection(&mut self, map: &mut dyn MapCommands) {
        if self.translation_open {
            self.flush_translation(map);
        }
        self.merge_down_selected_tile(map);
        self.set_selection(Selection::None);
    }

    /// Remove whichever entities are selected, then clear the selection
    pub fn delete_selection(&mut self, map: &mut dyn MapCommands) {
        match std::mem::take(&mut self.selection) {
            Selection::None => return,
            Selection::Tile(index) => {
                debug!(index, "deleting selected tile");
                map.remove_tile(index);
            }
            Selection::Features(coords) => {
                debug!(count = coords.len(), "deleting selected features");
                for c in coords {
                    map.remove_feature(c);
                }
            }
            Selection::StartPosition(index) => {
                debug!(index, "deleting selected start position");
                map.remove_start_position(index);
            }
        }
        self.events.push(SessionEvent::SelectionChanged);
        self.events.push(SessionEvent::HasSelectionChanged(false));
    }

    /// Route a raw pointer delta to the selected entities, quantizing to
    /// each kind's grid unit and retaining the remainder
    pub fn translate_selection(&mut self, map: &mut dyn MapCommands, dx: i32, dy: i32) {
        match &mut self.selection {
            Selection::None => return,
            Selection::StartPosition(index) => {
                // Start positions live at raw granularity, nothing to
                // accumulate
                map.translate_start_position(*index, dx, dy);
            }
            Selection::Tile(index) => {
                self.delta_x += dx;
                self.delta_y += dy;
                map.translate_tile(*index, self.delta_x / TILE_UNIT, self.delta_y / TILE_UNIT);
                self.delta_x %= TILE_UNIT;
                self.delta_y %= TILE_UNIT;
            }
            Selection::Features(selected) => {
                self.delta_x += dx;
                self.delta_y += dy;

                let quant_x = self.delta_x / FEATURE_UNIT;
                let quant_y = self.delta_y / FEATURE_UNIT;

                let coords: Vec<CellCoords> = selected.iter().copied().collect();
                if map.translate_feature_batch(&coords, quant_x, quant_y) {
                    if quant_x != 0 || quant_y != 0 {
                        *selected = coords
                            .into_iter()
                            .map(|c| c.translated(quant_x, quant_y))
                            .collect();
                        self.events.push(SessionEvent::SelectionChanged);
                    }
                    self.delta_x %= FEATURE_UNIT;
                    self.delta_y %= FEATURE_UNIT;
                }
                // On failure the accumulator carries forward untouched; the
                // distance already dragged stays pending for the next call.
            }
        }
        self.translation_open = true;
    }

    /// Close the translation session so the host can coalesce the moves
    /// into one undoable unit
    pub fn flush_translation(&mut self, map: &mut dyn MapCommands) {
        self.delta_x = 0;
        self.delta_y = 0;
        self.translation_open = false;
        map.flush_translation();
    }

    /// Place a feature at a raw pointer coordinate and select it. No-op
    /// when the point lies outside the open map or placement is rejected.
    pub fn drag_drop_feature(
        &mut self,
        map: &mut dyn MapCommands,
        name: &str,
        x: i32,
        y: i32,
    ) -> Option<FeatureInstance> {
        let coords = map.height_index_of(x, y)?;
        let placed = map.place_feature(name, coords)?;
        debug!(name, ?coords, "feature drag-dropped");
        self.select_feature(map, placed.location);
        Some(placed)
    }

    /// Place a new floating tile at a raw pointer coordinate and select it
    pub fn drag_drop_tile(&mut self, map: &mut dyn MapCommands, id: i32, x: i32, y: i32) {
        let cell = screen_to_tile_cell(Point::new(x, y));
        if let Some(index) = map.place_tile(id, cell.x, cell.y) {
            debug!(id, index, "tile drag-dropped");
            self.select_tile(map, index);
        }
    }

    /// Place or move a start position at a raw pointer coordinate and
    /// select it
    pub fn drag_drop_start_position(
        &mut self,
        map: &mut dyn MapCommands,
        index: usize,
        x: i32,
        y: i32,
    ) {
        map.set_start_position(index, x, y);
        self.select_start_position(map, index);
    }

    pub fn start_bandbox(&mut self, x: i32, y: i32) {
        self.bandbox.start(x, y);
        self.events.push(SessionEvent::BandboxChanged);
    }

    pub fn grow_bandbox(&mut self, dx: i32, dy: i32) {
        self.bandbox.grow(dx, dy);
        self.events.push(SessionEvent::BandboxChanged);
    }

    pub fn bandbox_rect(&self) -> Rect {
        self.bandbox.rect()
    }

    /// Raw marquee corners in drag order
    pub fn bandbox_corners(&self) -> (Point, Point) {
        self.bandbox.corners()
    }

    /// Resolve the marquee through the active behavior and apply the
    /// resulting selection
    pub fn commit_bandbox(&mut self, map: &mut dyn MapCommands, items: &dyn ItemIndex) {
        let commit = self.bandbox.commit(items);
        self.events.push(SessionEvent::BandboxChanged);

        match commit {
            BandboxCommit::Nothing => {}
            BandboxCommit::LiftRegion {
                x,
                y,
                width,
                height,
            } => {
                if let Some(index) = map.lift_area(x, y, width, height) {
                    debug!(index, "bandbox lifted terrain section");
                    self.select_tile(map, index);
                }
            }
            BandboxCommit::SelectFeatures(coords) => {
                debug!(count = coords.len(), "bandbox selected features");
                self.add_features_to_selection(map, coords);
            }
        }
    }

    /// Discard an in-progress marquee without committing it
    pub fn cancel_bandbox(&mut self) {
        self.bandbox.reset();
        self.events.push(SessionEvent::BandboxChanged);
    }

    fn add_features_to_selection(&mut self, map: &mut dyn MapCommands, coords: Vec<CellCoords>) {
        if coords.is_empty() {
            return;
        }
        if let Selection::Features(selected) = &self.selection {
            let mut merged = selected.clone();
            merged.extend(coords);
            self.set_selection(Selection::Features(merged));
        } else {
            self.select_features(map, coords);
        }
    }

    fn merge_down_selected_tile(&mut self, map: &mut dyn MapCommands) {
        if let Selection::Tile(index) = self.selection {
            debug!(index, "merging floating tile into base terrain");
            map.merge_tile(index);
            self.set_selection(Selection::None);
        }
    }

    fn set_selection(&mut self, next: Selection) {
        if self.selection == next {
            return;
        }
        let had = self.has_selection();
        self.selection = next;
        self.events.push(SessionEvent::SelectionChanged);
        let has = self.has_selection();
        if has != had {
            self.events.push(SessionEvent::HasSelectionChanged(has));
        }
    }
}
