//! Pointer/keyboard/drag-drop dispatch
//!
//! Translates raw interaction events into selection, marquee and placement
//! operations, tracking mouse-down state and last-pointer-position deltas.
//! Everything runs synchronously on the interaction thread.

use tracing::debug;

use mapwright_core::{FeatureInstance, FeatureRecord, Point};

use crate::commands::MapCommands;
use crate::items::{ItemIndex, ItemTag};
use crate::placement::{line_fill, place_feature_at, sporadic_fill};
use crate::selection::SelectionModel;

/// Pointer button an entry point was invoked with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keys the session reacts to; hosts filter everything else out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
}

/// Payload carried by a drag-drop from the host's palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Terrain-section identifier
    Tile(i32),
    /// Feature-type name
    Feature(String),
    /// Start-position number
    StartPosition(usize),
}

/// How a left-drag marquee is interpreted on release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Plain bulk selection
    #[default]
    Select,
    /// Fill every footprint slot in the marquee
    Fill,
    /// Fill slots probabilistically at the configured magnitude
    Sporadic,
    /// Place along the dragged line
    Line,
}

/// Interaction state for one map view
pub struct SessionController {
    mouse_down: bool,
    last_pos: Point,
    bandbox_mode: bool,
    /// Fill variant armed by the mouse-down that started the marquee; the
    /// mode may change mid-drag without affecting the commit
    armed_mode: PlacementMode,
    /// Active marquee interpretation, host-set
    pub placement_mode: PlacementMode,
    /// Sporadic fill chance, 0..=100
    pub fill_magnitude: u8,
    /// Feature type the fill modes place; owned session state, set by the
    /// host when the palette selection changes
    pub active_feature: Option<FeatureRecord>,
    rng: fastrand::Rng,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            mouse_down: false,
            last_pos: Point::default(),
            bandbox_mode: false,
            armed_mode: PlacementMode::Select,
            placement_mode: PlacementMode::Select,
            fill_magnitude: 50,
            active_feature: None,
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeded variant so hosts and tests can pin the sporadic fill pattern
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            ..Self::new()
        }
    }

    pub fn mouse_down(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        items: &dyn ItemIndex,
        button: MouseButton,
        x: i32,
        y: i32,
    ) {
        match button {
            MouseButton::Left => self.left_mouse_down(model, map, items, x, y),
            MouseButton::Right => {
                // Quick-place shortcut for the active feature
                let Some(record) = self.active_feature.clone() else {
                    return;
                };
                if items.is_in_selection(x, y) {
                    return;
                }
                self.mouse_down = true;
                self.last_pos = Point::new(x, y);
                model.drag_drop_feature(map, &record.name, x, y);
            }
        }
    }

    fn left_mouse_down(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        items: &dyn ItemIndex,
        x: i32,
        y: i32,
    ) {
        let fill_mode = self.placement_mode != PlacementMode::Select;
        if fill_mode && self.active_feature.is_some() {
            self.mouse_down = true;
            self.last_pos = Point::new(x, y);
            self.armed_mode = self.placement_mode;
            model.clear_selection(map);
            model.start_bandbox(x, y);
            self.bandbox_mode = true;
            return;
        }

        self.mouse_down = true;
        self.last_pos = Point::new(x, y);
        self.armed_mode = PlacementMode::Select;

        if items.is_in_selection(x, y) {
            // Pressing inside the highlight begins a translation drag
            return;
        }

        if let Some(hit) = items.hit_test(x, y) {
            match hit.tag {
                ItemTag::Tile(index) => model.select_tile(map, index),
                ItemTag::Feature(coords) => model.select_feature(map, coords),
                ItemTag::StartPosition(index) => model.select_start_position(map, index),
            }
        } else {
            model.clear_selection(map);
            model.start_bandbox(x, y);
            self.bandbox_mode = true;
        }
    }

    pub fn mouse_move(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        x: i32,
        y: i32,
    ) {
        let dx = x - self.last_pos.x;
        let dy = y - self.last_pos.y;

        if self.mouse_down {
            if self.bandbox_mode {
                model.grow_bandbox(dx, dy);
            } else {
                model.translate_selection(map, dx, dy);
            }
        }

        self.last_pos = Point::new(x, y);
    }

    pub fn mouse_up(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        items: &dyn ItemIndex,
    ) {
        self.mouse_down = false;

        if !self.bandbox_mode {
            model.flush_translation(map);
            return;
        }
        self.bandbox_mode = false;

        match self.armed_mode {
            PlacementMode::Select => model.commit_bandbox(map, items),
            PlacementMode::Fill => self.commit_sporadic(model, map, 100),
            PlacementMode::Sporadic => self.commit_sporadic(model, map, self.fill_magnitude),
            PlacementMode::Line => self.commit_line(model, map),
        }
        self.armed_mode = PlacementMode::Select;
    }

    pub fn key_down(&mut self, model: &mut SelectionModel, map: &mut dyn MapCommands, key: Key) {
        match key {
            Key::Delete => model.delete_selection(map),
            Key::Escape => model.clear_selection(map),
        }
    }

    pub fn lose_focus(&mut self, model: &mut SelectionModel, map: &mut dyn MapCommands) {
        self.mouse_down = false;
        self.bandbox_mode = false;
        model.cancel_bandbox();
        model.clear_selection(map);
    }

    pub fn drag_drop(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        payload: DragPayload,
        x: i32,
        y: i32,
    ) {
        match payload {
            DragPayload::Tile(id) => model.drag_drop_tile(map, id, x, y),
            DragPayload::Feature(name) => {
                model.drag_drop_feature(map, &name, x, y);
            }
            DragPayload::StartPosition(index) => {
                model.drag_drop_start_position(map, index, x, y)
            }
        }
    }

    fn commit_sporadic(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        magnitude: u8,
    ) {
        let Some(record) = self.active_feature.clone() else {
            model.cancel_bandbox();
            return;
        };

        let rect = model.bandbox_rect();
        model.cancel_bandbox();
        let attempts = sporadic_fill(map, &record, rect, magnitude, &mut self.rng);
        self.select_placed(model, map, attempts);
    }

    fn commit_line(&mut self, model: &mut SelectionModel, map: &mut dyn MapCommands) {
        let Some(record) = self.active_feature.clone() else {
            model.cancel_bandbox();
            return;
        };

        let (start, finish) = model.bandbox_corners();
        model.cancel_bandbox();
        let attempts = line_fill(map, &record, start, finish);
        self.select_placed(model, map, attempts);
    }

    fn select_placed(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        attempts: Vec<Option<FeatureInstance>>,
    ) {
        let placed: Vec<_> = attempts.into_iter().flatten().map(|f| f.location).collect();
        debug!(selected = placed.len(), "selecting fill placements");
        model.clear_selection(map);
        model.select_features(map, placed);
    }

    /// Single-feature placement primitive for hosts that bind it to a
    /// dedicated gesture
    pub fn place_active_feature(
        &mut self,
        model: &mut SelectionModel,
        map: &mut dyn MapCommands,
        x: i32,
        y: i32,
    ) {
        let Some(record) = &self.active_feature else {
            return;
        };
        if let Some(placed) = place_feature_at(map, &record.name, x, y) {
            model.select_feature(map, placed.location);
        }
    }
}
