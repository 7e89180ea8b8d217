//! mapwright_session - interactive editing core for the mapwright editor
//!
//! This crate implements the selection, bandbox and spatial-composition
//! engine sitting between a host presentation layer and the map model:
//! - `SelectionModel` - what is selected, with quantized drag translation
//! - `BandboxBehavior` - rubber-band marquee strategies (terrain/feature)
//! - `SessionController` - pointer/keyboard/drag-drop dispatch
//! - Placement algorithms - sporadic and line fill at marquee commit
//! - `MapCommands` / `ItemIndex` - the collaborator seams the host supplies
//!
//! Everything here is synchronous and single-threaded: entry points are
//! called on one interaction thread, mutations are issued through
//! `MapCommands`, and change notifications come back as drained
//! [`SessionEvent`]s.

mod bandbox;
mod commands;
mod controller;
mod events;
mod items;
mod ops;
mod placement;
mod selection;
#[cfg(test)]
mod testing;

pub use bandbox::{BandboxBehavior, BandboxCommit, FeatureBandboxBehavior, TileBandboxBehavior};
pub use commands::MapCommands;
pub use controller::{DragPayload, Key, MouseButton, PlacementMode, SessionController};
pub use events::{EventQueue, SessionEvent};
pub use items::{ItemIndex, ItemTag, MapItem};
pub use ops::{ChangeStartPositionOp, StartPositionStore};
pub use placement::{line_fill, place_feature_at, sporadic_fill};
pub use selection::{Selection, SelectionModel};
