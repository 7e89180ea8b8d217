//! Replayable-operation contract for start-position edits
//!
//! The full undo stack belongs to the host; this pins down the contract an
//! operation must satisfy, including combine-coalescing of repeated edits
//! to the same start position.

use mapwright_core::Point;

/// Storage for the numbered start-position markers
pub trait StartPositionStore {
    fn start_position(&self, index: usize) -> Option<Point>;
    fn set_start_position(&mut self, index: usize, position: Option<Point>);
}

/// Move one start position, remembering the previous location for undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStartPositionOp {
    pub index: usize,
    pub new_position: Point,
    old_position: Option<Point>,
}

impl ChangeStartPositionOp {
    pub fn new(index: usize, new_position: Point) -> Self {
        Self {
            index,
            new_position,
            old_position: None,
        }
    }

    pub fn execute(&mut self, store: &mut dyn StartPositionStore) {
        self.old_position = store.start_position(self.index);
        store.set_start_position(self.index, Some(self.new_position));
    }

    pub fn undo(&self, store: &mut dyn StartPositionStore) {
        store.set_start_position(self.index, self.old_position);
    }

    /// Coalesce a later move of the same start position into one operation
    /// whose undo restores the original location.
    ///
    /// # Panics
    ///
    /// Combining operations for different start positions is a programmer
    /// error and panics.
    pub fn combine(&self, newer: &ChangeStartPositionOp) -> ChangeStartPositionOp {
        assert_eq!(
            self.index, newer.index,
            "combined operation must target the same start position"
        );
        ChangeStartPositionOp {
            index: self.index,
            new_position: newer.new_position,
            old_position: self.old_position,
        }
    }
}
