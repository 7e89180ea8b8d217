//! Placed features and their static metadata

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{CellCoords, Size, FEATURE_UNIT};

/// A decorative/functional object placed at feature-grid granularity.
/// Created on placement, relocated on translation, removed on deletion;
/// owned by the map model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInstance {
    pub id: Uuid,
    pub name: String,
    pub location: CellCoords,
}

impl FeatureInstance {
    pub fn new(name: impl Into<String>, location: CellCoords) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location,
        }
    }
}

/// Static metadata for a feature type, loaded by an external metadata
/// service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub world: String,
    pub category: String,
    /// Footprint in feature cells
    pub footprint: Size,
}

impl FeatureRecord {
    /// Some shipped feature definitions carry a missing or zero footprint,
    /// so anything non-positive normalizes to a single cell.
    pub fn new(name: impl Into<String>, footprint: Size) -> Self {
        Self {
            name: name.into(),
            world: String::new(),
            category: String::new(),
            footprint: Size::new(footprint.width.max(1), footprint.height.max(1)),
        }
    }

    /// Footprint in raw spatial units
    pub fn pixel_footprint(&self) -> Size {
        Size::new(
            self.footprint.width * FEATURE_UNIT,
            self.footprint.height * FEATURE_UNIT,
        )
    }
}

/// An item plus an integer grid location, used for floating tiles not yet
/// merged into the base terrain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positioned<T> {
    pub item: T,
    pub location: CellCoords,
}

impl<T> Positioned<T> {
    pub fn new(item: T, location: CellCoords) -> Self {
        Self { item, location }
    }
}
