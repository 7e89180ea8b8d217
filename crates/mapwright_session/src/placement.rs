//! Bulk feature placement run when a fill-mode marquee commits
//!
//! Both algorithms synthesize placement points from the marquee geometry
//! and feed them through the same single-feature primitive; the caller
//! selects whichever attempts actually landed.

use tracing::debug;

use mapwright_core::{FeatureInstance, FeatureRecord, Point, Rect};

use crate::commands::MapCommands;

/// Place a feature at a raw spatial point, projecting through the open
/// map's height grid. `None` outside the map or when placement is
/// rejected.
pub fn place_feature_at(
    map: &mut dyn MapCommands,
    name: &str,
    x: i32,
    y: i32,
) -> Option<FeatureInstance> {
    let coords = map.height_index_of(x, y)?;
    map.place_feature(name, coords)
}

/// Probabilistic fill: tile the marquee with footprint-sized slots and
/// place at each slot's top-left corner with `magnitude` percent chance.
///
/// Magnitude 0 never places; magnitude 100 fills every slot. Returns every
/// attempt, successful or not, in slot order.
///
/// # Panics
///
/// Panics if `magnitude` exceeds 100.
pub fn sporadic_fill(
    map: &mut dyn MapCommands,
    record: &FeatureRecord,
    rect: Rect,
    magnitude: u8,
    rng: &mut fastrand::Rng,
) -> Vec<Option<FeatureInstance>> {
    assert!(magnitude <= 100, "magnitude is a percentage");

    if magnitude == 0 {
        return Vec::new();
    }

    let footprint = record.pixel_footprint();
    let slots_x = rect.width / footprint.width + 1;
    let slots_y = rect.height / footprint.height + 1;

    let mut attempts = Vec::new();
    for i in 0..slots_x {
        for j in 0..slots_y {
            if rng.f64() * 100.0 <= f64::from(magnitude) {
                attempts.push(place_feature_at(
                    map,
                    &record.name,
                    rect.x + i * footprint.width,
                    rect.y + j * footprint.height,
                ));
            }
        }
    }

    debug!(
        feature = %record.name,
        magnitude,
        attempted = attempts.len(),
        "sporadic fill committed"
    );
    attempts
}

/// Directional line fill: interpolate placement points between the raw
/// marquee corners, one per footprint-length of the longer axis.
///
/// The corner order matters; the points walk from `start` toward `finish`.
pub fn line_fill(
    map: &mut dyn MapCommands,
    record: &FeatureRecord,
    start: Point,
    finish: Point,
) -> Vec<Option<FeatureInstance>> {
    let footprint = record.pixel_footprint();
    let span = Rect::from_corners(start, finish);
    let points = (span.width / footprint.width).max(span.height / footprint.height);

    let mut attempts = Vec::new();
    for i in 0..points {
        let t = i as f32 / points as f32;
        let x = lerp(start.x, finish.x, t);
        let y = lerp(start.y, finish.y, t);
        attempts.push(place_feature_at(map, &record.name, x as i32, y as i32));
    }

    debug!(
        feature = %record.name,
        attempted = attempts.len(),
        "line fill committed"
    );
    attempts
}

fn lerp(first: i32, second: i32, by: f32) -> f32 {
    first as f32 + (second as f32 - first as f32) * by
}
