// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry adapter: pointer coordinates ↔ logical values.
//!
//! ## Directions
//!
//! - Horizontal tracks run left → right; the logical fraction is
//!   `(x - left) / width`.
//! - Vertical tracks are bottom-anchored and run bottom → top; the logical
//!   fraction is `1 - (y - top) / height`.
//! - `inverted` is a single flip (`1 - f`) relative to that natural direction.
//!
//! Inversion is a presentation transform only. It is applied once when reading
//! a pointer ([`position_to_value`]) and once when placing a value
//! ([`render_percentage`], [`point_for_value`]), so the two cancel under a
//! round trip. Values held by the model are never inverted.
//!
//! ## Missing measurements
//!
//! A track that is not measured yet (`None`) or has no extent along its axis
//! maps every position to `min`. Positions outside the track clamp to the
//! nearest end.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_slider::SliderConfig;
//! use understory_slider::geometry::position_to_value;
//!
//! let config = SliderConfig::new(0.0, 100.0).with_step(10.0);
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//! // 47% of the way along snaps to the nearest step.
//! assert_eq!(position_to_value(&config, Point::new(94.0, 10.0), Some(track)), 50.0);
//! ```

use kurbo::{Point, Rect};

use crate::config::{Orientation, SliderConfig};

/// Direction parameters of a track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackGeometry {
    /// Track direction.
    pub orientation: Orientation,
    /// Single flip relative to the natural direction.
    pub inverted: bool,
}

impl From<&SliderConfig> for TrackGeometry {
    fn from(config: &SliderConfig) -> Self {
        Self {
            orientation: config.orientation,
            inverted: config.inverted,
        }
    }
}

impl TrackGeometry {
    /// Logical fraction in `[0, 1]` under `point`.
    ///
    /// Returns `None` when the track has no extent along its axis or the point
    /// is not finite.
    pub fn fraction_at(&self, point: Point, track: Rect) -> Option<f64> {
        let track = track.abs();
        let natural = match self.orientation {
            Orientation::Horizontal => {
                let width = track.width();
                if !(width > 0.0) {
                    return None;
                }
                (point.x - track.x0) / width
            }
            Orientation::Vertical => {
                let height = track.height();
                if !(height > 0.0) {
                    return None;
                }
                1.0 - (point.y - track.y0) / height
            }
        };
        if !natural.is_finite() {
            return None;
        }
        Some(self.flip(natural.clamp(0.0, 1.0)))
    }

    /// Point on the track's center line at logical `fraction`.
    ///
    /// Inverse of [`TrackGeometry::fraction_at`] for points on the track.
    pub fn point_at(&self, fraction: f64, track: Rect) -> Point {
        let track = track.abs();
        let physical = self.flip(fraction.clamp(0.0, 1.0));
        let center = track.center();
        match self.orientation {
            Orientation::Horizontal => Point::new(track.x0 + physical * track.width(), center.y),
            Orientation::Vertical => {
                Point::new(center.x, track.y0 + (1.0 - physical) * track.height())
            }
        }
    }

    /// Map a logical fraction to the offset from the track's natural start edge.
    #[inline]
    pub fn render_fraction(&self, fraction: f64) -> f64 {
        self.flip(fraction)
    }

    #[inline]
    fn flip(&self, fraction: f64) -> f64 {
        if self.inverted { 1.0 - fraction } else { fraction }
    }
}

/// Resolve the stepped value under `point`.
///
/// Falls back to `min` when `track` is `None` or has no extent.
pub fn position_to_value(config: &SliderConfig, point: Point, track: Option<Rect>) -> f64 {
    let fraction = track.and_then(|track| TrackGeometry::from(config).fraction_at(point, track));
    match fraction {
        Some(f) => config.clamp(config.value_at_fraction(f)),
        None => config.min,
    }
}

/// Rendering percentage of `value`, measured from the natural start edge
/// (left for horizontal, bottom for vertical), with inversion applied.
pub fn render_percentage(config: &SliderConfig, value: f64) -> f64 {
    let logical = config.to_percentage(value) / 100.0;
    TrackGeometry::from(config).render_fraction(logical) * 100.0
}

/// Point on `track` corresponding to a logical percentage in `[0, 100]`.
pub fn point_for_percentage(config: &SliderConfig, percentage: f64, track: Rect) -> Point {
    TrackGeometry::from(config).point_at(percentage / 100.0, track)
}

/// Point on `track` where `value` is drawn.
pub fn point_for_value(config: &SliderConfig, value: f64, track: Rect) -> Point {
    point_for_percentage(config, config.to_percentage(value), track)
}
