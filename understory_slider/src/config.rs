// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration: bounds, step grid, orientation, and mode.
//!
//! ## Overview
//!
//! [`SliderConfig`] is immutable per render. It owns the step arithmetic used by
//! every other layer: [`SliderConfig::clamp`] snaps a raw number onto the step
//! grid and into `[min, max]`, and [`SliderConfig::to_percentage`] converts a
//! value into a logical percentage of the span.
//!
//! Misconfiguration (for example `min >= max`) is not rejected implicitly; it
//! produces degenerate but finite output. Call [`SliderConfig::validate`] to
//! surface it as a [`ConfigError`].

use crate::float;

/// Track direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left-to-right track; 0% at the left edge.
    #[default]
    Horizontal,
    /// Bottom-to-top track; 0% at the bottom edge.
    Vertical,
}

/// Configuration errors reported by [`SliderConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `min` is not strictly less than `max`.
    #[error("slider bounds are empty or inverted: min {min} >= max {max}")]
    EmptyRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// `step` is zero or negative.
    #[error("slider step must be positive, got {0}")]
    NonPositiveStep(f64),
    /// One of `min`, `max`, or `step` is NaN or infinite.
    #[error("slider configuration contains a non-finite number")]
    NonFinite,
}

/// Immutable slider configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    /// Lower bound of the value span.
    pub min: f64,
    /// Upper bound of the value span.
    pub max: f64,
    /// Grid spacing, measured from `min`. Must be positive.
    pub step: f64,
    /// Track direction.
    pub orientation: Orientation,
    /// Flip the direction of the track (presentation only; values are never inverted).
    pub inverted: bool,
    /// Two cooperating thumbs (`start`, `end`) instead of one.
    pub range: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            inverted: false,
            range: false,
        }
    }
}

impl SliderConfig {
    /// Horizontal single-value configuration over `[min, max]` with step `1`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for a vertical track.
    pub fn vertical(self) -> Self {
        self.with_orientation(Orientation::Vertical)
    }

    /// Set inversion.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Enable or disable range mode.
    pub fn range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    /// Check the numeric invariants: finite numbers, `min < max`, `step > 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        Ok(())
    }

    /// Width of the value span (`max - min`).
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Snap `raw` onto the step grid (offset from `min`) and clamp it into `[min, max]`.
    ///
    /// When `max` is not itself a grid point it stays reachable: raw values at or
    /// past `max`, or nearer to `max` than to the last grid point, yield `max`.
    ///
    /// Idempotent: `clamp(clamp(x)) == clamp(x)`. NaN maps to `min`; infinities
    /// map to the bound they point at.
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw.is_nan() || raw <= self.min {
            return self.min;
        }
        if raw >= self.max {
            return self.max;
        }
        if !(self.step > 0.0 && self.step.is_finite()) {
            return raw;
        }
        let steps = float::round((raw - self.min) / self.step);
        let snapped = steps * self.step + self.min;
        let snapped = match self.precision() {
            Some(places) => float::round_to(snapped, places),
            None => snapped,
        };
        if float::abs(self.max - raw) < float::abs(raw - snapped) {
            return self.max;
        }
        snapped.min(self.max).max(self.min)
    }

    /// Logical percentage of `value` within the span, in `[0, 100]`.
    ///
    /// A degenerate span yields `0`.
    pub fn to_percentage(&self, value: f64) -> f64 {
        let span = self.span();
        if !(span > 0.0) || !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Raw (unsnapped) value at a logical fraction in `[0, 1]` of the span.
    #[inline]
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.min + fraction * self.span()
    }

    /// Decimal places carried by emitted values, derived from `step` and `min`.
    ///
    /// `None` when either needs more than ten places; values are then left
    /// unrounded so tiny steps still move.
    pub fn precision(&self) -> Option<u32> {
        Some(float::precision_of(self.step)?.max(float::precision_of(self.min)?))
    }

    /// Number of grid positions in `[min, max]` (at least one).
    pub fn grid_len(&self) -> usize {
        if !(self.step > 0.0) || !(self.span() > 0.0) {
            return 1;
        }
        let mut steps = float::round(self.span() / self.step);
        if steps * self.step > self.span() * (1.0 + 1e-9) {
            steps -= 1.0;
        }
        // Float-to-int casts saturate; `steps` is finite and non-negative here.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "saturating cast of a finite, non-negative step count"
        )]
        let n = steps as usize;
        n.saturating_add(1)
    }
}
