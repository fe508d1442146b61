// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks along the track: explicit or synthesized from the step grid.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::SliderConfig;
use crate::geometry::render_percentage;
use crate::value::SliderValue;

/// A labelled or unlabelled position on the track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mark {
    /// Position of the mark in value space.
    pub value: f64,
    /// Optional caption.
    pub label: Option<String>,
}

impl Mark {
    /// Unlabelled mark.
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    /// Labelled mark.
    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Upper bound on grid marks synthesized by [`step_marks`], excluding a trailing `max`.
pub const MAX_STEP_MARKS: usize = 1000;

/// One mark per grid position, from `min` to `max` inclusive.
///
/// Grids with more than [`MAX_STEP_MARKS`] positions are thinned to every
/// `n`-th step. When the last mark is not `max`, `max` is appended.
pub fn step_marks(config: &SliderConfig) -> impl Iterator<Item = Mark> + '_ {
    let n = config.grid_len();
    let stride = n.div_ceil(MAX_STEP_MARKS).max(1);
    let count = n.div_ceil(stride);
    let at = move |k: usize| config.clamp(config.min + (k * stride) as f64 * config.step);
    let tail = (n > 1 && at(count - 1) < config.max).then(|| Mark::new(config.max));
    (0..count).map(move |k| Mark::new(at(k))).chain(tail)
}

/// A mark positioned for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkView {
    /// Position of the mark in value space.
    pub value: f64,
    /// Optional caption.
    pub label: Option<String>,
    /// Rendering percentage from the natural start edge.
    pub percentage: f64,
    /// Whether the mark lies inside the filled segment.
    pub filled: bool,
}

/// Position `marks` for rendering against the current `value`.
///
/// Marks outside `[min, max]` are dropped.
pub fn layout_marks<'a>(
    config: &SliderConfig,
    marks: impl IntoIterator<Item = &'a Mark>,
    value: &SliderValue,
) -> Vec<MarkView> {
    marks
        .into_iter()
        .filter(|m| m.value >= config.min && m.value <= config.max)
        .map(|m| MarkView {
            value: m.value,
            label: m.label.clone(),
            percentage: render_percentage(config, m.value),
            filled: match *value {
                SliderValue::Single(v) => m.value <= v,
                SliderValue::Range { start, end } => m.value >= start && m.value <= end,
            },
        })
        .collect()
}
