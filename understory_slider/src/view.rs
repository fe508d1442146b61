// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready snapshot of a slider.
//!
//! [`SliderController::view`] gathers everything a renderer needs for one
//! frame: thumb positions, the filled segment, positioned marks, per-thumb
//! accessibility, and the serialized form value. Rendering a thumb is
//! delegated to a [`ThumbRenderer`] so hosts can customize it without
//! re-deriving any state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::accessibility::{ThumbAccessibility, describe_thumb};
use crate::controller::{SliderController, SliderProps};
use crate::geometry::render_percentage;
use crate::marks::{MarkView, layout_marks, step_marks};
use crate::types::{InteractionFlags, Thumb};
use crate::value::SliderValue;

/// Everything needed to draw one thumb.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbView {
    /// Thumb drawn.
    pub thumb: Thumb,
    /// Current value.
    pub value: f64,
    /// Rendering percentage from the natural start edge.
    pub percentage: f64,
    /// The thumb is being dragged.
    pub active: bool,
    /// The thumb holds focus.
    pub focused: bool,
    /// Input is rejected.
    pub disabled: bool,
    /// The value label should be shown.
    pub label_visible: bool,
    /// Formatted value.
    pub label: String,
    /// Attributes for assistive technology.
    pub accessibility: ThumbAccessibility,
}

/// Snapshot of a slider for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    /// Current value(s).
    pub value: SliderValue,
    /// A drag session is open.
    pub dragging: bool,
    /// Thumb held by the drag session.
    pub active_thumb: Option<Thumb>,
    /// Filled segment as `(from, to)` rendering percentages, `from <= to`.
    pub fill: (f64, f64),
    /// Thumbs in track order.
    pub thumbs: Vec<ThumbView>,
    /// Marks inside `[min, max]`.
    pub marks: Vec<MarkView>,
    /// Value submitted with a form: `"v"` or `"start,end"`.
    pub form_value: String,
}

/// Hook for drawing thumbs.
pub trait ThumbRenderer {
    /// Whatever the host produces per thumb.
    type Output;

    /// Draw one thumb.
    fn render_thumb(&mut self, thumb: &ThumbView) -> Self::Output;
}

impl SliderView {
    /// Run `renderer` over every thumb in track order.
    pub fn render_thumbs<R: ThumbRenderer + ?Sized>(&self, renderer: &mut R) -> Vec<R::Output> {
        self.thumbs.iter().map(|t| renderer.render_thumb(t)).collect()
    }

    /// View of `thumb`, if present.
    pub fn thumb(&self, thumb: Thumb) -> Option<&ThumbView> {
        self.thumbs.iter().find(|t| t.thumb == thumb)
    }
}

/// Serialize `value` for form submission.
pub fn form_value(value: &SliderValue) -> String {
    match *value {
        SliderValue::Single(v) => alloc::format!("{v}"),
        SliderValue::Range { start, end } => alloc::format!("{start},{end}"),
    }
}

impl SliderController {
    /// Build a render snapshot. `format` produces label and value text.
    ///
    /// Explicit marks take precedence; step marks are synthesized only when
    /// `props.marks` is empty and `props.show_step_marks` is set.
    pub fn view(&self, props: &SliderProps, format: &dyn Fn(f64) -> String) -> SliderView {
        let config = &props.config;
        let value = self.value(props);

        let thumbs = Thumb::all(config.range)
            .iter()
            .filter_map(|&thumb| {
                let now = value.get(thumb)?;
                let accessibility = describe_thumb(config, props.flags, &value, thumb, format)?;
                Some(ThumbView {
                    thumb,
                    value: now,
                    percentage: render_percentage(config, now),
                    active: self.active_thumb() == Some(thumb),
                    focused: self.focused() == Some(thumb),
                    disabled: props.flags.contains(InteractionFlags::DISABLED),
                    label_visible: self.label_visible(props, thumb),
                    label: accessibility.value_text.clone(),
                    accessibility,
                })
            })
            .collect();

        let (low, high) = match value {
            SliderValue::Single(v) => (config.min, v),
            SliderValue::Range { start, end } => (start, end),
        };
        let (a, b) = (
            render_percentage(config, low),
            render_percentage(config, high),
        );
        let fill = if a <= b { (a, b) } else { (b, a) };

        let marks = if !props.marks.is_empty() {
            layout_marks(config, &props.marks, &value)
        } else if props.show_step_marks {
            let synthesized: Vec<_> = step_marks(config).collect();
            layout_marks(config, &synthesized, &value)
        } else {
            Vec::new()
        };

        SliderView {
            value,
            dragging: self.is_dragging(),
            active_thumb: self.active_thumb(),
            fill,
            thumbs,
            marks,
            form_value: form_value(&value),
        }
    }
}
