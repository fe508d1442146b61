// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility attributes for each thumb.
//!
//! Every thumb is its own focusable slider element. In range mode the bounds
//! reported for a thumb are narrowed by its sibling (the start thumb's maximum
//! is the current end, and vice versa), matching the multi-thumb slider
//! pattern used by assistive technology.

use alloc::string::String;

use crate::config::{Orientation, SliderConfig};
use crate::types::{InteractionFlags, Thumb};
use crate::value::SliderValue;

/// Attributes a host exposes on a thumb element.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbAccessibility {
    /// Thumb described.
    pub thumb: Thumb,
    /// Lowest value this thumb can take right now.
    pub value_min: f64,
    /// Highest value this thumb can take right now.
    pub value_max: f64,
    /// Current value.
    pub value_now: f64,
    /// Human-readable value.
    pub value_text: String,
    /// Track direction.
    pub orientation: Orientation,
    /// Input is rejected and the thumb is skipped by keyboard navigation.
    pub disabled: bool,
    /// Input is rejected but the thumb remains focusable.
    pub read_only: bool,
    /// The value failed host validation.
    pub invalid: bool,
    /// A value is required.
    pub required: bool,
    /// Whether the thumb takes part in sequential keyboard navigation.
    pub focusable: bool,
}

/// Describe `thumb` for assistive technology.
///
/// Returns `None` when `thumb` does not exist for `value`'s shape.
pub fn describe_thumb(
    config: &SliderConfig,
    flags: InteractionFlags,
    value: &SliderValue,
    thumb: Thumb,
    format: &dyn Fn(f64) -> String,
) -> Option<ThumbAccessibility> {
    let now = value.get(thumb)?;
    let (value_min, value_max) = match (*value, thumb) {
        (SliderValue::Range { end, .. }, Thumb::Start) => (config.min, end),
        (SliderValue::Range { start, .. }, Thumb::End) => (start, config.max),
        _ => (config.min, config.max),
    };
    Some(ThumbAccessibility {
        thumb,
        value_min,
        value_max,
        value_now: now,
        value_text: format(now),
        orientation: config.orientation,
        disabled: flags.contains(InteractionFlags::DISABLED),
        read_only: flags.contains(InteractionFlags::READ_ONLY),
        invalid: flags.contains(InteractionFlags::INVALID),
        required: flags.contains(InteractionFlags::REQUIRED),
        focusable: flags.is_focusable(),
    })
}

/// Plain numeric value text.
pub fn plain_value_text(value: f64) -> String {
    alloc::format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_thumb_spans_config() {
        let c = SliderConfig::new(0.0, 10.0).vertical();
        let a = describe_thumb(
            &c,
            InteractionFlags::READ_ONLY,
            &SliderValue::Single(4.0),
            Thumb::Single,
            &plain_value_text,
        )
        .unwrap();
        assert_eq!((a.value_min, a.value_now, a.value_max), (0.0, 4.0, 10.0));
        assert_eq!(a.value_text, "4");
        assert_eq!(a.orientation, Orientation::Vertical);
        assert!(a.read_only && a.focusable && !a.disabled);
    }

    #[test]
    fn range_thumbs_are_bounded_by_sibling() {
        let c = SliderConfig::new(0.0, 100.0).range(true);
        let v = SliderValue::Range {
            start: 20.0,
            end: 70.0,
        };
        let fmt = |x: f64| alloc::format!("{x} °C");
        let start =
            describe_thumb(&c, InteractionFlags::empty(), &v, Thumb::Start, &fmt).unwrap();
        let end = describe_thumb(&c, InteractionFlags::empty(), &v, Thumb::End, &fmt).unwrap();
        assert_eq!((start.value_min, start.value_max), (0.0, 70.0));
        assert_eq!((end.value_min, end.value_max), (20.0, 100.0));
        assert_eq!(end.value_text, "70 °C");
    }

    #[test]
    fn disabled_is_not_focusable() {
        let c = SliderConfig::default();
        let flags = InteractionFlags::DISABLED | InteractionFlags::INVALID;
        let a = describe_thumb(
            &c,
            flags,
            &SliderValue::Single(0.0),
            Thumb::Single,
            &plain_value_text,
        )
        .unwrap();
        assert!(a.disabled && a.invalid && !a.focusable);
    }

    #[test]
    fn mismatched_thumb_is_none() {
        let c = SliderConfig::default();
        assert!(
            describe_thumb(
                &c,
                InteractionFlags::empty(),
                &SliderValue::Single(0.0),
                Thumb::End,
                &plain_value_text,
            )
            .is_none()
        );
    }
}
