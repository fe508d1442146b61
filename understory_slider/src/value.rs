// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value model: controlled/uncontrolled resolution and range ordering.
//!
//! ## Ownership
//!
//! Each axis (the single value, or the `start`/`end` of a range) has exactly one
//! owner, decided on every read by [`resolve`]: the caller's controlled value
//! when present, otherwise the value held in [`ValueState`]. Internal values are
//! seeded once by [`ValueState::seeded`] and never reseeded.
//!
//! ## Writes
//!
//! [`ValueState::propose`] snaps a candidate onto the grid, applies range
//! ordering, and returns the value the caller should be notified with. Internal
//! state is written only for uncontrolled axes; a controlled caller decides
//! whether to feed the proposed value back.
//!
//! ```
//! use understory_slider::{Controlled, SliderConfig, SliderValue, Thumb, ValueState};
//!
//! let config = SliderConfig::new(0.0, 100.0).range(true);
//! let mut state = ValueState::seeded(&config, SliderValue::Range { start: 20.0, end: 60.0 });
//! let free = Controlled::default();
//!
//! // The start thumb sticks against the end thumb instead of crossing it.
//! let next = state.propose(&config, &free, Thumb::Start, 80.0);
//! assert_eq!(next, Some(SliderValue::Range { start: 60.0, end: 60.0 }));
//! ```

use crate::config::SliderConfig;
use crate::types::Thumb;

/// Current value(s) of a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliderValue {
    /// Single-thumb value.
    Single(f64),
    /// Range pair with `start <= end`.
    Range {
        /// Lower endpoint.
        start: f64,
        /// Upper endpoint.
        end: f64,
    },
}

impl SliderValue {
    /// Value carried by `thumb`, if the thumb exists for this shape.
    pub fn get(&self, thumb: Thumb) -> Option<f64> {
        match (*self, thumb) {
            (Self::Single(v), Thumb::Single) => Some(v),
            (Self::Range { start, .. }, Thumb::Start) => Some(start),
            (Self::Range { end, .. }, Thumb::End) => Some(end),
            _ => None,
        }
    }

    /// The single value, if this is a single-thumb value.
    pub fn as_single(&self) -> Option<f64> {
        match *self {
            Self::Single(v) => Some(v),
            Self::Range { .. } => None,
        }
    }

    /// The `(start, end)` pair, if this is a range value.
    pub fn as_range(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Range { start, end } => Some((start, end)),
            Self::Single(_) => None,
        }
    }
}

/// Caller-owned values. `None` leaves that axis to the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controlled {
    /// Controlled single value.
    pub value: Option<f64>,
    /// Controlled range start.
    pub start: Option<f64>,
    /// Controlled range end.
    pub end: Option<f64>,
}

impl Controlled {
    /// Whether the axis behind `thumb` is owned by the caller.
    pub fn owns(&self, thumb: Thumb) -> bool {
        match thumb {
            Thumb::Single => self.value.is_some(),
            Thumb::Start => self.start.is_some(),
            Thumb::End => self.end.is_some(),
        }
    }
}

/// Pick the authoritative value for one axis: the controlled value if present.
#[inline]
pub fn resolve(controlled: Option<f64>, internal: f64) -> f64 {
    controlled.unwrap_or(internal)
}

/// Internally owned values for every axis.
///
/// Only the axes that are uncontrolled at write time are updated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueState {
    single: f64,
    start: f64,
    end: f64,
}

impl ValueState {
    /// Seed internal state from a default value.
    ///
    /// Values are snapped onto the grid. A `Single` seed fills `start` with
    /// `min` and `end` with the value; a `Range` seed fills the single axis with
    /// `start`. An inverted range seed is reordered.
    pub fn seeded(config: &SliderConfig, initial: SliderValue) -> Self {
        match initial {
            SliderValue::Single(v) => {
                let v = config.clamp(v);
                Self {
                    single: v,
                    start: config.min,
                    end: v,
                }
            }
            SliderValue::Range { start, end } => {
                let (a, b) = (config.clamp(start), config.clamp(end));
                let (start, end) = if a <= b { (a, b) } else { (b, a) };
                Self {
                    single: start,
                    start,
                    end,
                }
            }
        }
    }

    /// Default seed for `config`: `min` for a single slider, the full span for a range.
    pub fn for_config(config: &SliderConfig) -> Self {
        let initial = if config.range {
            SliderValue::Range {
                start: config.min,
                end: config.max,
            }
        } else {
            SliderValue::Single(config.min)
        };
        Self::seeded(config, initial)
    }

    /// Resolve the current value from controlled inputs and internal state.
    ///
    /// Results are snapped onto the grid; a controlled pair with `start > end`
    /// reads as `end == start`.
    pub fn current(&self, config: &SliderConfig, controlled: &Controlled) -> SliderValue {
        if config.range {
            let start = config.clamp(resolve(controlled.start, self.start));
            let end = config.clamp(resolve(controlled.end, self.end)).max(start);
            SliderValue::Range { start, end }
        } else {
            SliderValue::Single(config.clamp(resolve(controlled.value, self.single)))
        }
    }

    /// Propose `candidate` for `thumb`.
    ///
    /// The candidate is snapped onto the grid and, in range mode, capped at the
    /// sibling thumb. Uncontrolled axes are written through. Returns the value to
    /// report to the caller, or `None` when the result equals the current value
    /// or `thumb` does not exist in this mode.
    pub fn propose(
        &mut self,
        config: &SliderConfig,
        controlled: &Controlled,
        thumb: Thumb,
        candidate: f64,
    ) -> Option<SliderValue> {
        let candidate = config.clamp(candidate);
        match (self.current(config, controlled), thumb) {
            (SliderValue::Single(current), Thumb::Single) => {
                if candidate == current {
                    return None;
                }
                if !controlled.owns(Thumb::Single) {
                    self.single = candidate;
                }
                Some(SliderValue::Single(candidate))
            }
            (SliderValue::Range { start, end }, Thumb::Start) => {
                let next = candidate.min(end);
                if next == start {
                    return None;
                }
                if !controlled.owns(Thumb::Start) {
                    self.start = next;
                }
                Some(SliderValue::Range { start: next, end })
            }
            (SliderValue::Range { start, end }, Thumb::End) => {
                let next = candidate.max(start);
                if next == end {
                    return None;
                }
                if !controlled.owns(Thumb::End) {
                    self.end = next;
                }
                Some(SliderValue::Range { start, end: next })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_config() -> SliderConfig {
        SliderConfig::new(0.0, 100.0).range(true)
    }

    #[test]
    fn resolve_prefers_controlled() {
        assert_eq!(resolve(Some(3.0), 7.0), 3.0);
        assert_eq!(resolve(None, 7.0), 7.0);
    }

    #[test]
    fn uncontrolled_single_writes_through() {
        let config = SliderConfig::new(0.0, 10.0);
        let mut state = ValueState::seeded(&config, SliderValue::Single(4.0));
        let free = Controlled::default();
        assert_eq!(
            state.propose(&config, &free, Thumb::Single, 6.4),
            Some(SliderValue::Single(6.0))
        );
        assert_eq!(state.current(&config, &free), SliderValue::Single(6.0));
    }

    #[test]
    fn controlled_single_reports_but_does_not_stick() {
        let config = SliderConfig::new(0.0, 10.0);
        let mut state = ValueState::seeded(&config, SliderValue::Single(0.0));
        let held = Controlled {
            value: Some(2.0),
            ..Controlled::default()
        };
        assert_eq!(
            state.propose(&config, &held, Thumb::Single, 9.0),
            Some(SliderValue::Single(9.0))
        );
        assert_eq!(state.current(&config, &held), SliderValue::Single(2.0));
        // The caller ignored the change; proposing again still reports it.
        assert_eq!(
            state.propose(&config, &held, Thumb::Single, 9.0),
            Some(SliderValue::Single(9.0))
        );
    }

    #[test]
    fn unchanged_value_is_not_reported() {
        let config = SliderConfig::new(0.0, 100.0).with_step(10.0);
        let mut state = ValueState::seeded(&config, SliderValue::Single(50.0));
        assert_eq!(
            state.propose(&config, &Controlled::default(), Thumb::Single, 52.0),
            None
        );
    }

    #[test]
    fn start_is_capped_at_end() {
        let config = range_config();
        let mut state = ValueState::seeded(
            &config,
            SliderValue::Range {
                start: 60.0,
                end: 60.0,
            },
        );
        let free = Controlled::default();
        assert_eq!(state.propose(&config, &free, Thumb::Start, 80.0), None);
        assert_eq!(
            state.current(&config, &free),
            SliderValue::Range {
                start: 60.0,
                end: 60.0
            }
        );
    }

    #[test]
    fn end_is_floored_at_start() {
        let config = range_config();
        let mut state = ValueState::seeded(
            &config,
            SliderValue::Range {
                start: 30.0,
                end: 70.0,
            },
        );
        let free = Controlled::default();
        assert_eq!(
            state.propose(&config, &free, Thumb::End, 10.0),
            Some(SliderValue::Range {
                start: 30.0,
                end: 30.0
            })
        );
    }

    #[test]
    fn axes_are_owned_independently() {
        let config = range_config();
        let mut state = ValueState::for_config(&config);
        let half = Controlled {
            start: Some(25.0),
            ..Controlled::default()
        };
        state.propose(&config, &half, Thumb::Start, 40.0);
        state.propose(&config, &half, Thumb::End, 80.0);
        assert_eq!(
            state.current(&config, &half),
            SliderValue::Range {
                start: 25.0,
                end: 80.0
            }
        );
        // Once released, start falls back to the untouched internal seed.
        assert_eq!(
            state.current(&config, &Controlled::default()),
            SliderValue::Range {
                start: 0.0,
                end: 80.0
            }
        );
    }

    #[test]
    fn inverted_inputs_are_reordered() {
        let config = range_config();
        let state = ValueState::seeded(
            &config,
            SliderValue::Range {
                start: 90.0,
                end: 10.0,
            },
        );
        assert_eq!(
            state.current(&config, &Controlled::default()),
            SliderValue::Range {
                start: 10.0,
                end: 90.0
            }
        );
        let crossed = Controlled {
            start: Some(70.0),
            end: Some(20.0),
            ..Controlled::default()
        };
        assert_eq!(
            state.current(&config, &crossed),
            SliderValue::Range {
                start: 70.0,
                end: 70.0
            }
        );
    }

    #[test]
    fn wrong_thumb_for_mode_is_ignored() {
        let config = SliderConfig::new(0.0, 10.0);
        let mut state = ValueState::for_config(&config);
        assert_eq!(
            state.propose(&config, &Controlled::default(), Thumb::End, 5.0),
            None
        );
    }

    #[test]
    fn value_accessors() {
        let v = SliderValue::Range {
            start: 1.0,
            end: 2.0,
        };
        assert_eq!(v.get(Thumb::End), Some(2.0));
        assert_eq!(v.get(Thumb::Single), None);
        assert_eq!(v.as_range(), Some((1.0, 2.0)));
        assert_eq!(SliderValue::Single(4.0).as_single(), Some(4.0));
    }
}
