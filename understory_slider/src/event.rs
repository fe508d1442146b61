// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller output: events, reactions, and a callback-style handler.
//!
//! ## Overview
//!
//! Every controller entry point returns a [`Reaction`]: the ordered list of
//! [`SliderEvent`]s it produced and whether the host should suppress the
//! platform default (scrolling on touch move).
//!
//! Hosts either match on the events directly or implement [`SliderHandler`]
//! and call [`Reaction::dispatch`], which delivers them in order.
//!
//! ## Ordering
//!
//! Within one interaction the lifecycle events arrive as
//! `ChangeStart → Change×N → ChangeEnd`. `CapturePointer` precedes the
//! `ChangeStart` of a drag and `ReleasePointer` follows its `ChangeEnd`; the
//! host attaches global move/up listeners on the former and detaches them on
//! the latter.

use alloc::vec::Vec;

use crate::types::{PointerKind, Thumb};
use crate::value::SliderValue;

/// A single controller output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// An interaction began on `thumb` at `value`.
    ChangeStart {
        /// Thumb being moved.
        thumb: Thumb,
        /// Its value when the interaction began.
        value: f64,
    },
    /// The single value changed (or a change was attempted on a controlled value).
    Change(f64),
    /// The range changed (or a change was attempted on a controlled axis).
    RangeChange {
        /// New start.
        start: f64,
        /// New end.
        end: f64,
    },
    /// An interaction on `thumb` finished at `value`.
    ChangeEnd {
        /// Thumb that was moved.
        thumb: Thumb,
        /// Its value when the interaction finished.
        value: f64,
    },
    /// A drag began: route subsequent move/up events of this kind to the
    /// controller regardless of where they happen.
    CapturePointer(PointerKind),
    /// The drag ended: stop routing global move/up events.
    ReleasePointer,
    /// Move input focus to `thumb`.
    Focus(Thumb),
}

impl From<SliderValue> for SliderEvent {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(v) => Self::Change(v),
            SliderValue::Range { start, end } => Self::RangeChange { start, end },
        }
    }
}

/// Events produced by one controller call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reaction {
    /// Events in emission order.
    pub events: Vec<SliderEvent>,
    /// The host should prevent the platform default for the triggering event.
    pub prevent_default: bool,
}

impl Reaction {
    /// Whether nothing happened.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.prevent_default
    }

    pub(crate) fn push(&mut self, event: SliderEvent) {
        self.events.push(event);
    }

    /// Change events (`Change`/`RangeChange`) in order.
    pub fn changes(&self) -> impl Iterator<Item = &SliderEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, SliderEvent::Change(_) | SliderEvent::RangeChange { .. }))
    }

    /// Deliver events to `handler` in emission order.
    pub fn dispatch<H: SliderHandler + ?Sized>(&self, handler: &mut H) {
        for event in &self.events {
            match *event {
                SliderEvent::ChangeStart { thumb, value } => handler.on_change_start(thumb, value),
                SliderEvent::Change(value) => handler.on_change(value),
                SliderEvent::RangeChange { start, end } => handler.on_range_change(start, end),
                SliderEvent::ChangeEnd { thumb, value } => handler.on_change_end(thumb, value),
                SliderEvent::CapturePointer(kind) => handler.capture_pointer(kind),
                SliderEvent::ReleasePointer => handler.release_pointer(),
                SliderEvent::Focus(thumb) => handler.focus_thumb(thumb),
            }
        }
    }
}

/// Callback surface for hosts that prefer handlers over matching events.
///
/// Every method defaults to a no-op.
pub trait SliderHandler {
    /// An interaction began.
    fn on_change_start(&mut self, thumb: Thumb, value: f64) {
        let _ = (thumb, value);
    }
    /// The single value changed.
    fn on_change(&mut self, value: f64) {
        let _ = value;
    }
    /// The range changed.
    fn on_range_change(&mut self, start: f64, end: f64) {
        let _ = (start, end);
    }
    /// An interaction finished.
    fn on_change_end(&mut self, thumb: Thumb, value: f64) {
        let _ = (thumb, value);
    }
    /// Attach global move/up listeners for `kind`.
    fn capture_pointer(&mut self, kind: PointerKind) {
        let _ = kind;
    }
    /// Detach global move/up listeners.
    fn release_pointer(&mut self) {}
    /// Focus the element for `thumb`.
    fn focus_thumb(&mut self, thumb: Thumb) {
        let _ = thumb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[derive(Default)]
    struct Log(Vec<String>);

    impl SliderHandler for Log {
        fn on_change_start(&mut self, _thumb: Thumb, value: f64) {
            self.0.push(alloc::format!("start {value}"));
        }
        fn on_change(&mut self, value: f64) {
            self.0.push(alloc::format!("change {value}"));
        }
        fn on_change_end(&mut self, _thumb: Thumb, value: f64) {
            self.0.push(alloc::format!("end {value}"));
        }
    }

    #[test]
    fn dispatch_preserves_order_and_skips_defaults() {
        let reaction = Reaction {
            events: vec![
                SliderEvent::CapturePointer(PointerKind::Mouse),
                SliderEvent::ChangeStart {
                    thumb: Thumb::Single,
                    value: 1.0,
                },
                SliderEvent::Change(2.0),
                SliderEvent::ChangeEnd {
                    thumb: Thumb::Single,
                    value: 2.0,
                },
                SliderEvent::ReleasePointer,
            ],
            prevent_default: false,
        };
        let mut log = Log::default();
        reaction.dispatch(&mut log);
        assert_eq!(log.0, vec!["start 1", "change 2", "end 2"]);
        assert_eq!(reaction.changes().count(), 1);
    }

    #[test]
    fn value_converts_to_change_event() {
        assert_eq!(
            SliderEvent::from(SliderValue::Single(3.0)),
            SliderEvent::Change(3.0)
        );
        assert_eq!(
            SliderEvent::from(SliderValue::Range {
                start: 1.0,
                end: 2.0
            }),
            SliderEvent::RangeChange {
                start: 1.0,
                end: 2.0
            }
        );
    }
}
