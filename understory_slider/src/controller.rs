// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction controller: the drag state machine and input entry points.
//!
//! ## States
//!
//! The controller is either [`DragState::Idle`] or
//! [`DragState::Dragging`]. Only these transitions exist:
//!
//! - `Idle → Dragging` on [`pointer_down`](SliderController::pointer_down) or
//!   [`touch_start`](SliderController::touch_start) on a thumb. Emits
//!   [`CapturePointer`](SliderEvent::CapturePointer), then
//!   [`ChangeStart`](SliderEvent::ChangeStart).
//! - `Dragging → Dragging` on [`pointer_move`](SliderController::pointer_move)
//!   or [`touch_move`](SliderController::touch_move). Emits a change when the
//!   stepped value moves.
//! - `Dragging → Idle` on [`pointer_up`](SliderController::pointer_up) or
//!   [`touch_end`](SliderController::touch_end). Emits
//!   [`ChangeEnd`](SliderEvent::ChangeEnd), then
//!   [`ReleasePointer`](SliderEvent::ReleasePointer).
//!
//! Moves and releases act only on a session opened by the same device: a
//! touch end does not close a mouse drag.
//!
//! [`track_click`](SliderController::track_click) and
//! [`key_down`](SliderController::key_down) are discrete updates that never
//! open or close a session.
//!
//! ## Props
//!
//! Configuration, controlled values, and flags arrive through [`SliderProps`]
//! on every call. Nothing derived from props is cached, so a controlled caller
//! that ignores a change simply sees it proposed again on the next event.
//!
//! ## Interactivity
//!
//! Each entry point checks [`InteractionFlags::is_interactive`] once. When the
//! flags turn non-interactive during a drag, moves stop mutating the value but
//! the session still ends normally on release, so every `ChangeStart` is
//! paired with a `ChangeEnd` and captured listeners are always released.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::config::SliderConfig;
use crate::event::{Reaction, SliderEvent};
use crate::float;
use crate::geometry::position_to_value;
use crate::keyboard::SliderKey;
use crate::marks::Mark;
use crate::types::{InteractionFlags, LabelVisibility, PointerKind, Thumb};
use crate::value::{Controlled, SliderValue, ValueState};

/// Inputs supplied by the host on every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderProps {
    /// Bounds, step, direction, and mode.
    pub config: SliderConfig,
    /// Caller-owned values.
    pub controlled: Controlled,
    /// Interaction and validation flags.
    pub flags: InteractionFlags,
    /// When value labels are shown.
    pub label_visibility: LabelVisibility,
    /// Explicit marks. When empty and `show_step_marks` is set, marks are
    /// synthesized from the step grid.
    pub marks: Vec<Mark>,
    /// Synthesize a mark per step when no explicit marks are given.
    pub show_step_marks: bool,
}

impl SliderProps {
    /// Uncontrolled, interactive props for `config`.
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Control the single value.
    pub fn value(mut self, value: f64) -> Self {
        self.controlled.value = Some(value);
        self
    }

    /// Control the range start.
    pub fn start(mut self, start: f64) -> Self {
        self.controlled.start = Some(start);
        self
    }

    /// Control the range end.
    pub fn end(mut self, end: f64) -> Self {
        self.controlled.end = Some(end);
        self
    }

    /// Replace the flags.
    pub fn flags(mut self, flags: InteractionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set or clear [`InteractionFlags::DISABLED`].
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.flags.set(InteractionFlags::DISABLED, disabled);
        self
    }

    /// Set or clear [`InteractionFlags::READ_ONLY`].
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.flags.set(InteractionFlags::READ_ONLY, read_only);
        self
    }

    /// Set the label policy.
    pub fn label_visibility(mut self, visibility: LabelVisibility) -> Self {
        self.label_visibility = visibility;
        self
    }

    /// Set explicit marks.
    pub fn marks(mut self, marks: impl IntoIterator<Item = Mark>) -> Self {
        self.marks = marks.into_iter().collect();
        self
    }

    /// Request marks synthesized from the step grid.
    pub fn show_step_marks(mut self, show: bool) -> Self {
        self.show_step_marks = show;
        self
    }
}

/// Drag session state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No session.
    #[default]
    Idle,
    /// A pointer or touch holds `thumb`.
    Dragging {
        /// Thumb being dragged.
        thumb: Thumb,
        /// Device that opened the session.
        pointer: PointerKind,
    },
}

/// Stateful slider controller.
///
/// Holds uncontrolled values, the drag session, focus, and hover. All input
/// entry points take the current [`SliderProps`] and return a [`Reaction`].
#[derive(Clone, Debug, PartialEq)]
pub struct SliderController {
    values: ValueState,
    drag: DragState,
    focused: Option<Thumb>,
    // Focus came from the keyboard or the host rather than a pointer press.
    focus_visible: bool,
    hovered: bool,
}

impl SliderController {
    /// Controller seeded with `min` (single) or `min..max` (range).
    pub fn new(config: &SliderConfig) -> Self {
        Self::from_state(ValueState::for_config(config))
    }

    /// Controller seeded with `default` for uncontrolled axes.
    pub fn with_default(config: &SliderConfig, default: SliderValue) -> Self {
        Self::from_state(ValueState::seeded(config, default))
    }

    fn from_state(values: ValueState) -> Self {
        Self {
            values,
            drag: DragState::Idle,
            focused: None,
            focus_visible: false,
            hovered: false,
        }
    }

    /// Current value(s), resolved against `props`.
    pub fn value(&self, props: &SliderProps) -> SliderValue {
        self.values.current(&props.config, &props.controlled)
    }

    /// Current drag session state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Thumb held by the open drag session, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        match self.drag {
            DragState::Dragging { thumb, .. } => Some(thumb),
            DragState::Idle => None,
        }
    }

    /// Thumb that currently holds focus, if any.
    pub fn focused(&self) -> Option<Thumb> {
        self.focused
    }

    /// Whether the pointer is over the slider.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the value label of `thumb` should be shown.
    ///
    /// Focus gained by pressing a thumb or clicking the track does not keep the
    /// label up after release; keyboard focus does.
    pub fn label_visible(&self, props: &SliderProps, thumb: Thumb) -> bool {
        let dragged = self.active_thumb() == Some(thumb);
        match props.label_visibility {
            LabelVisibility::Never => false,
            LabelVisibility::Always => true,
            LabelVisibility::WhileDragging => dragged,
            LabelVisibility::WhileInteracting => {
                dragged || (self.focus_visible && self.focused == Some(thumb)) || self.hovered
            }
        }
    }

    /// Press on `thumb` with a mouse or pen pointer.
    pub fn pointer_down(&mut self, props: &SliderProps, thumb: Thumb) -> Reaction {
        self.begin(props, thumb, PointerKind::Mouse)
    }

    /// Touch start on `thumb`.
    pub fn touch_start(&mut self, props: &SliderProps, thumb: Thumb) -> Reaction {
        self.begin(props, thumb, PointerKind::Touch)
    }

    /// Pointer motion; only acts while a pointer drag is open.
    ///
    /// `track` is the track's bounding box in the same space as `point`, or
    /// `None` if it has not been measured.
    pub fn pointer_move(
        &mut self,
        props: &SliderProps,
        point: Point,
        track: Option<Rect>,
    ) -> Reaction {
        self.drag_to(props, PointerKind::Mouse, point, track)
    }

    /// Touch motion; only acts while a touch drag is open, and then asks the
    /// host to suppress scrolling.
    pub fn touch_move(&mut self, props: &SliderProps, point: Point, track: Option<Rect>) -> Reaction {
        let mut reaction = self.drag_to(props, PointerKind::Touch, point, track);
        reaction.prevent_default = self.session_thumb(PointerKind::Touch).is_some();
        reaction
    }

    /// Pointer release, wherever it happens. Ends only a pointer drag.
    pub fn pointer_up(&mut self, props: &SliderProps) -> Reaction {
        self.end(props, PointerKind::Mouse)
    }

    /// Touch end, wherever it happens. Ends only a touch drag.
    pub fn touch_end(&mut self, props: &SliderProps) -> Reaction {
        self.end(props, PointerKind::Touch)
    }

    fn drag_to(
        &mut self,
        props: &SliderProps,
        device: PointerKind,
        point: Point,
        track: Option<Rect>,
    ) -> Reaction {
        let mut reaction = Reaction::default();
        let Some(thumb) = self.session_thumb(device) else {
            return reaction;
        };
        if !props.flags.is_interactive() {
            return reaction;
        }
        let candidate = position_to_value(&props.config, point, track);
        if let Some(next) = self
            .values
            .propose(&props.config, &props.controlled, thumb, candidate)
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(?thumb, ?next, "slider drag moved");
            reaction.push(next.into());
        }
        reaction
    }

    /// Click on the track outside any drag session.
    ///
    /// Moves the lone thumb, or in range mode the thumb numerically closer to
    /// the clicked value, then asks the host to focus it.
    pub fn track_click(&mut self, props: &SliderProps, point: Point, track: Option<Rect>) -> Reaction {
        let mut reaction = Reaction::default();
        if !props.flags.is_interactive() || self.is_dragging() {
            return reaction;
        }
        let clicked = position_to_value(&props.config, point, track);
        let thumb = match self.value(props) {
            SliderValue::Single(_) => Thumb::Single,
            SliderValue::Range { start, end } => nearest_thumb(start, end, clicked),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?thumb, clicked, "slider track clicked");
        if let Some(next) = self
            .values
            .propose(&props.config, &props.controlled, thumb, clicked)
        {
            reaction.push(next.into());
        }
        self.focused = Some(thumb);
        self.focus_visible = false;
        reaction.push(SliderEvent::Focus(thumb));
        reaction
    }

    /// Key press on `thumb`: one atomic step.
    ///
    /// From `Idle` this emits `ChangeStart`, the change (if any), and
    /// `ChangeEnd`. During a drag only the change is emitted, since the open
    /// session already owns the lifecycle events.
    pub fn key_down(&mut self, props: &SliderProps, thumb: Thumb, key: SliderKey) -> Reaction {
        let mut reaction = Reaction::default();
        if !props.flags.is_interactive() || !thumb.belongs_to(props.config.range) {
            return reaction;
        }
        let current = self.thumb_value(props, thumb);
        let target = current + key.delta(&props.config, current);
        let standalone = !self.is_dragging();
        #[cfg(feature = "tracing")]
        tracing::debug!(?thumb, ?key, current, target, "slider key step");

        self.focused = Some(thumb);
        self.focus_visible = true;
        reaction.prevent_default = true;
        if standalone {
            reaction.push(SliderEvent::ChangeStart {
                thumb,
                value: current,
            });
        }
        let next = self
            .values
            .propose(&props.config, &props.controlled, thumb, target);
        if let Some(next) = next {
            reaction.push(next.into());
        }
        if standalone {
            // Report the attempted value: a controlled caller cannot have fed
            // it back yet within this call.
            let value = next.and_then(|v| v.get(thumb)).unwrap_or(current);
            reaction.push(SliderEvent::ChangeEnd { thumb, value });
        }
        reaction
    }

    /// Record that `thumb` received focus. Ignored for disabled sliders.
    ///
    /// Refocusing the thumb the controller already focused (the host echoing a
    /// press or a [`SliderEvent::Focus`]) keeps it a pointer focus.
    pub fn focus(&mut self, props: &SliderProps, thumb: Thumb) {
        if !props.flags.is_focusable() || !thumb.belongs_to(props.config.range) {
            return;
        }
        if self.focused != Some(thumb) {
            self.focused = Some(thumb);
            self.focus_visible = true;
        }
    }

    /// Record that focus left the slider.
    pub fn blur(&mut self) {
        self.focused = None;
        self.focus_visible = false;
    }

    /// Record that the pointer entered the slider.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Record that the pointer left the slider.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    fn begin(&mut self, props: &SliderProps, thumb: Thumb, pointer: PointerKind) -> Reaction {
        let mut reaction = Reaction::default();
        if !props.flags.is_interactive()
            || !thumb.belongs_to(props.config.range)
            || self.is_dragging()
        {
            return reaction;
        }
        let value = self.thumb_value(props, thumb);
        self.drag = DragState::Dragging { thumb, pointer };
        self.focused = Some(thumb);
        self.focus_visible = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(?thumb, ?pointer, value, "slider drag started");
        reaction.push(SliderEvent::CapturePointer(pointer));
        reaction.push(SliderEvent::ChangeStart { thumb, value });
        reaction
    }

    fn end(&mut self, props: &SliderProps, device: PointerKind) -> Reaction {
        let mut reaction = Reaction::default();
        let Some(thumb) = self.session_thumb(device) else {
            return reaction;
        };
        let value = self.thumb_value(props, thumb);
        self.drag = DragState::Idle;
        #[cfg(feature = "tracing")]
        tracing::debug!(?thumb, value, "slider drag ended");
        reaction.push(SliderEvent::ChangeEnd { thumb, value });
        reaction.push(SliderEvent::ReleasePointer);
        reaction
    }

    /// Thumb held by a session that `device` opened.
    fn session_thumb(&self, device: PointerKind) -> Option<Thumb> {
        match self.drag {
            DragState::Dragging { thumb, pointer } if pointer == device => Some(thumb),
            _ => None,
        }
    }

    fn thumb_value(&self, props: &SliderProps, thumb: Thumb) -> f64 {
        self.value(props).get(thumb).unwrap_or(props.config.min)
    }
}

/// Thumb closer to `target`. Ties go to `end` when the target lies above the
/// pair, otherwise to `start`.
fn nearest_thumb(start: f64, end: f64, target: f64) -> Thumb {
    let to_start = float::abs(target - start);
    let to_end = float::abs(target - end);
    if to_start < to_end {
        Thumb::Start
    } else if to_end < to_start || target > end {
        Thumb::End
    } else {
        Thumb::Start
    }
}
