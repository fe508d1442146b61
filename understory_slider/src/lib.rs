// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless slider core for single values and ranges.
//!
//! Understory Slider owns everything about a slider except drawing it.
//!
//! - Snaps values onto a step grid inside `[min, max]`, avoiding floating-point noise.
//! - Resolves controlled and uncontrolled ownership per axis.
//! - Keeps range endpoints ordered: thumbs stick together instead of crossing.
//! - Maps pointer positions on a horizontal or vertical, optionally inverted, track to values and back.
//! - Drives the drag state machine and the keyboard protocol, emitting `ChangeStart → Change×N → ChangeEnd`.
//! - Describes each thumb for assistive technology and produces a render-ready [`SliderView`].
//!
//! ## Where this fits
//!
//! The host owns the element tree, measures the track, and routes input. Each input becomes one
//! call on [`SliderController`], which returns a [`Reaction`]: the events to deliver and whether to
//! suppress the platform default. [`SliderEvent::CapturePointer`] and
//! [`SliderEvent::ReleasePointer`] tell the host when to attach and detach document-level move/up
//! listeners, so a release anywhere ends the drag.
//!
//! Props ([`SliderProps`]) are passed on every call and never cached. A controlled caller sees
//! every attempted change reported and decides whether to feed it back.
//!
//! ## API overview
//!
//! - [`SliderConfig`]: bounds, step, orientation, inversion, and mode; [`SliderConfig::clamp`] snaps values.
//! - [`ValueState`] and [`Controlled`]: value ownership and range ordering.
//! - [`TrackGeometry`], [`position_to_value`], [`render_percentage`]: track mapping.
//! - [`SliderKey`]: keyboard bindings and step deltas.
//! - [`SliderController`]: drag sessions, track clicks, keys, focus, and hover.
//! - [`SliderEvent`], [`Reaction`], [`SliderHandler`]: output.
//! - [`step_marks`], [`layout_marks`], [`describe_thumb`], [`SliderView`]: render support.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{
//!     SliderConfig, SliderController, SliderEvent, SliderProps, SliderValue, Thumb,
//!     plain_value_text,
//! };
//!
//! let props = SliderProps::new(SliderConfig::new(0.0, 100.0).with_step(5.0));
//! let mut slider = SliderController::new(&props.config);
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//!
//! let down = slider.pointer_down(&props, Thumb::Single);
//! assert!(matches!(down.events[0], SliderEvent::CapturePointer(_)));
//!
//! // 62% of the way along the track snaps to 60.
//! let moved = slider.pointer_move(&props, Point::new(124.0, 10.0), Some(track));
//! assert_eq!(moved.events, [SliderEvent::Change(60.0)]);
//!
//! let up = slider.pointer_up(&props);
//! assert_eq!(up.events.last(), Some(&SliderEvent::ReleasePointer));
//! assert_eq!(slider.value(&props), SliderValue::Single(60.0));
//!
//! let view = slider.view(&props, &plain_value_text);
//! assert_eq!(view.fill, (0.0, 60.0));
//! assert_eq!(view.form_value, "60");
//! ```
//!
//! ## Features
//!
//! - `std` (default) or `libm`: floating-point backend. One of them is required.
//! - `tracing`: debug-level logs for drag, click, and key transitions.
//! - `serde`: serialization for configuration, values, and marks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_slider requires either the `std` or `libm` feature");

pub mod accessibility;
pub mod config;
pub mod controller;
pub mod event;
pub mod geometry;
pub mod keyboard;
pub mod marks;
pub mod types;
pub mod value;
pub mod view;

mod float;

pub use accessibility::{ThumbAccessibility, describe_thumb, plain_value_text};
pub use config::{ConfigError, Orientation, SliderConfig};
pub use controller::{DragState, SliderController, SliderProps};
pub use event::{Reaction, SliderEvent, SliderHandler};
pub use geometry::{
    TrackGeometry, point_for_percentage, point_for_value, position_to_value, render_percentage,
};
pub use keyboard::{PAGE_STEPS, SliderKey};
pub use marks::{MAX_STEP_MARKS, Mark, MarkView, layout_marks, step_marks};
pub use types::{InteractionFlags, LabelVisibility, PointerKind, Thumb};
pub use value::{Controlled, SliderValue, ValueState, resolve};
pub use view::{SliderView, ThumbRenderer, ThumbView, form_value};
