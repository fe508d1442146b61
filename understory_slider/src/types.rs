// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary: thumbs, pointer kinds, interaction flags, label policy.

/// Identity of a draggable handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Thumb {
    /// The lone thumb of a single-value slider.
    Single,
    /// Lower thumb of a range slider.
    Start,
    /// Upper thumb of a range slider.
    End,
}

impl Thumb {
    /// Whether this thumb exists for a slider in the given mode.
    #[inline]
    pub fn belongs_to(self, range: bool) -> bool {
        match self {
            Self::Single => !range,
            Self::Start | Self::End => range,
        }
    }

    /// Thumbs present in the given mode, in track order.
    pub fn all(range: bool) -> &'static [Self] {
        if range {
            &[Self::Start, Self::End]
        } else {
            &[Self::Single]
        }
    }
}

/// Input device that opened a drag session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or pen pointer (`pointerdown`/`pointermove`/`pointerup`).
    Mouse,
    /// Touch contact (`touchstart`/`touchmove`/`touchend`).
    Touch,
}

bitflags::bitflags! {
    /// Interaction and validation state supplied by the host on every call.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InteractionFlags: u8 {
        /// No input is accepted and thumbs are not focusable.
        const DISABLED  = 0b0000_0001;
        /// Thumbs stay focusable but no input mutates the value.
        const READ_ONLY = 0b0000_0010;
        /// The value failed host validation (surfaced to accessibility only).
        const INVALID   = 0b0000_0100;
        /// A value is required (surfaced to accessibility only).
        const REQUIRED  = 0b0000_1000;
    }
}

impl InteractionFlags {
    /// Whether pointer, touch, keyboard, and track-click input may mutate the value.
    #[inline]
    pub fn is_interactive(self) -> bool {
        !self.intersects(Self::DISABLED | Self::READ_ONLY)
    }

    /// Whether thumbs take part in sequential keyboard navigation.
    #[inline]
    pub fn is_focusable(self) -> bool {
        !self.contains(Self::DISABLED)
    }
}

/// When the value label (tooltip) above a thumb is shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelVisibility {
    /// Never shown.
    Never,
    /// Shown only while the thumb is dragged.
    WhileDragging,
    /// Shown while dragging, hovered, or focused from the keyboard.
    #[default]
    WhileInteracting,
    /// Always shown.
    Always,
}
