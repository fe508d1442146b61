// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard protocol for a focused thumb.
//!
//! | Key                     | Effect                      |
//! |-------------------------|-----------------------------|
//! | `ArrowRight`, `ArrowUp` | `+step`                     |
//! | `ArrowLeft`, `ArrowDown`| `-step`                     |
//! | `PageUp` / `PageDown`   | `±10·step`                  |
//! | `Home` / `End`          | jump to `min` / `max`       |
//!
//! `inverted` swaps the increase and decrease bindings of the arrow and page
//! keys. `Home` and `End` always target `min` and `max`.

use crate::config::SliderConfig;

/// Page keys move by this many steps.
pub const PAGE_STEPS: f64 = 10.0;

/// Keys understood by the slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
}

impl SliderKey {
    /// Parse a DOM `KeyboardEvent.key` name. Legacy `Up`/`Down`/`Left`/`Right`
    /// spellings are accepted.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => return None,
        })
    }

    /// Signed change this key applies to `current`.
    ///
    /// `Home`/`End` yield `boundary - current` so every key shares one update path.
    pub fn delta(self, config: &SliderConfig, current: f64) -> f64 {
        let forward = if config.inverted { -1.0 } else { 1.0 };
        match self {
            Self::ArrowRight | Self::ArrowUp => forward * config.step,
            Self::ArrowLeft | Self::ArrowDown => -forward * config.step,
            Self::PageUp => forward * PAGE_STEPS * config.step,
            Self::PageDown => -forward * PAGE_STEPS * config.step,
            Self::Home => config.min - current,
            Self::End => config.max - current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_names() {
        assert_eq!(SliderKey::from_key_name("ArrowUp"), Some(SliderKey::ArrowUp));
        assert_eq!(SliderKey::from_key_name("Left"), Some(SliderKey::ArrowLeft));
        assert_eq!(SliderKey::from_key_name("End"), Some(SliderKey::End));
        assert_eq!(SliderKey::from_key_name("Tab"), None);
    }

    #[test]
    fn arrows_and_pages_follow_step() {
        let c = SliderConfig::new(0.0, 100.0).with_step(2.0);
        assert_eq!(SliderKey::ArrowRight.delta(&c, 50.0), 2.0);
        assert_eq!(SliderKey::ArrowDown.delta(&c, 50.0), -2.0);
        assert_eq!(SliderKey::PageUp.delta(&c, 50.0), 20.0);
        assert_eq!(SliderKey::PageDown.delta(&c, 50.0), -20.0);
    }

    #[test]
    fn inversion_swaps_directions() {
        let c = SliderConfig::new(0.0, 100.0).inverted(true);
        assert_eq!(SliderKey::ArrowRight.delta(&c, 50.0), -1.0);
        assert_eq!(SliderKey::ArrowLeft.delta(&c, 50.0), 1.0);
        assert_eq!(SliderKey::PageDown.delta(&c, 50.0), 10.0);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let c = SliderConfig::new(0.0, 100.0).inverted(true);
        assert_eq!(SliderKey::Home.delta(&c, 55.0), -55.0);
        assert_eq!(SliderKey::End.delta(&c, 55.0), 45.0);
    }
}
