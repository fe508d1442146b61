// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical and inverted tracks.
//!
//! Shows where a value is drawn and which value a pointer position reads as,
//! for each orientation and inversion.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_vertical_inverted`

use kurbo::{Point, Rect};
use understory_slider::{
    Orientation, SliderConfig, point_for_value, position_to_value, render_percentage,
};

fn main() {
    let horizontal = Rect::new(0.0, 0.0, 200.0, 20.0);
    let vertical = Rect::new(0.0, 0.0, 20.0, 200.0);

    for (orientation, track) in [
        (Orientation::Horizontal, horizontal),
        (Orientation::Vertical, vertical),
    ] {
        for inverted in [false, true] {
            let config = SliderConfig::new(0.0, 100.0)
                .with_orientation(orientation)
                .inverted(inverted);
            let at = point_for_value(&config, 25.0, track);
            let back = position_to_value(&config, at, Some(track));
            println!(
                "{orientation:?} inverted={inverted}: 25 drawn at {}% ({:.0}, {:.0}), reads back {back}",
                render_percentage(&config, 25.0),
                at.x,
                at.y,
            );
            assert_eq!(back, 25.0, "drawing and reading cancel out");
        }
    }

    // A vertical track grows upward: the top edge is max.
    let config = SliderConfig::new(0.0, 100.0).vertical();
    assert_eq!(
        position_to_value(&config, Point::new(10.0, 0.0), Some(vertical)),
        100.0
    );
    // Inverted, the top edge is min.
    let config = config.inverted(true);
    assert_eq!(
        position_to_value(&config, Point::new(10.0, 0.0), Some(vertical)),
        0.0
    );
}
