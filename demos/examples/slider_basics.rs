// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Drag a single-value slider, click the track, and print the render view.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_basics`

use kurbo::{Point, Rect};
use understory_slider::{
    Mark, SliderConfig, SliderController, SliderEvent, SliderProps, SliderValue, Thumb,
};

fn main() {
    let props = SliderProps::new(SliderConfig::new(0.0, 100.0).with_step(10.0))
        .marks([Mark::labeled(0.0, "cold"), Mark::labeled(100.0, "hot")]);
    let mut slider = SliderController::with_default(&props.config, SliderValue::Single(20.0));
    let track = Rect::new(10.0, 0.0, 310.0, 24.0);

    // Drag the thumb across the track.
    let mut log = Vec::new();
    log.extend(slider.pointer_down(&props, Thumb::Single).events);
    for x in [40.0, 100.0, 104.0, 190.0] {
        log.extend(slider.pointer_move(&props, Point::new(x, 12.0), Some(track)).events);
    }
    // Release ends the session wherever the pointer is.
    log.extend(slider.pointer_up(&props).events);
    for event in &log {
        println!("{event:?}");
    }
    assert_eq!(
        log.iter()
            .filter(|e| matches!(e, SliderEvent::Change(_)))
            .count(),
        3,
        "104 px snaps to the same step as 100 px"
    );
    assert_eq!(slider.value(&props), SliderValue::Single(60.0));

    // Click the track: jump and focus.
    let click = slider.track_click(&props, Point::new(295.0, 12.0), Some(track));
    println!("click: {:?}", click.events);
    assert_eq!(click.events[1], SliderEvent::Focus(Thumb::Single));

    let view = slider.view(&props, &|v| format!("{v} °C"));
    println!(
        "fill {:?}, thumb at {}%, label {:?}, form value {:?}",
        view.fill, view.thumbs[0].percentage, view.thumbs[0].label, view.form_value
    );
    for mark in &view.marks {
        println!("mark {:?} at {}% filled={}", mark.label, mark.percentage, mark.filled);
    }
    assert_eq!(view.form_value, "100");
}
