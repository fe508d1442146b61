// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider driven from the keyboard.
//!
//! Walks both thumbs with DOM key names, shows that they stick together instead
//! of crossing, and routes events through a [`SliderHandler`].
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_range_keyboard`

use understory_slider::{
    SliderConfig, SliderController, SliderHandler, SliderKey, SliderProps, SliderValue, Thumb,
};

#[derive(Default)]
struct Printer {
    last: Option<(f64, f64)>,
}

impl SliderHandler for Printer {
    fn on_change_start(&mut self, thumb: Thumb, value: f64) {
        println!("  start {thumb:?} at {value}");
    }

    fn on_range_change(&mut self, start: f64, end: f64) {
        println!("  range {start}..{end}");
        self.last = Some((start, end));
    }

    fn on_change_end(&mut self, thumb: Thumb, value: f64) {
        println!("  end {thumb:?} at {value}");
    }
}

fn main() {
    let props = SliderProps::new(SliderConfig::new(0.0, 1.0).with_step(0.05).range(true));
    let mut slider = SliderController::with_default(
        &props.config,
        SliderValue::Range {
            start: 0.2,
            end: 0.4,
        },
    );
    let mut printer = Printer::default();

    let script = [
        (Thumb::Start, "ArrowRight"),
        (Thumb::Start, "PageUp"),
        (Thumb::Start, "PageUp"),
        (Thumb::End, "Home"),
        (Thumb::End, "End"),
        (Thumb::Start, "Tab"),
    ];
    for (thumb, name) in script {
        let Some(key) = SliderKey::from_key_name(name) else {
            println!("{name}: not a slider key");
            continue;
        };
        println!("{name} on {thumb:?}");
        slider.key_down(&props, thumb, key).dispatch(&mut printer);
    }

    // 0.2 + 0.05 = 0.25 without float noise; PageUp is capped by the end thumb.
    assert_eq!(
        slider.value(&props),
        SliderValue::Range {
            start: 0.4,
            end: 1.0
        }
    );
    assert_eq!(printer.last, Some((0.4, 1.0)));
}
