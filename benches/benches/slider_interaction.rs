// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::{
    SliderConfig, SliderController, SliderKey, SliderProps, SliderValue, Thumb,
    plain_value_text, position_to_value,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, track: Rect, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            // Overshoot the track on both ends to exercise clamping.
            let x = track.x0 - 50.0 + rng.next_f64() * (track.width() + 100.0);
            Point::new(x, track.center().y)
        })
        .collect()
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamp");
    let mut rng = Rng::new(0x5eed);
    let raws: Vec<f64> = (0..4096).map(|_| rng.next_f64() * 1200.0 - 100.0).collect();
    group.throughput(Throughput::Elements(raws.len() as u64));
    for &(name, step) in &[("step_1", 1.0), ("step_0_01", 0.01), ("step_7_off_grid", 7.0)] {
        let config = SliderConfig::new(0.0, 1000.0).with_step(step);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &raw in &raws {
                    acc += config.clamp(black_box(raw));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_to_value");
    let track = Rect::new(0.0, 0.0, 600.0, 24.0);
    let points = gen_points(4096, track, 42);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &inverted in &[false, true] {
        let config = SliderConfig::new(-50.0, 50.0)
            .with_step(0.5)
            .inverted(inverted);
        group.bench_function(format!("inverted_{inverted}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &p in &points {
                    acc += position_to_value(&config, black_box(p), Some(track));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let track = Rect::new(0.0, 0.0, 600.0, 24.0);
    let points = gen_points(1024, track, 7);
    group.throughput(Throughput::Elements(points.len() as u64));

    let single = SliderProps::new(SliderConfig::new(0.0, 100.0));
    group.bench_function("single_session", |b| {
        b.iter_batched(
            || SliderController::new(&single.config),
            |mut slider| {
                let mut events = slider.pointer_down(&single, Thumb::Single).events.len();
                for &p in &points {
                    events += slider.pointer_move(&single, p, Some(track)).events.len();
                }
                events += slider.pointer_up(&single).events.len();
                black_box(events);
            },
            BatchSize::SmallInput,
        );
    });

    let range = SliderProps::new(SliderConfig::new(0.0, 100.0).with_step(0.1).range(true));
    group.bench_function("range_end_session", |b| {
        b.iter_batched(
            || {
                SliderController::with_default(
                    &range.config,
                    SliderValue::Range {
                        start: 40.0,
                        end: 60.0,
                    },
                )
            },
            |mut slider| {
                let mut events = slider.touch_start(&range, Thumb::End).events.len();
                for &p in &points {
                    events += slider.touch_move(&range, p, Some(track)).events.len();
                }
                events += slider.touch_end(&range).events.len();
                black_box(events);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_keys_and_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys_and_view");
    let props = SliderProps::new(SliderConfig::new(0.0, 1.0).with_step(0.001).range(true))
        .show_step_marks(false);
    let keys = [
        SliderKey::ArrowUp,
        SliderKey::PageUp,
        SliderKey::ArrowDown,
        SliderKey::PageDown,
    ];
    group.bench_function("key_down_x256", |b| {
        b.iter_batched(
            || SliderController::new(&props.config),
            |mut slider| {
                for i in 0..256 {
                    let thumb = if i % 2 == 0 { Thumb::Start } else { Thumb::End };
                    black_box(slider.key_down(&props, thumb, keys[i % keys.len()]));
                }
            },
            BatchSize::SmallInput,
        );
    });

    let marked = SliderProps::new(SliderConfig::new(0.0, 100.0).with_step(5.0)).show_step_marks(true);
    let slider = SliderController::with_default(&marked.config, SliderValue::Single(35.0));
    group.bench_function("view_with_step_marks", |b| {
        b.iter(|| black_box(slider.view(&marked, &plain_value_text)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_clamp,
    bench_position,
    bench_drag,
    bench_keys_and_view,
);
criterion_main!(benches);
