// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_swipe::{
    AllowedDirection, DragHelper, DraggableView, SwipeConfig, SwipeHost, TouchAction, TouchEvent,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform offset in `[-span, span]`.
    fn offset(&mut self, span: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * 2.0 * span - span
    }
}

#[derive(Clone, Default)]
struct Front {
    x: f64,
}

impl DraggableView for Front {
    fn width(&self) -> f64 {
        360.0
    }

    fn translation_x(&self) -> f64 {
        self.x
    }

    fn set_translation_x(&mut self, x: f64) {
        self.x = x;
    }
}

#[derive(Clone, Default)]
struct Row {
    front: Front,
    swipes: u64,
}

impl SwipeHost for Row {
    type View = Front;

    fn draggable_view(&self) -> &Front {
        &self.front
    }

    fn draggable_view_mut(&mut self) -> &mut Front {
        &mut self.front
    }

    fn container_width(&self) -> f64 {
        360.0
    }

    fn prevent_parent_from_intercepting_touches(&mut self) {}

    fn swiped_to_left(&mut self) {
        self.swipes += 1;
    }

    fn swiped_to_right(&mut self) {
        self.swipes += 1;
    }
}

/// Builds `gestures` down/move*/up sequences with `moves` random moves each.
fn touch_stream(gestures: usize, moves: usize, seed: u64) -> Vec<TouchEvent> {
    let mut rng = Lcg::new(seed);
    let mut events = Vec::with_capacity(gestures * (moves + 2));
    for _ in 0..gestures {
        let (x0, y0) = (180.0, 40.0);
        events.push(TouchEvent::down(x0, y0));
        let (mut x, mut y) = (x0, y0);
        for _ in 0..moves {
            x = x0 + rng.offset(300.0);
            y = y0 + rng.offset(60.0);
            events.push(TouchEvent::move_to(x, y));
        }
        events.push(TouchEvent::up(x, y));
    }
    events
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_swipe");
    group.sample_size(50);

    for &(gestures, moves) in &[(100_usize, 8_usize), (1_000, 32)] {
        let stream = touch_stream(gestures, moves, 0x5eed);
        for direction in [AllowedDirection::Both, AllowedDirection::Left] {
            group.bench_function(
                format!("dispatch(g={gestures},m={moves},{direction:?})"),
                |b| {
                    b.iter_batched(
                        || {
                            let mut helper =
                                DragHelper::new(Row::default(), SwipeConfig::new(direction));
                            helper.on_attached_to_window();
                            helper
                        },
                        |mut helper| {
                            for event in &stream {
                                helper.on_intercept_touch_event(event);
                                helper.on_touch_event(event);
                                if event.action == TouchAction::Up {
                                    helper.on_reset();
                                }
                            }
                            black_box(helper.host().swipes);
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
