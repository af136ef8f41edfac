// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel::{Carousel, CarouselConfig, CarouselInput, Direction, Frame, RenderTarget};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

struct NullStrip {
    width: f64,
    items: usize,
}

impl RenderTarget for NullStrip {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn item_count(&self) -> usize {
        self.items
    }

    fn first_item_extent(&self) -> Option<f64> {
        Some(350.0)
    }

    fn item_gap(&self) -> Option<f64> {
        Some(30.0)
    }

    fn present(&mut self, frame: &Frame) {
        black_box(frame);
    }
}

fn script(len: usize) -> Vec<(u64, CarouselInput)> {
    let cycle = [
        CarouselInput::Button(Direction::Next),
        CarouselInput::PointerDown { x: 500.0 },
        CarouselInput::PointerMove { x: 470.0 },
        CarouselInput::PointerMove { x: 420.0 },
        CarouselInput::PointerUp,
        CarouselInput::Resize,
        CarouselInput::Button(Direction::Prev),
    ];
    (0..len)
        .map(|i| ((i as u64) * 150, cycle[i % cycle.len()]))
        .collect()
}

fn bench_input_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/input_stream");

    // Every event re-measures the target; this tracks per-event overhead.
    for len in [256usize, 4_096] {
        let events = script(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("handle_and_poll", len), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut carousel = Carousel::new(
                        NullStrip {
                            width: 900.0,
                            items: 12,
                        },
                        CarouselConfig::default(),
                    );
                    carousel.start_autoplay(0);
                    carousel
                },
                |mut carousel| {
                    for &(now, input) in events {
                        carousel.poll(now);
                        carousel.handle(input, now);
                    }
                    black_box(carousel.index());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_input_stream);
criterion_main!(benches);
