// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_layout::{Breakpoints, LayoutMetrics, StepPolicy};
use carousel_timing::TimerQueue;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_metrics(c: &mut Criterion) {
    let breakpoints = Breakpoints::default();
    let policy = StepPolicy::default();

    c.bench_function("layout/compute_metrics_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for width in (300..2_000).step_by(7) {
                let metrics = LayoutMetrics::compute(
                    &breakpoints,
                    &policy,
                    black_box(f64::from(width)),
                    black_box(24),
                    Some(350.0),
                    Some(30.0),
                );
                acc += metrics.max_index;
            }
            black_box(acc)
        });
    });
}

fn bench_timer_churn(c: &mut Criterion) {
    // A debounce re-armed on every resize event, the common hot path.
    c.bench_function("timing/debounce_rearm", |b| {
        b.iter(|| {
            let mut timers = TimerQueue::new();
            timers.schedule(0_u8, 800);
            timers.schedule(1_u8, 6_000);
            for now in 0..1_000_u64 {
                timers.schedule(2_u8, black_box(now + 250));
            }
            while let Some(timer) = timers.pop_due(u64::MAX) {
                black_box(timer);
            }
        });
    });
}

criterion_group!(benches, bench_metrics, bench_timer_churn);
criterion_main!(benches);
