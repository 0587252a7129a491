// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use pull_refresh::refresh::{
    GeometryBatch, GeometrySample, IndicatorLayout, OffsetTracker, PullState, Threshold,
};
use std::hint::black_box;

/// A pull down past the threshold and back, sampled like a 60 fps gesture.
fn gesture_offsets() -> Vec<f32> {
    let down = (0..60).map(|i| i as f32 * 2.5);
    let up = (0..60).rev().map(|i| i as f32 * 2.5);
    down.chain(up).collect()
}

fn offset_pipeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_pipeline");
    let offsets = gesture_offsets();

    group.bench_function("state_machine_only", |b| {
        b.iter(|| {
            let mut state = PullState::new(Threshold::default());
            for &offset in &offsets {
                black_box(state.apply_offset(black_box(offset)));
            }
            state
        });
    });

    group.bench_function("probes_tracker_machine_indicator", |b| {
        b.iter(|| {
            let mut tracker = OffsetTracker::new();
            let mut state = PullState::new(Threshold::default());
            for (pass, &pull) in offsets.iter().enumerate() {
                let batch = GeometryBatch::new(
                    pass as u64,
                    vec![
                        GeometrySample::fixed(48.0, 0.0),
                        GeometrySample::moving(48.0 + pull, 900.0),
                    ],
                );
                tracker.schedule(black_box(&batch));
                let drained: Vec<f32> = tracker.drain().collect();
                for offset in drained {
                    state.apply_offset(offset);
                }
                black_box(IndicatorLayout::resolve(&state));
            }
            state
        });
    });

    group.finish();
}

criterion_group!(benches, offset_pipeline_benchmark);
criterion_main!(benches);
