// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event controller work.
//!
//! Measures the performance of:
//! - Periodic tick handling in the transport controller
//! - Skip button commands
//! - Time label formatting

use criterion::{criterion_group, criterion_main, Criterion};
use onair::domain::video::{PlaybackStatus, SeekStep};
use onair::video_player::transport::{Message, State};
use onair::video_player::{format_remaining, format_time};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;

/// A controller that has validated its asset and is playing.
fn playing_state() -> State {
    let mut state = State::new(SeekStep::default());
    state.handle(Message::AssetValidated(Ok(())));
    state.handle(Message::StatusChanged(PlaybackStatus::ReadyToPlay));
    state.handle(Message::RateChanged(1.0));
    state
}

/// Benchmark tick handling, known duration and live edge.
fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("transport_reducer");

    group.bench_function("tick_known_duration", |b| {
        let mut state = playing_state();
        let mut time = 0.0;
        b.iter(|| {
            time = (time + 0.5) % 3_600.0;
            black_box(state.handle(Message::Tick {
                time_secs: black_box(time),
                duration_secs: Some(3_600.0),
                at: Instant::now(),
            }));
        });
    });

    group.bench_function("tick_live_edge", |b| {
        let mut state = playing_state();
        let start = Instant::now();
        let mut time = 0.0;
        b.iter(|| {
            time += 0.5;
            black_box(state.handle(Message::Tick {
                time_secs: black_box(time),
                duration_secs: None,
                at: start + Duration::from_secs_f64(time),
            }));
        });
    });

    group.finish();
}

/// Benchmark rewind/forward, including target clamping.
fn bench_skip(c: &mut Criterion) {
    let mut group = c.benchmark_group("transport_reducer");

    let mut state = playing_state();
    state.handle(Message::Tick {
        time_secs: 600.0,
        duration_secs: Some(1_200.0),
        at: Instant::now(),
    });

    group.bench_function("rewind_forward", |b| {
        b.iter(|| {
            black_box(state.handle(Message::Rewind));
            black_box(state.handle(Message::Forward));
        });
    });

    group.finish();
}

/// Benchmark the labels drawn on every tick.
fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("transport_reducer");

    let mut state = playing_state();
    state.handle(Message::Tick {
        time_secs: 65.0,
        duration_secs: Some(4_000.0),
        at: Instant::now(),
    });

    group.bench_function("format_time", |b| {
        b.iter(|| black_box(format_time(black_box(3_725.4))));
    });

    group.bench_function("remaining_label", |b| {
        b.iter(|| black_box(state.remaining_label()));
    });

    group.bench_function("format_remaining", |b| {
        b.iter(|| black_box(format_remaining(black_box(59.9))));
    });

    group.finish();
}

criterion_group!(benches, bench_ticks, bench_skip, bench_labels);
criterion_main!(benches);
