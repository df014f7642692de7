// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use marquee_geom::ContainerBounds;
use marquee_session::Handle;
use marquee_session::session::Session;
use marquee_session::set::SelectorSet;

fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

fn gen_grid_set(n: usize) -> SelectorSet {
    let mut set = SelectorSet::new();
    for y in 0..n {
        for x in 0..n {
            set.append(from_xywh(x as f64 * 12.0, y as f64 * 12.0, 10.0, 10.0));
        }
    }
    set
}

/// A full create gesture: pointer-down, `samples` moves, pointer-up, with the
/// live overlap check running against an n x n committed grid on every move.
fn bench_create_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_gesture");
    let bounds = ContainerBounds::new(Point::ZERO, Size::new(2000.0, 2000.0));
    for &n in &[8usize, 16, 32] {
        let set = gen_grid_set(n);
        let samples = 64usize;
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_function(format!("moves64_grid_n{}", n * n), |b| {
            b.iter_batched(
                || (set.clone(), Session::new()),
                |(mut set, mut session)| {
                    // Draws in the free band to the right of the grid.
                    let x0 = n as f64 * 12.0 + 20.0;
                    session.begin_create(bounds, Point::new(x0, 10.0));
                    for i in 0..samples {
                        let p = Point::new(x0 + i as f64, 10.0 + i as f64);
                        black_box(session.update(p, &set));
                    }
                    black_box(session.finish(&mut set));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// A resize drag that inverts mid-gesture, exercising the re-normalization
/// and handle hand-off path on every sample.
fn bench_resize_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_gesture");
    let bounds = ContainerBounds::new(Point::ZERO, Size::new(2000.0, 2000.0));
    let samples = 64usize;
    group.throughput(Throughput::Elements(samples as u64));
    group.bench_function("inverting_moves64", |b| {
        b.iter_batched(
            || {
                let mut set = SelectorSet::new();
                let id = set.append(from_xywh(900.0, 900.0, 100.0, 100.0));
                (set, id)
            },
            |(mut set, id)| {
                let mut session = Session::new();
                session.begin_resize(bounds, Point::new(1000.0, 950.0), id, Handle::E, &set);
                // Sweep the east edge left across the west edge and back.
                for i in 0..samples {
                    let x = 1000.0 - (i as f64 * 8.0 - 200.0).abs();
                    black_box(session.update(Point::new(x, 950.0), &set));
                }
                black_box(session.finish(&mut set));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_create_gesture, bench_resize_inversion);
criterion_main!(benches);
