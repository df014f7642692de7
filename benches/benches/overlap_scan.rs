// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use marquee_geom::overlaps;
use marquee_session::set::SelectorSet;

fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

/// An n x n grid of 10px selectors on a 12px stride, so neighbours neither
/// touch nor overlap.
fn gen_grid_set(n: usize) -> SelectorSet {
    let mut set = SelectorSet::new();
    for y in 0..n {
        for x in 0..n {
            set.append(from_xywh(x as f64 * 12.0, y as f64 * 12.0, 10.0, 10.0));
        }
    }
    set
}

fn bench_overlaps_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlaps_pair");
    let a = from_xywh(100.0, 100.0, 40.0, 40.0);
    let hit = from_xywh(120.0, 120.0, 40.0, 40.0);
    let miss = from_xywh(500.0, 500.0, 40.0, 40.0);
    group.bench_function("hit", |b| {
        b.iter(|| black_box(overlaps(black_box(a), black_box(hit))))
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(overlaps(black_box(a), black_box(miss))))
    });
    group.finish();
}

fn bench_any_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("any_overlap");
    for &n in &[4usize, 8, 16, 32] {
        let set = gen_grid_set(n);
        group.throughput(Throughput::Elements((n * n) as u64));

        // Hits a selector near the middle of the grid.
        let mid = (n / 2) as f64 * 12.0;
        let hit = from_xywh(mid + 5.0, mid + 5.0, 10.0, 10.0);
        group.bench_function(format!("hit_n{}", n * n), |b| {
            b.iter(|| black_box(set.any_overlap(black_box(hit), None)))
        });

        // Clears the whole grid: the worst case, every selector is scanned.
        let miss = from_xywh(n as f64 * 12.0 + 10.0, 0.0, 10.0, 10.0);
        group.bench_function(format!("miss_n{}", n * n), |b| {
            b.iter(|| black_box(set.any_overlap(black_box(miss), None)))
        });

        // A moved selector tested against its siblings, excluding itself.
        let first = set.selectors()[0].id();
        let moved = from_xywh(3.0, 3.0, 10.0, 10.0);
        group.bench_function(format!("exclude_self_n{}", n * n), |b| {
            b.iter(|| black_box(set.any_overlap(black_box(moved), Some(first))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlaps_pair, bench_any_overlap);
criterion_main!(benches);
