// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_rect::Rect;

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, cell, cell));
        }
    }
    out
}

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

fn gen_random_rects(count: usize, max_w: f64, max_h: f64, rect_w: f64, rect_h: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (max_w - rect_w).max(1.0);
        let y0 = rng.next_f64() * (max_h - rect_h).max(1.0);
        let w = rect_w * (0.5 + rng.next_f64());
        let h = rect_h * (0.5 + rng.next_f64());
        out.push(Rect::new(x0, y0, w, h));
    }
    out
}

fn gen_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * max_w, rng.next_f64() * max_h))
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for &n in &[16usize, 32, 64] {
        let rects = gen_grid_rects(n, 10.0);
        let points = gen_points(256, n as f64 * 10.0, n as f64 * 10.0);
        group.throughput(Throughput::Elements((rects.len() * points.len()) as u64));
        group.bench_function(format!("contains_point_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for p in &points {
                    hits += rects.iter().filter(|r| r.contains(*p)).count();
                }
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    let rects = gen_random_rects(4096, 2000.0, 2000.0, 40.0, 40.0);
    let viewport = Rect::new(500.0, 500.0, 800.0, 600.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("intersects_with", |b| {
        b.iter(|| {
            let visible = rects.iter().filter(|r| r.intersects_with(&viewport)).count();
            black_box(visible);
        });
    });
    group.bench_function("intersect_non_empty", |b| {
        b.iter(|| {
            let visible = rects
                .iter()
                .map(|r| r.intersect(&viewport))
                .filter(|r| !r.is_empty())
                .count();
            black_box(visible);
        });
    });
    group.bench_function("scrolled_viewport", |b| {
        b.iter(|| {
            let mut visible = 0usize;
            for step in 0..16 {
                let scrolled = viewport + Vec2::new(0.0, step as f64 * 50.0);
                visible += rects.iter().filter(|r| r.intersects_with(&scrolled)).count();
            }
            black_box(visible);
        });
    });
    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    let rects = gen_random_rects(4096, 2000.0, 2000.0, 40.0, 40.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("fold_bounds", |b| {
        b.iter(|| {
            let bounds = rects
                .iter()
                .skip(1)
                .fold(rects[0], |acc, r| acc.union(r));
            black_box(bounds);
        });
    });
    group.bench_function("expand_then_contains_rect", |b| {
        b.iter(|| {
            let inside = rects
                .iter()
                .filter(|r| Rect::VERY_BIG.contains_rect(&r.expand(4.0)))
                .count();
            black_box(inside);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_clip, bench_union);
criterion_main!(benches);
