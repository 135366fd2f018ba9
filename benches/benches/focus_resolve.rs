// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_focus_shape::{DisplayDensity, FocusKind, resolve};

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

fn gen_targets(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * 1080.0;
            let y0 = rng.next_f64() * 1920.0;
            let w = 8.0 + rng.next_f64() * 300.0;
            let h = 8.0 + rng.next_f64() * 120.0;
            Rect::new(x0, y0, x0 + w, y0 + h)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let targets = gen_targets(4096);
    let density = DisplayDensity::XXHDPI;
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(targets.len() as u64));
    for kind in [
        FocusKind::Circle,
        FocusKind::Rectangle,
        FocusKind::RoundedRectangle,
    ] {
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| {
                for t in &targets {
                    black_box(resolve(kind, *t, 8.0, density));
                }
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let targets = gen_targets(1024);
    let shapes: Vec<_> = targets
        .iter()
        .map(|t| resolve(FocusKind::Circle, *t, 8.0, DisplayDensity::XHDPI))
        .collect();
    c.bench_function("contains_center", |b| {
        b.iter(|| {
            let hits = shapes
                .iter()
                .zip(&targets)
                .filter(|(s, t)| s.contains(t.center()))
                .count();
            black_box(hits);
        });
    });
}

criterion_group!(benches, bench_resolve, bench_contains);
criterion_main!(benches);
