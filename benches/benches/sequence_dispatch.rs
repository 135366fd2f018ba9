// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_spotlight::{
    Dispatcher, MemoryStore, PresentationRequest, SequenceBuilder, StaticHost,
};

fn tour(host: &StaticHost, steps: usize, develop: bool) -> SequenceBuilder<'_> {
    let mut b = SequenceBuilder::new()
        .context(host)
        .key("bench")
        .developer_mode(develop)
        .text("body")
        .margin(8.0);
    for i in 0..steps {
        let x0 = i as f64 * 24.0;
        b = b
            .target(Rect::new(x0, 0.0, x0 + 20.0, 20.0))
            .title(format!("step {i}"))
            .add();
    }
    b
}

fn bench_build(c: &mut Criterion) {
    let host = StaticHost::default();
    let mut group = c.benchmark_group("build");
    for steps in [1_usize, 8, 64] {
        group.bench_function(format!("steps_{steps}"), |b| {
            b.iter(|| black_box(tour(&host, steps, false).build()));
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let host = StaticHost::default();
    let mut group = c.benchmark_group("dispatch");
    group.bench_function("develop_mode_8_steps", |b| {
        let mut d = Dispatcher::new(MemoryStore::new(), Vec::<PresentationRequest>::new());
        b.iter_batched(
            || tour(&host, 8, true).build(),
            |seq| {
                if let Ok(seq) = seq {
                    black_box(d.dispatch(seq));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("already_shown", |b| {
        let mut d = Dispatcher::new(MemoryStore::new(), Vec::<PresentationRequest>::new());
        if let Ok(seq) = tour(&host, 1, false).build() {
            let _ = d.dispatch(seq);
        }
        b.iter_batched(
            || tour(&host, 8, false).build(),
            |seq| {
                if let Ok(seq) = seq {
                    black_box(d.dispatch(seq));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_dispatch);
criterion_main!(benches);
