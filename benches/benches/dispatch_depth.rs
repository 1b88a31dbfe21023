// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flair_dispatch::dispatcher::Dispatcher;
use flair_dispatch::types::{ListenerOptions, ParentLookup};
use flair_event::{Event, TargetId};

/// Linear display list `0 ← 1 ← … ← n`.
#[derive(Default)]
struct Line;

impl ParentLookup<TargetId> for Line {
    fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
        node.get().checked_sub(1).map(TargetId::new)
    }
}

fn listening_line(depth: u64) -> Dispatcher<Line> {
    let d = Dispatcher::new();
    for n in 0..=depth {
        d.add_event_listener(TargetId::new(n), Event::CHANGE, ListenerOptions::capture(), |e, _| {
            black_box(e.current_target());
        });
        d.add_event_listener(TargetId::new(n), Event::CHANGE, ListenerOptions::default(), |e, _| {
            black_box(e.event_phase());
        });
    }
    d
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_depth");
    for &depth in &[1_u64, 8, 32, 128] {
        let d = listening_line(depth);
        let target = TargetId::new(depth);
        group.throughput(Throughput::Elements(2 * depth + 1));
        group.bench_function(format!("bubbling_d{depth}"), |b| {
            b.iter_batched(
                || Event::new(Event::CHANGE, true, false),
                |mut e| black_box(d.dispatch_event(target, &mut e)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("stop_at_target_d{depth}"), |b| {
            let stopper = d.add_event_listener(
                target,
                Event::CHANGE,
                ListenerOptions::default().with_priority(1),
                |e, _| e.stop_propagation(),
            );
            b.iter_batched(
                || Event::new(Event::CHANGE, true, false),
                |mut e| black_box(d.dispatch_event(target, &mut e)),
                BatchSize::SmallInput,
            );
            d.remove_event_listener(stopper);
        });
    }
    group.finish();
}

criterion_group!(benches, bench_depth);
criterion_main!(benches);
