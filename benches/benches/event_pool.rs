// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use flair_event::{EventObject, HttpStatusEvent, Pool, PooledEvent, UrlRequestHeader};

fn fill(e: &mut HttpStatusEvent, i: u16) {
    e.set_redirected(i % 2 == 0);
    e.set_response_url(Some(String::from("https://example.com/status")));
    e.push_response_header(UrlRequestHeader::new("Content-Type", "text/plain"));
}

fn bench_http_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_status");
    const N: u16 = 1024;
    group.throughput(Throughput::Elements(u64::from(N)));

    group.bench_function("fresh", |b| {
        b.iter(|| {
            for i in 0..N {
                let mut e = HttpStatusEvent::new(
                    HttpStatusEvent::HTTP_STATUS,
                    false,
                    false,
                    200 + i,
                    false,
                );
                fill(&mut e, i);
                black_box(&e);
            }
        });
    });

    group.bench_function("local_pool", |b| {
        let mut pool = Pool::new(
            HttpStatusEvent::default as fn() -> HttpStatusEvent,
            HttpStatusEvent::reset as fn(&mut HttpStatusEvent),
        );
        pool.prewarm(1);
        b.iter(|| {
            for i in 0..N {
                let mut e = pool.acquire();
                fill(&mut e, i);
                black_box(&e);
                pool.release(e);
            }
        });
    });

    group.bench_function("thread_pool", |b| {
        b.iter(|| {
            for i in 0..N {
                let mut e = HttpStatusEvent::acquire(
                    HttpStatusEvent::HTTP_STATUS,
                    false,
                    false,
                    200 + i,
                    false,
                );
                fill(&mut e, i);
                black_box(&e);
                e.release();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_http_status);
criterion_main!(benches);
