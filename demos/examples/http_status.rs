// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP status events from a loader.
//!
//! A loader outside the display list reports its response through pooled
//! `HTTPStatusEvent`s: `httpResponseStatus` first, then `httpStatus`.
//!
//! Run:
//! - `RUST_LOG=info,flair_event=debug,flair_dispatch=trace cargo run -p flair_demos --example http_status`

use flair_dispatch::dispatcher::Dispatcher;
use flair_dispatch::types::{ListenerOptions, NoParent};
use flair_event::{HttpStatusEvent, PooledEvent, TargetId, UrlRequestHeader};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let loader = TargetId::new(1);
    let dispatcher: Dispatcher<NoParent> = Dispatcher::new();

    dispatcher.add_event_listener(
        loader,
        HttpStatusEvent::HTTP_RESPONSE_STATUS,
        ListenerOptions::default(),
        |e, _| {
            println!("response: {e}");
            for header in e.response_headers() {
                println!("  {header}");
            }
        },
    );
    dispatcher.add_event_listener(
        loader,
        HttpStatusEvent::HTTP_STATUS,
        ListenerOptions::default(),
        |e, _| println!("status:   {e}"),
    );

    for (status, redirected) in [(200, false), (301, true), (404, false)] {
        let mut response = HttpStatusEvent::acquire(
            HttpStatusEvent::HTTP_RESPONSE_STATUS,
            false,
            false,
            status,
            redirected,
        );
        response.set_response_url(Some(format!("https://example.com/{status}")));
        response.set_response_headers([
            UrlRequestHeader::new("Content-Type", "text/html"),
            UrlRequestHeader::new("X-Status", status.to_string()),
        ]);
        tracing::info!(status, redirected, "loader received response");
        if let Err(err) = dispatcher.dispatch_event(loader, &mut response) {
            tracing::error!(%err, "dispatch failed");
        }
        response.release();

        let mut done =
            HttpStatusEvent::acquire(HttpStatusEvent::HTTP_STATUS, false, false, status, redirected);
        if let Err(err) = dispatcher.dispatch_event(loader, &mut done) {
            tracing::error!(%err, "dispatch failed");
        }
        done.release();
    }

    let created = HttpStatusEvent::with_pool(|pool| pool.created());
    tracing::info!(created, "pool instances created for 6 events");
}
