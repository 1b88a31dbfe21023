// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for pooling and cloning.

use flair_event::{
    Event, EventObject, EventPhase, HttpStatusEvent, Pool, TargetId, UrlRequestHeader,
};
use flair_event::event::DispatchToken;
use proptest::prelude::*;

const HOOKS: DispatchToken = flair_event::dispatch_hooks::token();

#[derive(Clone, Debug)]
enum Op {
    Acquire,
    Release,
    Dirty(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Acquire),
        Just(Op::Release),
        any::<u16>().prop_map(Op::Dirty),
    ]
}

fn is_default(e: &HttpStatusEvent) -> bool {
    *e == HttpStatusEvent::default()
}

fn header() -> impl Strategy<Value = UrlRequestHeader> {
    ("[A-Za-z-]{1,12}", "[ -~]{0,16}").prop_map(|(n, v)| UrlRequestHeader::new(n, v))
}

fn phase() -> impl Strategy<Value = Option<EventPhase>> {
    prop_oneof![
        Just(None),
        Just(Some(EventPhase::Capturing)),
        Just(Some(EventPhase::AtTarget)),
        Just(Some(EventPhase::Bubbling)),
    ]
}

proptest! {
    #[test]
    fn every_acquired_instance_is_default(ops in proptest::collection::vec(op(), 0..64)) {
        let mut pool = Pool::new(HttpStatusEvent::default, HttpStatusEvent::reset);
        let mut held: Vec<HttpStatusEvent> = Vec::new();
        for op in ops {
            match op {
                Op::Acquire => {
                    let e = pool.acquire();
                    prop_assert!(is_default(&e), "acquired {e}");
                    held.push(e);
                }
                Op::Release => {
                    if let Some(e) = held.pop() {
                        pool.release(e);
                    }
                }
                Op::Dirty(status) => {
                    // Simulate a producer filling the payload and a dispatch in progress.
                    if let Some(e) = held.last_mut() {
                        *e = HttpStatusEvent::new("httpStatus", true, true, status, true);
                        e.set_response_url(Some("https://example.com".into()));
                        e.push_response_header(UrlRequestHeader::new("X", "y"));
                        e.begin_dispatch(&HOOKS, TargetId::new(u64::from(status)));
                        e.enter_step(&HOOKS, EventPhase::AtTarget, TargetId::new(1));
                        e.prevent_default();
                    }
                }
            }
        }
        prop_assert_eq!(pool.created() - pool.free_len(), held.len());
    }

    #[test]
    fn clone_is_field_for_field_and_independent(
        bubbles in any::<bool>(),
        cancelable in any::<bool>(),
        status in any::<u16>(),
        redirected in any::<bool>(),
        url in proptest::option::of("[a-z:/.]{1,24}"),
        headers in proptest::collection::vec(header(), 0..4),
        target in proptest::option::of(any::<u64>()),
        current in any::<u64>(),
        phase in phase(),
    ) {
        let mut e = HttpStatusEvent::new("httpResponseStatus", bubbles, cancelable, status, redirected);
        e.set_response_url(url.clone());
        e.set_response_headers(headers.clone());
        if let Some(t) = target {
            e.begin_dispatch(&HOOKS, TargetId::new(t));
            if let Some(p) = phase {
                e.enter_step(&HOOKS, p, TargetId::new(current));
            }
            e.end_dispatch(&HOOKS);
        }

        let mut c = e.clone();
        prop_assert_eq!(&c, &e);
        prop_assert_eq!(c.status(), status);
        prop_assert_eq!(c.redirected(), redirected);
        prop_assert_eq!(c.bubbles(), bubbles);
        prop_assert_eq!(c.cancelable(), cancelable);
        prop_assert_eq!(c.response_url(), url.as_deref());
        prop_assert_eq!(c.response_headers(), &headers[..]);
        prop_assert_eq!(c.target(), e.target());
        prop_assert_eq!(c.current_target(), e.current_target());
        prop_assert_eq!(c.event_phase(), e.event_phase());
        prop_assert_eq!(c.to_string(), e.to_string());

        c.set_redirected(!redirected);
        c.push_response_header(UrlRequestHeader::new("Extra", "1"));
        c.set_response_url(None);
        prop_assert_eq!(e.redirected(), redirected);
        prop_assert_eq!(e.response_headers().len(), headers.len());
        prop_assert_eq!(e.response_url(), url.as_deref());
    }

    #[test]
    fn base_clone_of_any_type_string_round_trips(ty in "\\PC{0,24}", bubbles in any::<bool>()) {
        let e = Event::new(ty.clone(), bubbles, false);
        let c = e.clone();
        prop_assert_eq!(c.event_type(), ty.as_str());
        prop_assert_eq!(&c, &e);
    }
}

#[test]
fn http_status_pool_scenario() {
    use flair_event::PooledEvent;

    // Drain anything other tests on this thread left behind.
    while HttpStatusEvent::with_pool(|p| p.free_len()) > 0 {
        drop(HttpStatusEvent::acquire_pooled());
    }

    let first = HttpStatusEvent::acquire_pooled();
    assert_eq!(first.status(), 0);
    assert!(!first.redirected());
    first.release();

    let again = HttpStatusEvent::acquire_pooled();
    assert_eq!(again.status(), 0);
    assert!(!again.redirected());
    again.release();
}
