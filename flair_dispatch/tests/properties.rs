// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for propagation order and stop semantics.

use std::cell::RefCell;
use std::rc::Rc;

use flair_dispatch::dispatcher::Dispatcher;
use flair_dispatch::types::{ListenerOptions, ParentLookup};
use flair_event::{Event, EventObject, EventPhase, TargetId};
use proptest::prelude::*;

/// Linear chain `0 ← 1 ← … ← depth`.
#[derive(Default)]
struct Line;

impl ParentLookup<TargetId> for Line {
    fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
        node.get().checked_sub(1).map(TargetId::new)
    }
}

type Visits = Rc<RefCell<Vec<(EventPhase, u64)>>>;

fn watch_all(d: &Dispatcher<Line>, depth: u64, visits: &Visits) {
    for n in 0..=depth {
        for options in [ListenerOptions::capture(), ListenerOptions::default()] {
            let visits = visits.clone();
            d.add_listener(
                TargetId::new(n),
                "tick",
                options,
                move |e: &mut dyn EventObject, _: &Dispatcher<Line>| {
                    let base = e.base();
                    if let (Some(phase), Some(node)) = (base.event_phase(), base.current_target()) {
                        visits.borrow_mut().push((phase, node.get()));
                    }
                },
            );
        }
    }
}

fn full_chain(depth: u64, bubbles: bool) -> Vec<(EventPhase, u64)> {
    let mut out: Vec<_> = (0..depth).map(|n| (EventPhase::Capturing, n)).collect();
    out.push((EventPhase::AtTarget, depth));
    if bubbles {
        out.extend((0..depth).rev().map(|n| (EventPhase::Bubbling, n)));
    }
    out
}

proptest! {
    #[test]
    fn phases_follow_the_chain(depth in 0_u64..24, bubbles in any::<bool>()) {
        let d: Dispatcher<Line> = Dispatcher::new();
        let visits = Visits::default();
        watch_all(&d, depth, &visits);

        let mut e = Event::new("tick", bubbles, false);
        prop_assert_eq!(d.dispatch_event(TargetId::new(depth), &mut e), Ok(true));

        prop_assert_eq!(&*visits.borrow(), &full_chain(depth, bubbles));
        prop_assert!(!e.is_dispatching());
        prop_assert_eq!(e.current_target(), None);
    }

    #[test]
    fn stopping_at_a_node_truncates_after_it(
        depth in 1_u64..16,
        stop_at in 0_u64..16,
        repeats in 1_usize..4,
        immediate in any::<bool>(),
    ) {
        let stop_at = stop_at % (depth + 1);
        let d: Dispatcher<Line> = Dispatcher::new();
        // Registered first, so it runs before the watchers on the same node.
        d.add_listener(
            TargetId::new(stop_at),
            "tick",
            ListenerOptions::default(),
            move |e: &mut dyn EventObject, _: &Dispatcher<Line>| {
                for _ in 0..repeats {
                    if immediate {
                        e.base_mut().stop_immediate_propagation();
                    } else {
                        e.base_mut().stop_propagation();
                    }
                }
            },
        );
        let visits = Visits::default();
        watch_all(&d, depth, &visits);

        let mut e = Event::new("tick", true, false);
        d.dispatch_event(TargetId::new(depth), &mut e).unwrap();

        let stop_phase = if stop_at == depth {
            EventPhase::AtTarget
        } else {
            EventPhase::Bubbling
        };
        let full = full_chain(depth, true);
        let k = full
            .iter()
            .position(|&v| v == (stop_phase, stop_at))
            .unwrap();
        // Immediate stop skips the watcher on the stopping node; a plain stop lets it run.
        let expected = if immediate { &full[..k] } else { &full[..=k] };
        prop_assert_eq!(&visits.borrow()[..], expected);
        prop_assert!(e.is_propagation_stopped());
        prop_assert_eq!(e.is_immediate_propagation_stopped(), immediate);
    }
}
