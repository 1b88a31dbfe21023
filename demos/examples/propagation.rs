// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture, target, and bubble on a small display list.
//!
//! `stage ← container ← button`. Every node listens in both phases, the container
//! stops propagation while bubbling, and the stage cancels a cancelable event.
//!
//! Run:
//! - `cargo run -p flair_demos --example propagation`

use std::collections::HashMap;

use flair_dispatch::dispatcher::Dispatcher;
use flair_dispatch::path::propagation_path;
use flair_dispatch::types::{ListenerOptions, ParentLookup};
use flair_event::{Event, EventObject, EventPhase, TargetId};
use tracing_subscriber::EnvFilter;

const STAGE: TargetId = TargetId::new(1);
const CONTAINER: TargetId = TargetId::new(2);
const BUTTON: TargetId = TargetId::new(3);

#[derive(Default)]
struct DisplayList {
    parents: HashMap<TargetId, TargetId>,
}

impl ParentLookup<TargetId> for DisplayList {
    fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
        self.parents.get(node).copied()
    }
}

fn name(node: TargetId) -> &'static str {
    match node {
        STAGE => "stage",
        CONTAINER => "container",
        BUTTON => "button",
        _ => "?",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let list = DisplayList {
        parents: HashMap::from([(BUTTON, CONTAINER), (CONTAINER, STAGE)]),
    };
    let path = match propagation_path(BUTTON, &list, true, 16) {
        Ok(path) => path,
        Err(err) => {
            tracing::error!(%err, "display list is malformed");
            return;
        }
    };
    println!(
        "chain: {}",
        path.iter()
            .map(|s| format!("{:?}@{}", s.phase, name(s.node)))
            .collect::<Vec<_>>()
            .join(" → ")
    );

    let dispatcher = Dispatcher::with_parent(list);
    for node in [STAGE, CONTAINER, BUTTON] {
        for options in [ListenerOptions::capture(), ListenerOptions::default()] {
            dispatcher.add_listener(node, "click", options, |e: &mut dyn EventObject, _| {
                let base = e.base();
                let (Some(phase), Some(current)) = (base.event_phase(), base.current_target())
                else {
                    return;
                };
                println!("  {phase:?} at {}", name(current));
            });
        }
    }
    dispatcher.add_listener(
        CONTAINER,
        "click",
        ListenerOptions::default(),
        |e: &mut dyn EventObject, _| {
            if e.base().event_phase() == Some(EventPhase::Bubbling) {
                println!("  container stops propagation");
                e.base_mut().stop_propagation();
            }
        },
    );
    dispatcher.add_event_listener(STAGE, Event::CANCEL, ListenerOptions::default(), |e, _| {
        e.prevent_default();
    });

    println!("click (bubbles):");
    let mut click = Event::new("click", true, false);
    if let Err(err) = dispatcher.dispatch_event(BUTTON, &mut click) {
        tracing::error!(%err, "click dispatch failed");
    }
    println!("after: {click}");

    let mut cancel = Event::new(Event::CANCEL, true, true);
    match dispatcher.dispatch_event(BUTTON, &mut cancel) {
        Ok(proceed) => println!("cancel: default behavior allowed = {proceed}"),
        Err(err) => tracing::error!(%err, "cancel dispatch failed"),
    }
}
