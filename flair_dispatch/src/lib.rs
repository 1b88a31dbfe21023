// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flair Dispatch: a deterministic, `no_std` capture → target → bubble dispatcher.
//!
//! ## Overview
//!
//! This crate delivers [`flair_event`] objects to listeners registered on nodes of a
//! display list, following the legacy Flash propagation model.
//! It does not own the display list. Instead, it asks a
//! [`ParentLookup`](crate::types::ParentLookup) for each node's parent and builds the
//! chain once per dispatch.
//!
//! ## Propagation
//!
//! For a target with ancestors `root … parent`:
//!
//! - Capturing: `root → parent`, invoking capture listeners.
//! - At target: the target, invoking non-capture listeners.
//! - Bubbling: `parent → root`, invoking non-capture listeners, only for bubbling events.
//!
//! [`propagation_path`](crate::path::propagation_path) exposes the chain on its own.
//!
//! ## Listeners
//!
//! [`Dispatcher::add_event_listener`](crate::dispatcher::Dispatcher::add_event_listener)
//! takes an [`EventType`](flair_event::EventType), so the listener receives the concrete
//! event class without a cast. A listener that needs any class registers through
//! [`Dispatcher::add_listener`](crate::dispatcher::Dispatcher::add_listener) and gets a
//! `&mut dyn EventObject`.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use flair_dispatch::dispatcher::Dispatcher;
//! use flair_dispatch::types::{ListenerOptions, ParentLookup};
//! use flair_event::{Event, EventPhase, TargetId};
//!
//! /// stage (1) ← sprite (2)
//! #[derive(Default)]
//! struct Stage;
//! impl ParentLookup<TargetId> for Stage {
//!     fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
//!         (node.get() == 2).then_some(TargetId::new(1))
//!     }
//! }
//!
//! let (stage, sprite) = (TargetId::new(1), TargetId::new(2));
//! let dispatcher: Dispatcher<Stage> = Dispatcher::new();
//!
//! let bubbled = Rc::new(Cell::new(None));
//! let seen = bubbled.clone();
//! dispatcher.add_event_listener(stage, Event::ADDED, ListenerOptions::default(), move |e, _| {
//!     seen.set(e.event_phase());
//!     e.prevent_default();
//! });
//!
//! let mut added = Event::new(Event::ADDED, true, true);
//! assert_eq!(dispatcher.dispatch_event(sprite, &mut added), Ok(false));
//! assert_eq!(bubbled.get(), Some(EventPhase::Bubbling));
//! assert_eq!(added.target(), Some(sprite));
//! ```
//!
//! ## Errors
//!
//! Dispatch fails with [`DispatchError`](crate::error::DispatchError) when a typed
//! listener receives another event class under its type string, or when the ancestor
//! walk exceeds the configured depth. Either way the event's dispatching state is
//! cleared before returning.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod error;
pub mod path;
pub mod types;
