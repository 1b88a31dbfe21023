// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher implementation.
//!
//! ## Overview
//!
//! Owns the listener registry and delivers events along the chain built by
//! [`propagation_path`](crate::path::propagation_path).
//!
//! ## Invocation rules
//!
//! - Capture listeners run only while capturing. Other listeners run at target and
//!   while bubbling.
//! - Within a node, higher priority runs first; equal priority runs in registration
//!   order.
//! - A node's listeners are snapshotted when the walk reaches that node. Listeners
//!   removed mid-dispatch are skipped. Listeners added mid-dispatch run from the next
//!   visit on.
//! - `stop_propagation` lets the current node finish; `stop_immediate_propagation`
//!   returns right away.
//!
//! ## Re-entrancy
//!
//! Listeners receive `&Dispatcher` and may add or remove listeners or dispatch other
//! events. The registry is never borrowed while a listener runs. An event that already
//! has a target is delivered as a clone, so a nested dispatch of the outer event leaves
//! the outer walk's phase and target fields untouched.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use flair_event::dispatch_hooks::{self, DispatchToken};
use flair_event::{EventObject, EventPhase, EventType, TargetId};

use crate::error::DispatchError;
use crate::path;
use crate::types::{ListenerId, ListenerOptions, NoParent, ParentLookup, Step};

/// Default bound on the number of ancestors walked per dispatch.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

type Callback<P> = dyn Fn(&mut dyn EventObject, &Dispatcher<P>) -> Result<(), DispatchError>;

struct Listener<P> {
    id: ListenerId,
    options: ListenerOptions,
    removed: Cell<bool>,
    callback: Box<Callback<P>>,
}

struct Registry<P> {
    by_node: BTreeMap<TargetId, BTreeMap<String, Vec<Rc<Listener<P>>>>>,
    index: BTreeMap<ListenerId, (TargetId, String)>,
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self {
            by_node: BTreeMap::new(),
            index: BTreeMap::new(),
        }
    }
}

/// Tree-aware event dispatcher.
///
/// ## Usage
///
/// - Construct with [`Dispatcher::new`] for objects outside any tree, or with
///   [`Dispatcher::with_parent`] to walk a display list through a
///   [`ParentLookup`].
/// - Register listeners with [`Dispatcher::add_event_listener`] (typed by an
///   [`EventType`]) or [`Dispatcher::add_listener`] (any event class).
/// - Call [`Dispatcher::dispatch_event`] to deliver an event to a target.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use flair_dispatch::dispatcher::Dispatcher;
/// use flair_dispatch::types::{ListenerOptions, NoParent};
/// use flair_event::{HttpStatusEvent, TargetId};
///
/// let loader = TargetId::new(1);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let dispatcher: Dispatcher<NoParent> = Dispatcher::new();
/// let log = seen.clone();
/// dispatcher.add_event_listener(
///     loader,
///     HttpStatusEvent::HTTP_STATUS,
///     ListenerOptions::default(),
///     move |e, _| log.borrow_mut().push(e.status()),
/// );
///
/// let mut event = HttpStatusEvent::new(HttpStatusEvent::HTTP_STATUS, false, false, 404, false);
/// assert_eq!(dispatcher.dispatch_event(loader, &mut event), Ok(true));
/// assert_eq!(*seen.borrow(), [404]);
/// ```
pub struct Dispatcher<P = NoParent> {
    parents: P,
    hooks: DispatchToken,
    registry: RefCell<Registry<P>>,
    next_id: Cell<u64>,
    max_depth: usize,
}

impl<P> fmt::Debug for Dispatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self
            .registry
            .try_borrow()
            .map(|r| r.index.len())
            .ok();
        f.debug_struct("Dispatcher")
            .field("listeners", &listeners)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<P: ParentLookup<TargetId> + Default> Dispatcher<P> {
    /// Create a dispatcher with a default parent lookup.
    pub fn new() -> Self {
        Self::with_parent(P::default())
    }
}

impl<P: ParentLookup<TargetId> + Default> Default for Dispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ParentLookup<TargetId>> Dispatcher<P> {
    /// Create a dispatcher with an explicit parent lookup provider.
    pub fn with_parent(parents: P) -> Self {
        Self {
            parents,
            hooks: dispatch_hooks::token(),
            registry: RefCell::new(Registry::default()),
            next_id: Cell::new(0),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// The parent lookup provider.
    pub fn parents(&self) -> &P {
        &self.parents
    }

    /// Bound the number of ancestors walked per dispatch.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// The current ancestor bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Register a listener for events of type `event_type` on `node`.
    ///
    /// A listener for the base [`Event`](flair_event::Event) shape receives every event
    /// class through its base record. Otherwise, if an event of another concrete class
    /// is dispatched under the same type string, the dispatch fails with
    /// [`DispatchError::ListenerTypeMismatch`].
    pub fn add_event_listener<T, F>(
        &self,
        node: TargetId,
        event_type: EventType<T>,
        options: ListenerOptions,
        listener: F,
    ) -> ListenerId
    where
        P: 'static,
        T: EventObject,
        F: Fn(&mut T, &Self) + 'static,
    {
        let expected = T::class();
        let callback = move |event: &mut dyn EventObject, d: &Self| -> Result<(), DispatchError> {
            if !event.has_shape::<T>() {
                tracing::warn!(
                    event_type = event.base().event_type(),
                    expected,
                    found = event.class_name(),
                    "listener type mismatch"
                );
                return Err(DispatchError::ListenerTypeMismatch {
                    event_type: event.base().event_type().to_owned(),
                    expected,
                    found: event.class_name(),
                });
            }
            if let Some(event) = event.shape_mut::<T>() {
                listener(event, d);
            }
            Ok(())
        };
        self.insert(node, event_type.as_str().to_owned(), options, Box::new(callback))
    }

    /// Register a listener that accepts any event class.
    pub fn add_listener<F>(
        &self,
        node: TargetId,
        event_type: &str,
        options: ListenerOptions,
        listener: F,
    ) -> ListenerId
    where
        P: 'static,
        F: Fn(&mut dyn EventObject, &Self) + 'static,
    {
        let callback = move |event: &mut dyn EventObject, d: &Self| -> Result<(), DispatchError> {
            listener(event, d);
            Ok(())
        };
        self.insert(node, event_type.to_owned(), options, Box::new(callback))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    ///
    /// A listener removed during a dispatch does not run for the rest of it.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut reg = self.registry.borrow_mut();
        let Some((node, event_type)) = reg.index.remove(&id) else {
            return false;
        };
        let Some(types) = reg.by_node.get_mut(&node) else {
            return true;
        };
        if let Some(list) = types.get_mut(&event_type) {
            if let Some(pos) = list.iter().position(|l| l.id == id) {
                list.remove(pos).removed.set(true);
            }
            if list.is_empty() {
                types.remove(&event_type);
            }
        }
        if types.is_empty() {
            reg.by_node.remove(&node);
        }
        true
    }

    /// Remove every listener registered on `node`. Returns how many were removed.
    pub fn remove_all(&self, node: TargetId) -> usize {
        let mut reg = self.registry.borrow_mut();
        let Some(types) = reg.by_node.remove(&node) else {
            return 0;
        };
        let mut count = 0;
        for listener in types.values().flatten() {
            listener.removed.set(true);
            reg.index.remove(&listener.id);
            count += 1;
        }
        count
    }

    /// Whether `node` itself has listeners for `event_type`.
    pub fn has_event_listener(&self, node: TargetId, event_type: &str) -> bool {
        self.registry
            .borrow()
            .by_node
            .get(&node)
            .is_some_and(|types| types.contains_key(event_type))
    }

    /// Whether dispatching `event_type` to `node` would reach any listener, on the
    /// node or on an ancestor.
    pub fn will_trigger(&self, node: TargetId, event_type: &str) -> bool {
        if self.has_event_listener(node, event_type) {
            return true;
        }
        match path::ancestors(node, &self.parents, self.max_depth) {
            Ok(ancestors) => ancestors
                .into_iter()
                .any(|a| self.has_event_listener(a, event_type)),
            Err(_) => false,
        }
    }

    /// The chain a dispatch to `target` would walk right now.
    pub fn propagation_path(
        &self,
        target: TargetId,
        bubbles: bool,
    ) -> Result<Vec<Step>, DispatchError> {
        path::propagation_path(target, &self.parents, bubbles, self.max_depth)
    }

    /// Deliver `event` to `target` through capture, target, and bubble phases.
    ///
    /// Returns `Ok(false)` if a listener prevented the default behavior of a cancelable
    /// event, `Ok(true)` otherwise. If `event` already has a target, a clone is
    /// delivered and `event` itself is left as it was.
    pub fn dispatch_event<E: EventObject>(
        &self,
        target: TargetId,
        event: &mut E,
    ) -> Result<bool, DispatchError> {
        self.dispatch_dyn(target, event)
    }

    /// [`dispatch_event`](Self::dispatch_event) for an event held as a trait object.
    pub fn dispatch_dyn(
        &self,
        target: TargetId,
        event: &mut dyn EventObject,
    ) -> Result<bool, DispatchError> {
        if event.base().target().is_some() {
            let mut copy = event.clone_event();
            return self.walk(target, &mut *copy);
        }
        self.walk(target, event)
    }

    fn insert(
        &self,
        node: TargetId,
        event_type: String,
        options: ListenerOptions,
        callback: Box<Callback<P>>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let listener = Rc::new(Listener {
            id,
            options,
            removed: Cell::new(false),
            callback,
        });

        let mut reg = self.registry.borrow_mut();
        let list = reg
            .by_node
            .entry(node)
            .or_default()
            .entry(event_type.clone())
            .or_default();
        // Stable: after every listener with the same or higher priority.
        let pos = list
            .iter()
            .position(|l| l.options.priority < options.priority)
            .unwrap_or(list.len());
        list.insert(pos, listener);
        reg.index.insert(id, (node, event_type));
        id
    }

    fn snapshot(
        &self,
        node: TargetId,
        event_type: &str,
        phase: EventPhase,
    ) -> Vec<Rc<Listener<P>>> {
        let reg = self.registry.borrow();
        let Some(list) = reg.by_node.get(&node).and_then(|t| t.get(event_type)) else {
            return Vec::new();
        };
        let capturing = phase == EventPhase::Capturing;
        list.iter()
            .filter(|l| l.options.use_capture == capturing)
            .cloned()
            .collect()
    }

    fn walk(&self, target: TargetId, event: &mut dyn EventObject) -> Result<bool, DispatchError> {
        let steps = self.propagation_path(target, event.base().bubbles())?;
        tracing::trace!(
            event_type = event.base().event_type(),
            target = target.get(),
            steps = steps.len(),
            "dispatch"
        );

        event.base_mut().begin_dispatch(&self.hooks, target);
        let result = self.run_steps(&steps, event);
        event.base_mut().end_dispatch(&self.hooks);

        if let Err(err) = &result {
            tracing::debug!(%err, "dispatch aborted");
        }
        result.map(|()| !event.base().is_default_prevented())
    }

    fn run_steps(&self, steps: &[Step], event: &mut dyn EventObject) -> Result<(), DispatchError> {
        for step in steps {
            if event.base().is_propagation_stopped() {
                tracing::trace!(node = step.node.get(), "propagation stopped");
                break;
            }
            event.base_mut().enter_step(&self.hooks, step.phase, step.node);
            let listeners = self.snapshot(step.node, event.base().event_type(), step.phase);
            tracing::trace!(
                phase = step.phase.as_u8(),
                node = step.node.get(),
                listeners = listeners.len(),
                "step"
            );
            for listener in &listeners {
                if listener.removed.get() {
                    continue;
                }
                (listener.callback)(event, self)?;
                if event.base().is_immediate_propagation_stopped() {
                    break;
                }
            }
        }
        Ok(())
    }
}
