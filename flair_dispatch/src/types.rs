// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the dispatcher: tree lookups, propagation steps, and listener options.
//!
//! ## Overview
//!
//! These types describe the dispatcher's inputs and outputs.
//! They are used by [`Dispatcher`](crate::dispatcher::Dispatcher) and by
//! [`propagation_path`](crate::path::propagation_path).

use flair_event::{EventPhase, TargetId};

/// Look up the parent of a node to build the propagation chain.
///
/// This is the display list's only contribution to dispatch. The
/// [dispatcher](crate::dispatcher::Dispatcher) walks it from the target up to the root
/// once per dispatch.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A no‑op parent provider for objects outside any tree (loaders, timers).
///
/// Used by [`Dispatcher::new`](crate::dispatcher::Dispatcher::new). All calls to
/// [`ParentLookup::parent_of`] return `None`, so every chain is the target alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

impl<K, P: ParentLookup<K> + ?Sized> ParentLookup<K> for &P {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// One step of a propagation chain.
///
/// Produced by [`propagation_path`](crate::path::propagation_path), and walked by the
/// dispatcher in order: [`Capturing`](EventPhase::Capturing), then
/// [`AtTarget`](EventPhase::AtTarget), then [`Bubbling`](EventPhase::Bubbling).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Step {
    /// Propagation phase for this step.
    pub phase: EventPhase,
    /// Node whose listeners run in this step.
    pub node: TargetId,
}

impl Step {
    /// A capturing step.
    pub const fn capture(node: TargetId) -> Self {
        Self {
            phase: EventPhase::Capturing,
            node,
        }
    }

    /// The at-target step.
    pub const fn target(node: TargetId) -> Self {
        Self {
            phase: EventPhase::AtTarget,
            node,
        }
    }

    /// A bubbling step.
    pub const fn bubble(node: TargetId) -> Self {
        Self {
            phase: EventPhase::Bubbling,
            node,
        }
    }
}

/// Registration options for a listener.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ListenerOptions {
    /// Run during the capturing phase instead of at target and while bubbling.
    pub use_capture: bool,
    /// Higher priorities run first; equal priorities run in registration order.
    pub priority: i32,
}

impl ListenerOptions {
    /// Options for a capture-phase listener.
    pub const fn capture() -> Self {
        Self {
            use_capture: true,
            priority: 0,
        }
    }

    /// Same options with `priority`.
    pub const fn with_priority(self, priority: i32) -> Self {
        Self { priority, ..self }
    }
}

/// Handle to a registered listener, used to remove it.
///
/// Ids are never reused within one dispatcher.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ListenerId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_listen_at_target_and_bubble() {
        let o = ListenerOptions::default();
        assert!(!o.use_capture);
        assert_eq!(o.priority, 0);
    }

    #[test]
    fn capture_options_keep_priority_builder() {
        let o = ListenerOptions::capture().with_priority(5);
        assert!(o.use_capture);
        assert_eq!(o.priority, 5);
    }

    #[test]
    fn no_parent_has_no_parents() {
        assert_eq!(NoParent.parent_of(&TargetId::new(1)), None);
        let by_ref = &NoParent;
        assert_eq!(
            ParentLookup::<TargetId>::parent_of(&by_ref, &TargetId::new(1)),
            None
        );
    }
}
