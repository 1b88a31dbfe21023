// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch errors.

use alloc::string::String;

use flair_event::TargetId;

/// Reasons a dispatch can abort.
///
/// Event construction, cloning, and pooling never fail; only the dispatcher has
/// caller-visible failure modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// A typed listener received an event of a different concrete class under its
    /// type string.
    #[error("listener for \"{event_type}\" expects {expected}, got {found}")]
    ListenerTypeMismatch {
        /// Type string being dispatched.
        event_type: String,
        /// Event type the listener was registered for.
        expected: &'static str,
        /// Class name of the dispatched event.
        found: &'static str,
    },
    /// The ancestor walk exceeded the configured depth limit.
    #[error("ancestry of {target:?} is deeper than {limit} nodes")]
    AncestryTooDeep {
        /// Dispatch target.
        target: TargetId,
        /// Configured limit.
        limit: usize,
    },
}
