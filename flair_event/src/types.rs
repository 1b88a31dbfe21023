// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by every event: phases, flags, and target handles.

/// Phases of event propagation.
///
/// The discriminants match the legacy `EventPhase` constants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum EventPhase {
    /// Root-to-parent traversal before the target is reached.
    Capturing = 1,
    /// The target node itself.
    AtTarget = 2,
    /// Parent-to-root traversal after the target.
    Bubbling = 3,
}

impl EventPhase {
    /// Legacy numeric value of this phase.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Non-owning handle to a dispatchable object.
///
/// Events store these for `target` and `current_target`. A handle never keeps the
/// object it names alive; resolving it back to an object is the owner's business
/// (for example a display list keyed by the same ids).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TargetId(u64);

impl TargetId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

bitflags::bitflags! {
    /// Construction-time and in-flight state of an [`Event`](crate::Event).
    ///
    /// `BUBBLES` and `CANCELABLE` are fixed when the event is constructed. The
    /// remaining bits are dispatch state and are not carried over by `clone`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        /// The event takes part in the bubbling phase.
        const BUBBLES                       = 0b0000_0001;
        /// Listeners may suppress the default behavior.
        const CANCELABLE                    = 0b0000_0010;
        /// A listener called `prevent_default` on a cancelable event.
        const DEFAULT_PREVENTED             = 0b0000_0100;
        /// No further nodes are visited after the current one.
        const PROPAGATION_STOPPED           = 0b0000_1000;
        /// No further listeners run, not even on the current node.
        const IMMEDIATE_PROPAGATION_STOPPED = 0b0001_0000;
        /// A dispatcher is currently walking the propagation chain.
        const DISPATCHING                   = 0b0010_0000;

        /// Bits that survive `clone`.
        const CONSTRUCTION = Self::BUBBLES.bits() | Self::CANCELABLE.bits();
        /// Bits cleared when a new dispatch starts.
        const STOPPED = Self::PROPAGATION_STOPPED.bits()
            | Self::IMMEDIATE_PROPAGATION_STOPPED.bits();
    }
}
