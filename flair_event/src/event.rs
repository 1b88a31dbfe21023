// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The base event record and the capability trait every event implements.
//!
//! ## Lifecycle
//!
//! 1) A producer constructs an event (or acquires one from its [pool](crate::pool)).
//! 2) A dispatcher calls [`Event::begin_dispatch`], then [`Event::enter_step`] for each
//!    node of the propagation chain, and finally [`Event::end_dispatch`].
//! 3) Listeners read the fields and may call [`Event::stop_propagation`],
//!    [`Event::stop_immediate_propagation`], or [`Event::prevent_default`].
//! 4) The producer drops the event or releases it back to its pool.
//!
//! Only the dispatcher writes the phase and target fields. A nested dispatch started
//! from a listener works on its own event instance; see `flair_dispatch` for how a
//! redispatched in-flight event is cloned first.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::event_type::EventType;
use crate::format::EventFormatter;
use crate::types::{EventFlags, EventPhase, TargetId};

/// Capability interface shared by every concrete event.
///
/// Implementors embed an [`Event`] and expose it through [`base`](Self::base). The
/// `Display` impl is the legacy `toString`: the class name followed by every declared
/// field in a stable order (see [`EventFormatter`]).
pub trait EventObject: Any + EventClone + fmt::Debug + fmt::Display {
    /// The shared base record.
    fn base(&self) -> &Event;

    /// Mutable access to the shared base record.
    fn base_mut(&mut self) -> &mut Event;

    /// Legacy class name of the implementing type.
    fn class() -> &'static str
    where
        Self: Sized;

    /// Legacy class name, as printed by `Display`.
    fn class_name(&self) -> &'static str;

    /// Restore every field to the state the pool factory produces.
    ///
    /// Called by [`Pool::acquire`](crate::Pool::acquire) on recycled instances.
    /// Application code has no reason to call it.
    fn reset(&mut self);
}

/// Object-safe cloning for [`EventObject`].
///
/// Blanket-implemented for every `EventObject + Clone`; dispatchers use it to
/// redeliver an event they only hold as `dyn EventObject`.
pub trait EventClone {
    /// Clone into a new boxed event.
    fn clone_event(&self) -> Box<dyn EventObject>;
}

impl<T: EventObject + Clone> EventClone for T {
    fn clone_event(&self) -> Box<dyn EventObject> {
        Box::new(self.clone())
    }
}

impl dyn EventObject {
    /// Downcast to a concrete event type.
    pub fn downcast_ref<T: EventObject>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    /// Mutably downcast to a concrete event type.
    pub fn downcast_mut<T: EventObject>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }

    /// Returns `true` if the concrete type is `T`.
    pub fn is<T: EventObject>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Returns `true` if the event can be viewed as `T`: its concrete type is `T`, or
    /// `T` is the base [`Event`] every class embeds.
    pub fn has_shape<T: EventObject>(&self) -> bool {
        self.is::<T>() || TypeId::of::<T>() == TypeId::of::<Event>()
    }

    /// View the event as `T`; see [`has_shape`](Self::has_shape).
    pub fn shape_mut<T: EventObject>(&mut self) -> Option<&mut T> {
        if self.is::<T>() {
            return self.downcast_mut();
        }
        let base: &mut dyn Any = self.base_mut();
        base.downcast_mut()
    }
}

/// Capability required by the dispatcher hooks on [`Event`].
///
/// A dispatcher holds one for its lifetime. Listeners receive the event but never a
/// token, so they can read the phase and targets and call the stop and prevent
/// operations, but cannot rewrite dispatch state.
///
/// ```compile_fail
/// use flair_event::{Event, TargetId};
///
/// let mut e = Event::new("click", true, false);
/// e.begin_dispatch(TargetId::new(1));
/// ```
///
/// ```compile_fail
/// let forged = flair_event::event::DispatchToken(());
/// ```
#[derive(Debug)]
pub struct DispatchToken(());

impl DispatchToken {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

/// The base event record.
///
/// `event_type`, `bubbles`, and `cancelable` are fixed at construction. Phase and
/// target fields are written by the dispatcher only. Targets are [`TargetId`]
/// handles and never own the object they name.
#[derive(Debug, PartialEq, Eq)]
pub struct Event {
    event_type: Cow<'static, str>,
    flags: EventFlags,
    phase: Option<EventPhase>,
    target: Option<TargetId>,
    current_target: Option<TargetId>,
}

impl Event {
    /// Dispatched when a load or other long-running operation finishes.
    pub const COMPLETE: EventType<Self> = EventType::new("complete");
    /// Dispatched when a connection or stream opens.
    pub const OPEN: EventType<Self> = EventType::new("open");
    /// Dispatched when a value changes.
    pub const CHANGE: EventType<Self> = EventType::new("change");
    /// Dispatched when an operation is canceled.
    pub const CANCEL: EventType<Self> = EventType::new("cancel");
    /// Dispatched when an object is added to a container.
    pub const ADDED: EventType<Self> = EventType::new("added");
    /// Dispatched when an object is about to be removed from a container.
    pub const REMOVED: EventType<Self> = EventType::new("removed");

    /// Create an event. Phase, target, and current target start unset.
    ///
    /// Any type string is accepted; the domain is open.
    pub fn new(
        event_type: impl Into<Cow<'static, str>>,
        bubbles: bool,
        cancelable: bool,
    ) -> Self {
        let mut flags = EventFlags::empty();
        flags.set(EventFlags::BUBBLES, bubbles);
        flags.set(EventFlags::CANCELABLE, cancelable);
        Self {
            event_type: event_type.into(),
            flags,
            phase: None,
            target: None,
            current_target: None,
        }
    }

    /// Take an instance from this thread's pool and initialize it.
    #[cfg(feature = "std")]
    pub fn acquire(
        event_type: impl Into<Cow<'static, str>>,
        bubbles: bool,
        cancelable: bool,
    ) -> Self {
        let mut event = <Self as crate::PooledEvent>::acquire_pooled();
        event.init(event_type, bubbles, cancelable);
        event
    }

    /// Re-run construction on a recycled instance.
    #[cfg(feature = "std")]
    pub(crate) fn init(
        &mut self,
        event_type: impl Into<Cow<'static, str>>,
        bubbles: bool,
        cancelable: bool,
    ) {
        *self = Self::new(event_type, bubbles, cancelable);
    }

    /// The type string used for listener matching (case-sensitive).
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Whether the event takes part in the bubbling phase.
    #[inline]
    pub fn bubbles(&self) -> bool {
        self.flags.contains(EventFlags::BUBBLES)
    }

    /// Whether listeners may prevent the default behavior.
    #[inline]
    pub fn cancelable(&self) -> bool {
        self.flags.contains(EventFlags::CANCELABLE)
    }

    /// Current phase, or `None` before the first dispatch.
    #[inline]
    pub fn event_phase(&self) -> Option<EventPhase> {
        self.phase
    }

    /// The node the event was dispatched to.
    #[inline]
    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    /// The node whose listeners are currently running.
    #[inline]
    pub fn current_target(&self) -> Option<TargetId> {
        self.current_target
    }

    /// Raw flag bits.
    #[inline]
    pub fn flags(&self) -> EventFlags {
        self.flags
    }

    /// Whether a dispatcher is currently walking this event's propagation chain.
    #[inline]
    pub fn is_dispatching(&self) -> bool {
        self.flags.contains(EventFlags::DISPATCHING)
    }

    /// Whether `prevent_default` took effect.
    #[inline]
    pub fn is_default_prevented(&self) -> bool {
        self.flags.contains(EventFlags::DEFAULT_PREVENTED)
    }

    /// Whether propagation was stopped during the last dispatch.
    #[inline]
    pub fn is_propagation_stopped(&self) -> bool {
        self.flags.intersects(EventFlags::STOPPED)
    }

    /// Whether immediate propagation was stopped during the last dispatch.
    #[inline]
    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.flags.contains(EventFlags::IMMEDIATE_PROPAGATION_STOPPED)
    }

    /// Stop after the listeners of the current node have run.
    ///
    /// Has no effect outside a dispatch; repeated calls are no-ops.
    pub fn stop_propagation(&mut self) {
        if self.is_dispatching() {
            self.flags.insert(EventFlags::PROPAGATION_STOPPED);
        }
    }

    /// Stop now, skipping the remaining listeners of the current node as well.
    ///
    /// Has no effect outside a dispatch; repeated calls are no-ops.
    pub fn stop_immediate_propagation(&mut self) {
        if self.is_dispatching() {
            self.flags.insert(
                EventFlags::PROPAGATION_STOPPED | EventFlags::IMMEDIATE_PROPAGATION_STOPPED,
            );
        }
    }

    /// Suppress the default behavior. Only cancelable events honor this.
    pub fn prevent_default(&mut self) {
        if self.cancelable() {
            self.flags.insert(EventFlags::DEFAULT_PREVENTED);
        }
    }

    /// Dispatcher hook: start delivering to `target`.
    ///
    /// Sets the target, marks the event as dispatching, and clears the stop flags
    /// left by a previous dispatch.
    pub fn begin_dispatch(&mut self, _token: &DispatchToken, target: TargetId) {
        self.flags.remove(EventFlags::STOPPED);
        self.flags.insert(EventFlags::DISPATCHING);
        self.target = Some(target);
        self.current_target = None;
    }

    /// Dispatcher hook: listeners of `node` in `phase` are about to run.
    pub fn enter_step(&mut self, _token: &DispatchToken, phase: EventPhase, node: TargetId) {
        self.phase = Some(phase);
        self.current_target = Some(node);
    }

    /// Dispatcher hook: the walk is over.
    ///
    /// The target and last phase stay readable; the current target is cleared.
    pub fn end_dispatch(&mut self, _token: &DispatchToken) {
        self.flags.remove(EventFlags::DISPATCHING);
        self.current_target = None;
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new("", false, false)
    }
}

impl Clone for Event {
    /// Copies type, construction flags, phase, and targets.
    ///
    /// Stop and default-prevented state belongs to a dispatch, not to the event's
    /// identity, and starts clear on the copy.
    fn clone(&self) -> Self {
        Self {
            event_type: self.event_type.clone(),
            flags: self.flags & EventFlags::CONSTRUCTION,
            phase: self.phase,
            target: self.target,
            current_target: self.current_target,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EventFormatter::new(f, "Event")
            .string("type", self.event_type())
            .field("bubbles", &self.bubbles())
            .field("cancelable", &self.cancelable())
            .finish()
    }
}

impl EventObject for Event {
    fn base(&self) -> &Event {
        self
    }

    fn base_mut(&mut self) -> &mut Event {
        self
    }

    fn class() -> &'static str {
        "Event"
    }

    fn class_name(&self) -> &'static str {
        Self::class()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
