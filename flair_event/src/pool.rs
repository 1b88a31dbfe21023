// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable-instance pools for high-frequency events.
//!
//! ## Overview
//!
//! A [`Pool`] keeps a free list of released instances together with a factory and a
//! reset function. [`Pool::acquire`] hands out a recycled instance after resetting it,
//! or a fresh factory instance when the free list is empty. [`Pool::release`] takes the
//! instance back by value.
//!
//! ## Policies
//!
//! - Free-list order is LIFO, so the most recently released instance is reused first.
//! - The pool grows on demand and never shrinks; steady-state size is bounded by the
//!   peak number of events in flight at once.
//! - Release moves ownership into the pool. An event still borrowed by a running
//!   listener cannot be released, so recycling an in-flight event does not compile.
//! - A pool is not `Sync`-shared. With the `std` feature, [`PooledEvent`] gives each
//!   event class one lazily created pool per thread.
//!
//! ```
//! use flair_event::{Event, EventObject, Pool};
//!
//! let mut pool = Pool::new(Event::default, Event::reset);
//! let first = pool.acquire();
//! assert_eq!(pool.created(), 1);
//! pool.release(first);
//! let again = pool.acquire();
//! assert_eq!(again, Event::default());
//! assert_eq!(pool.created(), 1);
//! ```

use alloc::vec::Vec;
use core::fmt;

/// A pool whose factory and reset are plain function pointers.
///
/// This is the shape of the per-class pools behind [`PooledEvent`].
pub type EventPool<T> = Pool<T, fn() -> T, fn(&mut T)>;

/// A free list of reusable `T` plus the closures that build and reset them.
pub struct Pool<T, F = fn() -> T, R = fn(&mut T)> {
    free: Vec<T>,
    factory: F,
    reset: R,
    created: usize,
}

impl<T, F, R> fmt::Debug for Pool<T, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("free", &self.free.len())
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

impl<T, F, R> Pool<T, F, R>
where
    F: Fn() -> T,
    R: Fn(&mut T),
{
    /// Create an empty pool. Allocates nothing.
    pub const fn new(factory: F, reset: R) -> Self {
        Self {
            free: Vec::new(),
            factory,
            reset,
            created: 0,
        }
    }

    /// Take an instance out of the pool.
    ///
    /// A recycled instance is reset first. A factory instance is returned as built,
    /// since the factory output is already in its default state.
    pub fn acquire(&mut self) -> T {
        match self.free.pop() {
            Some(mut item) => {
                (self.reset)(&mut item);
                item
            }
            None => {
                self.created += 1;
                tracing::debug!(created = self.created, "event pool grew");
                (self.factory)()
            }
        }
    }

    /// Return an instance to the free list.
    pub fn release(&mut self, item: T) {
        self.free.push(item);
    }

    /// Build `count` factory instances ahead of a burst.
    pub fn prewarm(&mut self, count: usize) {
        self.free.reserve(count);
        for _ in 0..count {
            self.created += 1;
            self.free.push((self.factory)());
        }
    }

    /// Number of instances waiting on the free list.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Number of instances the factory has built over the pool's lifetime.
    pub fn created(&self) -> usize {
        self.created
    }
}

/// Event classes with a process-wide pool.
///
/// Each implementor owns one pool per thread, created on first use. The pool is only
/// borrowed for the duration of a single call, so listeners may acquire and release
/// events while another event from the same pool is being dispatched.
#[cfg(feature = "std")]
pub trait PooledEvent: crate::EventObject + Sized {
    /// Run `f` with this class's pool.
    ///
    /// # Panics
    ///
    /// If `f` re-enters `with_pool` for the same class.
    fn with_pool<O>(f: impl FnOnce(&mut EventPool<Self>) -> O) -> O;

    /// Take a default-state instance from this class's pool.
    fn acquire_pooled() -> Self {
        Self::with_pool(|pool| pool.acquire())
    }

    /// Hand this instance back to its class's pool.
    fn release(self) {
        Self::with_pool(|pool| pool.release(self));
    }
}

/// Implement [`PooledEvent`] for an event type with a per-thread pool.
///
/// `$factory` builds a default instance; `$reset` restores one.
#[cfg(feature = "std")]
macro_rules! thread_local_pool {
    ($ty:ty, $factory:expr, $reset:expr) => {
        impl $crate::pool::PooledEvent for $ty {
            fn with_pool<O>(f: impl FnOnce(&mut $crate::pool::EventPool<Self>) -> O) -> O {
                std::thread_local! {
                    static POOL: core::cell::RefCell<$crate::pool::EventPool<$ty>> =
                        core::cell::RefCell::new($crate::pool::Pool::new(
                            $factory as fn() -> $ty,
                            $reset as fn(&mut $ty),
                        ));
                }
                POOL.with_borrow_mut(f)
            }
        }
    };
}

#[cfg(feature = "std")]
pub(crate) use thread_local_pool;

#[cfg(feature = "std")]
thread_local_pool!(
    crate::Event,
    crate::Event::default,
    <crate::Event as crate::EventObject>::reset
);
