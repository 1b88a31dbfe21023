// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flair Event: Flash-compatible event objects with allocation-free pooling.
//!
//! ## Overview
//!
//! Every runtime object in Flair (display objects, network loaders, timers) talks to its
//! listeners through event objects. This crate holds the leaf layer of that system:
//!
//! - [`Event`]: the base record shared by every event (type, bubbles/cancelable flags,
//!   phase, target handles) and the listener-facing stop/prevent operations.
//! - [`EventObject`]: the capability trait every concrete event implements
//!   (clone, `Display` as `toString`, pool reset).
//! - [`EventType`]: a string tag branded with the event shape its listeners receive.
//! - [`Pool`]: a free list that recycles event instances so high-frequency events do
//!   not allocate in steady state.
//! - [`HttpStatusEvent`]: the `httpStatus` / `httpResponseStatus` payload.
//!
//! The dispatcher that walks capture → target → bubble lives in `flair_dispatch`.
//! It drives the phase and target fields here through [`Event::begin_dispatch`],
//! [`Event::enter_step`], and [`Event::end_dispatch`]. Those hooks take a
//! [`DispatchToken`](event::DispatchToken) that listeners never see.
//!
//! ## Payload types
//!
//! A payload type embeds an [`Event`] and adds its own fields. It derives `Clone`, so a
//! clone always copies every payload field, and dereferences to its base so listeners can
//! call [`Event::stop_propagation`] directly.
//!
//! ```
//! use flair_event::{EventObject, HttpStatusEvent};
//!
//! let event = HttpStatusEvent::new(HttpStatusEvent::HTTP_STATUS, false, false, 404, true);
//! assert_eq!(event.status(), 404);
//! assert!(event.redirected());
//! assert_eq!(event.class_name(), "HTTPStatusEvent");
//! assert_eq!(
//!     event.to_string(),
//!     r#"[HTTPStatusEvent type="httpStatus" bubbles=false cancelable=false status=404 redirected=true responseURL=null responseHeaders=[]]"#
//! );
//! ```
//!
//! ## Pooling
//!
//! With the `std` feature (on by default) each event class owns a lazily created,
//! per-thread pool reachable through [`PooledEvent`]:
//!
//! ```
//! use flair_event::{HttpStatusEvent, PooledEvent};
//!
//! let event = HttpStatusEvent::acquire(HttpStatusEvent::HTTP_STATUS, false, false, 200, false);
//! assert_eq!(event.status(), 200);
//! // ... hand it to a dispatcher ...
//! event.release();
//!
//! let recycled = HttpStatusEvent::acquire_pooled();
//! assert_eq!(recycled.status(), 0);
//! ```
//!
//! Releasing moves the instance into the pool, so an event still borrowed by a running
//! listener cannot be recycled.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod event;
pub mod event_type;
mod format;
pub mod http_status;
pub mod pool;
pub mod types;

/// Entry points reserved for dispatcher implementations.
#[doc(hidden)]
pub mod dispatch_hooks {
    pub use crate::event::DispatchToken;

    /// Issue the capability the [`Event`](crate::Event) dispatch hooks require.
    pub const fn token() -> DispatchToken {
        DispatchToken::new()
    }
}

pub use event::{Event, EventClone, EventObject};
pub use event_type::{EventType, tag};
pub use format::EventFormatter;
pub use http_status::{HttpStatusEvent, UrlRequestHeader};
pub use pool::{EventPool, Pool};
#[cfg(feature = "std")]
pub use pool::PooledEvent;
pub use types::{EventFlags, EventPhase, TargetId};
