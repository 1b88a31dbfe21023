// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP status events.
//!
//! Network objects dispatch an [`HttpStatusEvent`] when a request returns an HTTP status
//! code. It is always sent before the matching error or completion event and does not by
//! itself indicate an error. When the networking stack cannot report a status, the status
//! is `0`.
//!
//! There are two types:
//!
//! - [`HttpStatusEvent::HTTP_STATUS`] (`"httpStatus"`): status and redirect flag only.
//! - [`HttpStatusEvent::HTTP_RESPONSE_STATUS`] (`"httpResponseStatus"`): delivered before
//!   any response data, and also carries the response URL and headers.
//!
//! Both default to `bubbles = false` and `cancelable = false`; there is no default
//! behavior to cancel.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::event::{Event, EventObject};
use crate::event_type::EventType;
use crate::format::EventFormatter;

/// One response header: a name and a value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlRequestHeader {
    /// Header name, for example `Content-Type`.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl UrlRequestHeader {
    /// Create a header pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for UrlRequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// An HTTP status report from a network object.
///
/// `status` is fixed at construction and has no setter. The producer may fill in the
/// redirect flag, response URL, and headers before handing the event to a dispatcher.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpStatusEvent {
    base: Event,
    status: u16,
    redirected: bool,
    response_url: Option<String>,
    response_headers: Vec<UrlRequestHeader>,
}

impl HttpStatusEvent {
    /// Type of the event delivered before any response data, with URL and headers.
    pub const HTTP_RESPONSE_STATUS: EventType<Self> = EventType::new("httpResponseStatus");
    /// Type of the plain status event.
    pub const HTTP_STATUS: EventType<Self> = EventType::new("httpStatus");

    /// Create a status event.
    pub fn new(
        event_type: impl Into<Cow<'static, str>>,
        bubbles: bool,
        cancelable: bool,
        status: u16,
        redirected: bool,
    ) -> Self {
        Self {
            base: Event::new(event_type, bubbles, cancelable),
            status,
            redirected,
            response_url: None,
            response_headers: Vec::new(),
        }
    }

    /// Take an instance from this thread's pool and initialize it.
    ///
    /// Equivalent to [`new`](Self::new), but reuses a released instance (and its
    /// header buffer) when one is available.
    #[cfg(feature = "std")]
    pub fn acquire(
        event_type: impl Into<Cow<'static, str>>,
        bubbles: bool,
        cancelable: bool,
        status: u16,
        redirected: bool,
    ) -> Self {
        let mut event = <Self as crate::PooledEvent>::acquire_pooled();
        event.base.init(event_type, bubbles, cancelable);
        event.status = status;
        event.redirected = redirected;
        event
    }

    /// The HTTP status code returned by the server, or `0` when none was available.
    ///
    /// For example, `404` means the server found nothing matching the requested URI.
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the request was redirected.
    #[inline]
    pub fn redirected(&self) -> bool {
        self.redirected
    }

    /// Set the redirect flag.
    pub fn set_redirected(&mut self, redirected: bool) {
        self.redirected = redirected;
    }

    /// The URL the response came from. After a redirect this differs from the
    /// request URL. `None` for `httpStatus` events.
    #[inline]
    pub fn response_url(&self) -> Option<&str> {
        self.response_url.as_deref()
    }

    /// Set the response URL.
    pub fn set_response_url(&mut self, url: Option<String>) {
        self.response_url = url;
    }

    /// The response headers, in the order the response listed them.
    #[inline]
    pub fn response_headers(&self) -> &[UrlRequestHeader] {
        &self.response_headers
    }

    /// Replace the response headers, reusing the existing buffer.
    pub fn set_response_headers(&mut self, headers: impl IntoIterator<Item = UrlRequestHeader>) {
        self.response_headers.clear();
        self.response_headers.extend(headers);
    }

    /// Append one response header.
    pub fn push_response_header(&mut self, header: UrlRequestHeader) {
        self.response_headers.push(header);
    }
}

impl Deref for HttpStatusEvent {
    type Target = Event;

    fn deref(&self) -> &Event {
        &self.base
    }
}

impl DerefMut for HttpStatusEvent {
    fn deref_mut(&mut self) -> &mut Event {
        &mut self.base
    }
}

impl fmt::Display for HttpStatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EventFormatter::new(f, self.class_name())
            .string("type", self.event_type())
            .field("bubbles", &self.bubbles())
            .field("cancelable", &self.cancelable())
            .field("status", &self.status)
            .field("redirected", &self.redirected)
            .opt_string("responseURL", self.response_url())
            .list("responseHeaders", &self.response_headers)
            .finish()
    }
}

impl EventObject for HttpStatusEvent {
    fn base(&self) -> &Event {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Event {
        &mut self.base
    }

    fn class() -> &'static str {
        "HTTPStatusEvent"
    }

    fn class_name(&self) -> &'static str {
        Self::class()
    }

    fn reset(&mut self) {
        self.base.reset();
        self.status = 0;
        self.redirected = false;
        self.response_url = None;
        // Keep the allocation for the next response.
        self.response_headers.clear();
    }
}

#[cfg(feature = "std")]
crate::pool::thread_local_pool!(
    HttpStatusEvent,
    HttpStatusEvent::default,
    <HttpStatusEvent as EventObject>::reset
);
