// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed event type tags.
//!
//! An [`EventType<T>`] is a type string that also records, at the type level, which
//! event shape `T` listeners of that string receive. At runtime it is exactly the
//! string: two tags are equal when their strings are equal, whatever their `T`.
//!
//! ```
//! use flair_event::{EventType, HttpStatusEvent, tag};
//!
//! let status: EventType<HttpStatusEvent> = tag("httpStatus");
//! assert_eq!(status, "httpStatus");
//! assert_eq!(status, HttpStatusEvent::HTTP_STATUS);
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

/// A type string branded with the event shape `T` its listeners expect.
pub struct EventType<T: ?Sized> {
    name: Cow<'static, str>,
    _payload: PhantomData<fn() -> T>,
}

/// Build a tag from a static string.
///
/// Same as [`EventType::new`]; reads better at call sites that only need the tag.
pub const fn tag<T: ?Sized>(value: &'static str) -> EventType<T> {
    EventType::new(value)
}

impl<T: ?Sized> EventType<T> {
    /// Build a tag from a static string.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _payload: PhantomData,
        }
    }

    /// Build a tag from a runtime string (producer-defined event types).
    pub fn from_string(name: String) -> Self {
        Self {
            name: Cow::Owned(name),
            _payload: PhantomData,
        }
    }

    /// The underlying type string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume the tag, returning the type string.
    pub fn into_name(self) -> Cow<'static, str> {
        self.name
    }
}

impl<T: ?Sized> Clone for EventType<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for EventType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventType").field(&self.as_str()).finish()
    }
}

impl<T: ?Sized> fmt::Display for EventType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: ?Sized> Deref for EventType<T> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<T: ?Sized> AsRef<str> for EventType<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: ?Sized, U: ?Sized> PartialEq<EventType<U>> for EventType<T> {
    fn eq(&self, other: &EventType<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: ?Sized> Eq for EventType<T> {}

impl<T: ?Sized> PartialEq<str> for EventType<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: ?Sized> PartialEq<&str> for EventType<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: ?Sized> Hash for EventType<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<T: ?Sized> From<&'static str> for EventType<T> {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl<T: ?Sized> From<String> for EventType<T> {
    fn from(name: String) -> Self {
        Self::from_string(name)
    }
}

impl<T: ?Sized> From<EventType<T>> for Cow<'static, str> {
    fn from(tag: EventType<T>) -> Self {
        tag.into_name()
    }
}
