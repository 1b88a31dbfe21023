// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `toString` formatting shared by event `Display` impls.

use core::fmt;

/// Builder for the legacy `[ClassName field=value ...]` event representation.
///
/// Fields are written in call order. String values are double-quoted and absent
/// values print as `null`.
///
/// ```
/// use core::fmt;
/// use flair_event::EventFormatter;
///
/// struct Ping(u32);
/// impl fmt::Display for Ping {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         EventFormatter::new(f, "Ping")
///             .string("type", "ping")
///             .field("seq", &self.0)
///             .finish()
///     }
/// }
/// assert_eq!(Ping(3).to_string(), r#"[Ping type="ping" seq=3]"#);
/// ```
#[must_use = "call `finish` to close the representation"]
pub struct EventFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl fmt::Debug for EventFormatter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventFormatter")
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl<'a, 'b> EventFormatter<'a, 'b> {
    /// Start a representation for `class_name`.
    pub fn new(f: &'a mut fmt::Formatter<'b>, class_name: &str) -> Self {
        let result = write!(f, "[{class_name}");
        Self { f, result }
    }

    /// Append an unquoted `name=value` pair.
    pub fn field(mut self, name: &str, value: &dyn fmt::Display) -> Self {
        if self.result.is_ok() {
            self.result = write!(self.f, " {name}={value}");
        }
        self
    }

    /// Append a `name="value"` pair.
    pub fn string(mut self, name: &str, value: &str) -> Self {
        if self.result.is_ok() {
            self.result = write!(self.f, " {name}=\"{value}\"");
        }
        self
    }

    /// Append a quoted string, or `null` when absent.
    pub fn opt_string(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.string(name, value),
            None => self.field(name, &"null"),
        }
    }

    /// Append `name=[a, b, ...]`.
    pub fn list<T: fmt::Display>(mut self, name: &str, items: &[T]) -> Self {
        if self.result.is_ok() {
            self.result = write_list(self.f, name, items);
        }
        self
    }

    /// Close the representation.
    pub fn finish(self) -> fmt::Result {
        self.result?;
        self.f.write_str("]")
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    items: &[T],
) -> fmt::Result {
    write!(f, " {name}=[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
