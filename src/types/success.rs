//! The succeeding variant of an outcome.

use crate::types::Outcome;

/// An immutable wrapper of a produced value.
///
/// A success always holds a value; Rust's type system rules out the absent
/// case at construction. Operations whose result is "it happened" rather
/// than a computed value use the shared [`SUCCEEDED`] constant.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Success<V> {
    value: V,
}

/// The canonical "it happened" success.
///
/// A process-wide constant, never reallocated; every zero-argument success
/// is this same value.
pub const SUCCEEDED: Success<bool> = Success::new(true);

impl<V> Success<V> {
    /// Wraps a value.
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    /// Borrows the contained value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Unwraps the contained value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Lifts this success into an outcome.
    pub fn into_outcome(self) -> Outcome<V> {
        Outcome::Success(self)
    }
}
