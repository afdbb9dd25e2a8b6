//! Factory functions for the common outcome shapes.
//!
//! These cover the recurring constructions so call sites don't reach for
//! the [`FailureBuilder`](crate::FailureBuilder) every time: plain and
//! caused generic failures, typed failures rendered from a
//! [`FailureType`]'s own template, and the two success shapes.
//!
//! # Examples
//!
//! ```
//! use outcome::{outcomes, Outcome};
//!
//! fn register(name: &str) -> Outcome<bool> {
//!     if name.is_empty() {
//!         return outcomes::detailed_failure("Registration failed", "empty name for {0}", &[&"user"]);
//!     }
//!     outcomes::succeeded()
//! }
//!
//! assert!(register("ada").is_success());
//! assert_eq!(
//!     register("").as_failure().detail(),
//!     "empty name for user",
//! );
//! ```

use core::error::Error;
use core::fmt::Display;

use crate::traits::FailureType;
use crate::types::alloc_type::String;
use crate::types::{Failure, Outcome, SUCCEEDED};

/// The canonical "it happened" success.
///
/// Backed by the shared [`SUCCEEDED`] constant; repeated calls yield the
/// same value, nothing is reallocated.
pub fn succeeded() -> Outcome<bool> {
    Outcome::Success(SUCCEEDED)
}

/// A success carrying `value`.
pub fn success<V>(value: V) -> Outcome<V> {
    Outcome::success(value)
}

/// A generic failure with no further information.
pub fn generic_failure<V>() -> Outcome<V> {
    Failure::generic().titled("Generic failure").into_outcome()
}

/// A generic failure with just a title.
pub fn titled_failure<V, S: Into<String>>(title: S) -> Outcome<V> {
    Failure::generic().titled(title).into_outcome()
}

/// A generic failure with a title and a detail rendered from `template`
/// and `args`.
#[track_caller]
pub fn detailed_failure<V, S: Into<String>>(
    title: S,
    template: &str,
    args: &[&dyn Display],
) -> Outcome<V> {
    Failure::generic()
        .titled(title)
        .detailed(template, args)
        .into_outcome()
}

/// A generic failure wrapping an underlying error.
pub fn caused_failure<V, E>(cause: E) -> Outcome<V>
where
    E: Error + Send + Sync + 'static,
{
    Failure::from_cause(cause).into_outcome()
}

/// A generic failure wrapping an underlying error, with a title.
pub fn caused_titled_failure<V, E, S>(cause: E, title: S) -> Outcome<V>
where
    E: Error + Send + Sync + 'static,
    S: Into<String>,
{
    Failure::generic()
        .titled(title)
        .caused_by(cause)
        .into_outcome()
}

/// A generic failure wrapping an underlying error, with a title and a
/// rendered detail.
#[track_caller]
pub fn caused_detailed_failure<V, E, S>(
    cause: E,
    title: S,
    template: &str,
    args: &[&dyn Display],
) -> Outcome<V>
where
    E: Error + Send + Sync + 'static,
    S: Into<String>,
{
    Failure::generic()
        .titled(title)
        .detailed(template, args)
        .caused_by(cause)
        .into_outcome()
}

/// A failure of the given category, titled with the category's label and
/// detailed by rendering the category's own template with `args`.
///
/// # Examples
///
/// ```
/// use outcome::{outcomes, FailureType};
///
/// #[derive(Debug)]
/// struct StaleRead;
///
/// impl FailureType for StaleRead {
///     fn title(&self) -> &str {
///         "stale-read"
///     }
///
///     fn template(&self) -> &str {
///         "replica lagging by {0} entries"
///     }
/// }
///
/// static STALE_READ: StaleRead = StaleRead;
///
/// let outcome = outcomes::typed_failure::<()>(&STALE_READ, &[&120]);
/// let failure = outcome.as_failure();
/// assert_eq!(failure.title(), "stale-read");
/// assert_eq!(failure.detail(), "replica lagging by 120 entries");
/// ```
#[track_caller]
pub fn typed_failure<V>(kind: &'static dyn FailureType, args: &[&dyn Display]) -> Outcome<V> {
    Failure::of(kind)
        .titled(kind.title())
        .detailed(kind.template(), args)
        .into_outcome()
}
