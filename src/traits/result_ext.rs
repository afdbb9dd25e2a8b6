//! Extension trait for turning ordinary `Result`s into outcomes.
//!
//! A more natural spelling than `Outcome::from_result` at call sites that
//! already hold a `Result`, in the same way `.map_err()` chains are usually
//! written postfix.

use core::error::Error;

use crate::types::alloc_type::String;
use crate::types::{Failure, Outcome};

/// Postfix conversion from `Result` into [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome::traits::ResultOutcomeExt;
///
/// let ok = "42".parse::<i32>().into_outcome();
/// assert!(ok.is_success());
///
/// let err = "x".parse::<i32>().outcome_titled("Parsing port");
/// assert_eq!(err.as_failure().title(), "Parsing port");
/// assert!(err.as_failure().cause().is_some());
/// ```
pub trait ResultOutcomeExt<V> {
    /// Converts into an outcome, attaching any error as the failure's
    /// cause.
    fn into_outcome(self) -> Outcome<V>;

    /// Converts into an outcome, titling the failure with the operation
    /// that was being performed.
    fn outcome_titled<S: Into<String>>(self, title: S) -> Outcome<V>;
}

impl<V, E> ResultOutcomeExt<V> for Result<V, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_outcome(self) -> Outcome<V> {
        Outcome::from_result(self)
    }

    #[inline]
    fn outcome_titled<S: Into<String>>(self, title: S) -> Outcome<V> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Failure::generic()
                .titled(title)
                .caused_by(error)
                .into_outcome(),
        }
    }
}
