//! Conversions between outcomes and the surrounding standard types.
//!
//! `From` impls for the obvious lossless directions; the lossy directions
//! live on [`Outcome`] itself ([`get_potential`](Outcome::get_potential),
//! [`to_result`](Outcome::to_result)).
//!
//! # Examples
//!
//! ```
//! use outcome::{Failure, Outcome, Success};
//!
//! let from_success: Outcome<i32> = Success::new(7).into();
//! assert!(from_success.is_success());
//!
//! let from_result: Outcome<i32> = "7".parse::<i32>().into();
//! assert_eq!(from_result, from_success);
//!
//! let back: Result<i32, Failure> = from_result.into();
//! assert_eq!(back, Ok(7));
//! ```

use core::error::Error;

use crate::types::{Failure, Outcome, Success};

impl<V> From<Success<V>> for Outcome<V> {
    #[inline]
    fn from(success: Success<V>) -> Self {
        success.into_outcome()
    }
}

impl<V> From<Failure> for Outcome<V> {
    #[inline]
    fn from(failure: Failure) -> Self {
        failure.into_outcome()
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<V> From<Outcome<V>> for Result<V, Failure> {
    #[inline]
    fn from(outcome: Outcome<V>) -> Self {
        outcome.to_result()
    }
}
