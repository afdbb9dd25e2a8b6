//! The fallible-supplier adapter.
//!
//! [`Fallible`] represents "a computation that yields a value or signals
//! failure". It is blanket-implemented for every closure returning a
//! `Result` whose error type is an ordinary [`Error`](core::error::Error),
//! erasing that concrete type into the uniform [`Cause`] consumed at the
//! [`Outcome::attempt`](crate::Outcome::attempt) boundary. Call sites that
//! only need a zero-argument value-producing contract stay decoupled from
//! the concrete ways their suppliers can fail.

use core::error::Error;

use crate::types::alloc_type::Arc;
use crate::types::Cause;

/// A computation that produces a value or signals failure.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32> {
///     Outcome::attempt(|| input.parse::<i32>())
/// }
///
/// assert_eq!(parse("42"), Outcome::success(42));
/// assert!(parse("not a number").is_failure());
/// ```
pub trait Fallible<V> {
    /// Runs the computation, erasing any error into a [`Cause`].
    fn supply(self) -> Result<V, Cause>;
}

impl<V, F, E> Fallible<V> for F
where
    F: FnOnce() -> Result<V, E>,
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn supply(self) -> Result<V, Cause> {
        (self)().map_err(|e| Arc::new(e) as Cause)
    }
}
