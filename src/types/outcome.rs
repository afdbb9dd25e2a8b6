//! The outcome sum type.

use core::error::Error;

use crate::traits::Fallible;
use crate::types::{Failure, Success};

/// The result of an operation: a [`Success`] carrying a value or a
/// [`Failure`] carrying structured error information.
///
/// `Outcome` replaces branching on error conditions with an explicit,
/// composable value. An outcome's variant is fixed at construction and
/// never changes; every transformation ([`map`](Outcome::map),
/// [`and_then`](Outcome::and_then), [`or_else`](Outcome::or_else)) produces
/// a new outcome. Once an outcome is a failure it passes unchanged through
/// the whole chain: first failure wins, nothing is aggregated.
///
/// The only place errors cross into the outcome world is the
/// [`attempt`](Outcome::attempt) boundary. `map` and `and_then` never catch
/// anything; a panic inside a transformation propagates to the caller.
///
/// # Examples
///
/// ```
/// use outcome::{outcomes, Outcome};
///
/// fn half(n: i32) -> Outcome<i32> {
///     if n % 2 == 0 {
///         outcomes::success(n / 2)
///     } else {
///         outcomes::titled_failure("Odd input")
///     }
/// }
///
/// let result = outcomes::success(8).and_then(half).map(|n| n + 1);
/// assert_eq!(result, outcomes::success(5));
///
/// let failed = outcomes::success(7).and_then(half).map(|n| n + 1);
/// assert!(failed.is_failure());
/// assert_eq!(failed.as_failure().title(), "Odd input");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome<V> {
    /// The operation produced a value.
    Success(Success<V>),
    /// The operation failed.
    Failure(Failure),
}

impl<V> Outcome<V> {
    /// Wraps a value as a successful outcome.
    pub const fn success(value: V) -> Self {
        Self::Success(Success::new(value))
    }

    /// Wraps a failure as a failed outcome.
    pub const fn failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }

    /// Runs a fallible computation, capturing its error as a failure.
    ///
    /// This is the single sanctioned boundary between `Result`-returning
    /// code and the outcome world: `Ok` becomes a success, `Err` becomes a
    /// failure with the error attached as its cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Outcome::success(42));
    ///
    /// let failed = Outcome::attempt(|| "x".parse::<i32>());
    /// assert!(failed.as_failure().cause().is_some());
    /// ```
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: Fallible<V>,
    {
        match supplier.supply() {
            Ok(value) => Self::Success(Success::new(value)),
            Err(cause) => Self::Failure(Failure::from_erased_cause(cause)),
        }
    }

    /// Whether this outcome is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. That is a programming error, not a
    /// domain failure: inspect the variant first or use
    /// [`get_potential`](Self::get_potential).
    #[track_caller]
    pub fn get(self) -> V {
        match self {
            Self::Success(success) => success.into_value(),
            Self::Failure(failure) => {
                panic!("no success value is present for this failure: {failure}")
            }
        }
    }

    /// The success value if present; never panics.
    #[must_use]
    pub fn get_potential(self) -> Option<V> {
        match self {
            Self::Success(success) => Some(success.into_value()),
            Self::Failure(_) => None,
        }
    }

    /// Borrows this outcome as a success.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    #[track_caller]
    pub fn as_success(&self) -> &Success<V> {
        match self {
            Self::Success(success) => success,
            Self::Failure(failure) => {
                panic!("this failure cannot be used as a success: {failure}")
            }
        }
    }

    /// Borrows this outcome as a failure.
    ///
    /// # Panics
    ///
    /// Panics when called on a success.
    #[track_caller]
    pub fn as_failure(&self) -> &Failure {
        match self {
            Self::Success(_) => panic!("this success cannot be used as a failure"),
            Self::Failure(failure) => failure,
        }
    }

    /// Unwraps this outcome into its success.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    #[track_caller]
    pub fn into_success(self) -> Success<V> {
        match self {
            Self::Success(success) => success,
            Self::Failure(failure) => {
                panic!("this failure cannot be used as a success: {failure}")
            }
        }
    }

    /// Unwraps this outcome into its failure.
    ///
    /// # Panics
    ///
    /// Panics when called on a success.
    #[track_caller]
    pub fn into_failure(self) -> Failure {
        match self {
            Self::Success(_) => panic!("this success cannot be used as a failure"),
            Self::Failure(failure) => failure,
        }
    }

    /// Transforms the success value, passing failures through unchanged.
    ///
    /// `map` is not a fallible boundary: a panic raised by `f` propagates
    /// to the caller.
    pub fn map<NV, F>(self, f: F) -> Outcome<NV>
    where
        F: FnOnce(V) -> NV,
    {
        match self {
            Self::Success(success) => Outcome::Success(Success::new(f(success.into_value()))),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains a computation that may itself fail, passing failures through
    /// unchanged. The monadic bind, `flatMap` in other ecosystems.
    pub fn and_then<NV, F>(self, f: F) -> Outcome<NV>
    where
        F: FnOnce(V) -> Outcome<NV>,
    {
        match self {
            Self::Success(success) => f(success.into_value()),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs `f` with the success value, then passes the outcome through.
    ///
    /// A side-effect hook for logging and metrics; `f` is not invoked on a
    /// failure.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(success) = &self {
            f(success.value());
        }
        self
    }

    /// Runs `f` with the failure, then passes the outcome through.
    ///
    /// `f` is not invoked on a success.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Self::Failure(failure) = &self {
            f(failure);
        }
        self
    }

    /// Returns this outcome if it is a success, otherwise evaluates the
    /// supplier and returns its outcome.
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => supplier(),
        }
    }

    /// Fallible variant of [`or_else`](Self::or_else): an error raised
    /// while evaluating the alternative becomes a failure outcome rather
    /// than propagating.
    pub fn or_else_attempt<F>(self, supplier: F) -> Self
    where
        F: Fallible<Self>,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => match supplier.supply() {
                Ok(alternative) => alternative,
                Err(cause) => Self::Failure(Failure::from_erased_cause(cause)),
            },
        }
    }

    /// Converts into a plain `Result`, with the failure on the error side.
    pub fn to_result(self) -> Result<V, Failure> {
        match self {
            Self::Success(success) => Ok(success.into_value()),
            Self::Failure(failure) => Err(failure),
        }
    }

    /// Wraps a plain `Result`, attaching any error as a failure's cause.
    pub fn from_result<E>(result: Result<V, E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::Failure(Failure::from_cause(error)),
        }
    }
}
