//! Ergonomic macros for constructing outcomes.
//!
//! - [`macro@crate::attempt`] - Wraps a `Result`-producing expression at the
//!   [`Outcome::attempt`](crate::Outcome::attempt) boundary.
//! - [`macro@crate::fail`] - Shorthand for the titled/detailed failure
//!   factories without spelling out the argument slice.
//!
//! # Examples
//!
//! ```
//! use outcome::{attempt, fail, Outcome};
//!
//! let parsed = attempt!("42".parse::<i32>());
//! assert_eq!(parsed, Outcome::success(42));
//!
//! let failed: Outcome<i32> = fail!("Lookup failed", "no row with id {0}", 7);
//! assert_eq!(failed.as_failure().detail(), "no row with id 7");
//! ```

/// Wraps a `Result`-producing expression or block at the attempt boundary.
///
/// # Syntax
///
/// - `attempt!(expr)` - Wraps a single `Result`-producing expression
/// - `attempt!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use outcome::attempt;
///
/// let outcome = attempt!({
///     let n: i32 = "21".parse()?;
///     Ok::<_, core::num::ParseIntError>(n * 2)
/// });
/// assert_eq!(outcome.get(), 42);
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        $crate::Outcome::attempt(move || $expr)
    };
}

/// Creates a failed outcome with a title and an optional detail template.
///
/// Template arguments are taken positionally, like the factory functions in
/// [`crate::outcomes`], but without the `&[&dyn Display]` ceremony.
///
/// # Examples
///
/// ```
/// use outcome::{fail, Outcome};
///
/// let bare: Outcome<()> = fail!("Not ready");
/// assert_eq!(bare.as_failure().title(), "Not ready");
///
/// let detailed: Outcome<()> = fail!("Not ready", "warming up, {0}% done", 80);
/// assert_eq!(detailed.as_failure().detail(), "warming up, 80% done");
/// ```
#[macro_export]
macro_rules! fail {
    ($title:expr $(,)?) => {
        $crate::outcomes::titled_failure($title)
    };
    ($title:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::outcomes::detailed_failure(
            $title,
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}
