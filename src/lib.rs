//! Typed success/failure outcomes for the operational result pattern.
//!
//! An [`Outcome`] represents the result of an operation as either a
//! [`Success`] carrying a value or a [`Failure`] carrying structured error
//! information: a category ([`FailureType`]), a title, a rendered detail
//! message and an optional underlying cause. Instead of branching on error
//! conditions, callers compose outcomes through `map`/`and_then`/`or_else`
//! and cross from `Result`-returning code into the outcome world at a
//! single boundary, [`Outcome::attempt`].
//!
//! # Examples
//!
//! ## Attempting a fallible operation
//!
//! ```
//! use outcome::Outcome;
//!
//! let port = Outcome::attempt(|| "8080".parse::<u16>());
//! assert_eq!(port, Outcome::success(8080));
//!
//! let bad = Outcome::attempt(|| "eighty".parse::<u16>());
//! assert!(bad.is_failure());
//! assert!(bad.as_failure().cause().is_some());
//! ```
//!
//! ## Composing without branching
//!
//! ```
//! use outcome::{outcomes, Outcome};
//!
//! fn lookup(id: u32) -> Outcome<&'static str> {
//!     match id {
//!         1 => outcomes::success("ada"),
//!         _ => outcomes::detailed_failure("Lookup failed", "no user with id {0}", &[&id]),
//!     }
//! }
//!
//! let greeting = lookup(1).map(|name| name.to_uppercase());
//! assert_eq!(greeting.get(), "ADA");
//!
//! let missing = lookup(9)
//!     .map(|name| name.to_uppercase())
//!     .or_else(|| outcomes::success("GUEST".to_string()));
//! assert_eq!(missing.get(), "GUEST");
//! ```
//!
//! ## Typed failures
//!
//! ```
//! use outcome::{outcomes, FailureType, Outcome};
//!
//! #[derive(Debug)]
//! enum BillingFailure {
//!     InsufficientFunds,
//! }
//!
//! impl FailureType for BillingFailure {
//!     fn title(&self) -> &str {
//!         "insufficient-funds"
//!     }
//!
//!     fn template(&self) -> &str {
//!         "needed {0}, balance is {1}"
//!     }
//! }
//!
//! let outcome: Outcome<()> =
//!     outcomes::typed_failure(&BillingFailure::InsufficientFunds, &[&100, &42]);
//! assert_eq!(outcome.as_failure().detail(), "needed 100, balance is 42");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcomes and standard types
pub mod convert;
/// Ergonomic macros for constructing outcomes
pub mod macros;
/// Factory functions for the common outcome shapes
pub mod outcomes;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: failure categories and the fallible-supplier adapter
pub mod traits;
/// The outcome sum type and its value model
pub mod types;

/// Tracing integration (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::{BasicFailureType, Fallible, FailureType, ResultOutcomeExt};
pub use types::{Cause, Failure, FailureBuilder, Outcome, Success, SUCCEEDED};
