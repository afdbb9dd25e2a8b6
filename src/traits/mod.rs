//! Core traits of the outcome abstraction.
//!
//! - [`FailureType`]: a named category of failure with a message template
//! - [`Fallible`]: a computation that yields a value or signals failure
//! - [`ResultOutcomeExt`]: ergonomic bridging from plain `Result`s
//!
//! # Examples
//!
//! ```
//! use outcome::traits::ResultOutcomeExt;
//!
//! let outcome = "21".parse::<i32>().into_outcome().map(|n| n * 2);
//! assert_eq!(outcome.get(), 42);
//! ```

pub mod failure_type;
pub mod fallible;
pub mod result_ext;

pub use failure_type::{BasicFailureType, FailureType};
pub use fallible::Fallible;
pub use result_ext::ResultOutcomeExt;
