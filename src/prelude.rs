//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`], [`fail!`]
//! - **Types**: [`Outcome`], [`Success`], [`Failure`]
//! - **Traits**: [`FailureType`], [`Fallible`], [`ResultOutcomeExt`]
//! - **Factories**: the [`outcomes`](crate::outcomes) module
//!
//! # Examples
//!
//! ```
//! use outcome::prelude::*;
//!
//! fn load_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().outcome_titled("Parsing port")
//! }
//!
//! assert_eq!(load_port("8080"), outcomes::success(8080));
//! assert!(load_port("eighty").is_failure());
//! ```

// Macros
pub use crate::{attempt, fail};

// Core types
pub use crate::types::{Failure, FailureBuilder, Outcome, Success};

// Traits
pub use crate::traits::{BasicFailureType, FailureType, Fallible, ResultOutcomeExt};

// Factory layer
pub use crate::outcomes;
