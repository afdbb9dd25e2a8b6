//! Core value types of the outcome abstraction.
//!
//! All of these are plain, immutable values: an outcome's variant is fixed
//! at construction, instances may be freely shared across threads, and no
//! operation here blocks or performs I/O.
//!
//! # Examples
//!
//! ```
//! use outcome::{outcomes, Outcome};
//!
//! let outcome: Outcome<&str> = outcomes::success("ready");
//! assert!(outcome.is_success());
//! ```

use core::error::Error;

pub(crate) mod alloc_type;

pub mod failure;
pub mod outcome;
pub mod success;
pub mod template;

pub use failure::{Failure, FailureBuilder};
pub use outcome::Outcome;
pub use success::{Success, SUCCEEDED};

use crate::types::alloc_type::Arc;

/// The type-erased underlying error attached to a [`Failure`].
///
/// Reference-counted so failures stay cheap to clone and safe to share
/// across threads; the error itself is never mutated after construction.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;
