//! Categorisation of failures.
//!
//! A [`FailureType`] names a category of failure and carries the message
//! template its details are rendered from. Implementations are process-wide
//! constants, typically a small closed enum:
//!
//! ```
//! use outcome::traits::FailureType;
//!
//! #[derive(Debug)]
//! enum RepoFailure {
//!     NotFound,
//! }
//!
//! impl FailureType for RepoFailure {
//!     fn title(&self) -> &str {
//!         "entity-not-found"
//!     }
//!
//!     fn template(&self) -> &str {
//!         "no {0} with id {1}"
//!     }
//! }
//!
//! assert_eq!(RepoFailure::NotFound.parameter_count(), 2);
//! ```

use crate::types::template;

/// A named category of failure with a parameterised message template.
///
/// The template uses positional `{0}`-style placeholders rendered by
/// [`template::render`]. Types implementing this trait are pure values with
/// no lifecycle beyond process-wide constants, which is why failures borrow
/// them as `&'static dyn FailureType`.
pub trait FailureType: core::fmt::Debug + Send + Sync {
    /// Stable category label.
    fn title(&self) -> &str;

    /// Message template with positional placeholders.
    fn template(&self) -> &str;

    /// Number of positional parameters the template expects.
    fn parameter_count(&self) -> usize {
        template::parameter_count(self.template())
    }
}

/// Built-in failure categories used when a caller supplies no domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicFailureType {
    /// The default category for otherwise unclassified failures.
    Generic,
    /// Failures no part of the program can be expected to recover from.
    Catastrophic,
}

impl FailureType for BasicFailureType {
    fn title(&self) -> &str {
        match self {
            Self::Generic => "generic-failure",
            Self::Catastrophic => "catastrophic-failure",
        }
    }

    fn template(&self) -> &str {
        ""
    }
}
