//! The failing variant of an outcome.
//!
//! A [`Failure`] is an immutable record of what went wrong: a
//! [`FailureType`] category, a human title, a fully rendered detail message
//! and an optional underlying [`Cause`]. It carries no success value, so the
//! same failure can stand in for a failed [`Outcome`] of any value type.
//!
//! Failures are built through [`FailureBuilder`]:
//!
//! ```
//! use outcome::{Failure, Outcome};
//!
//! let outcome: Outcome<u64> = Failure::generic()
//!     .titled("Account lookup failed")
//!     .detailed("no account with id {0}", &[&17])
//!     .into_outcome();
//!
//! assert_eq!(outcome.as_failure().detail(), "no account with id 17");
//! ```

use core::error::Error;
use core::fmt::{self, Display};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::traits::{BasicFailureType, FailureType};
use crate::types::alloc_type::{Arc, String};
use crate::types::{template, Cause, Outcome};

/// Structured error information describing a failed operation.
///
/// Immutable once constructed, with no identity beyond value equality of
/// its fields. Cloning is cheap: the category is a static borrow and the
/// cause is reference-counted.
#[must_use]
#[derive(Debug, Clone)]
pub struct Failure {
    kind: &'static dyn FailureType,
    title: String,
    detail: String,
    cause: Option<Cause>,
}

impl Failure {
    /// Builder seeded with [`BasicFailureType::Generic`].
    pub fn generic() -> FailureBuilder {
        Self::of(&BasicFailureType::Generic)
    }

    /// Builder for a failure of the given category.
    pub fn of(kind: &'static dyn FailureType) -> FailureBuilder {
        FailureBuilder {
            kind,
            title: String::new(),
            detail: String::new(),
            cause: None,
        }
    }

    /// Generic failure wrapping an underlying error, with no title or
    /// detail of its own.
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::generic().caused_by(cause).build()
    }

    pub(crate) fn from_erased_cause(cause: Cause) -> Self {
        Self {
            kind: &BasicFailureType::Generic,
            title: String::new(),
            detail: String::new(),
            cause: Some(cause),
        }
    }

    /// The category this failure belongs to.
    pub fn kind(&self) -> &'static dyn FailureType {
        self.kind
    }

    /// Human title of the failure.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fully rendered detail message.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The underlying error that triggered this failure, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Reinterprets this failure as a failed outcome of any value type.
    ///
    /// No data is copied; the failure simply moves into the new outcome.
    pub fn into_outcome<V>(self) -> Outcome<V> {
        Outcome::Failure(self)
    }
}

/// Kinds compare by their observable values, causes by their rendered
/// message; a failure has no identity beyond its fields.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        let causes_match = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.to_string() == b.to_string(),
            _ => false,
        };

        causes_match
            && self.kind.title() == other.kind.title()
            && self.kind.template() == other.kind.template()
            && self.title == other.title
            && self.detail == other.detail
    }
}

impl Eq for Failure {}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.title.is_empty() {
            self.kind.title()
        } else {
            &self.title
        };
        write!(f, "{label}")?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, " (caused by: {cause})")?;
        }
        Ok(())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Failure", 4)?;
        state.serialize_field("kind", self.kind.title())?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("detail", &self.detail)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|c| c.to_string()))?;
        state.end()
    }
}

/// Builder accumulating the fields of a [`Failure`].
///
/// Created by [`Failure::generic`] or [`Failure::of`].
#[must_use]
pub struct FailureBuilder {
    kind: &'static dyn FailureType,
    title: String,
    detail: String,
    cause: Option<Cause>,
}

impl FailureBuilder {
    /// Sets the human title.
    pub fn titled<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Renders `template` with `args` into the detail message.
    ///
    /// # Panics
    ///
    /// Panics when a placeholder in `template` has no matching argument,
    /// see [`template::render`].
    #[track_caller]
    pub fn detailed(mut self, template: &str, args: &[&dyn Display]) -> Self {
        self.detail = template::render(template, args);
        self
    }

    /// Attaches the underlying error that triggered the failure.
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Failure {
        Failure {
            kind: self.kind,
            title: self.title,
            detail: self.detail,
            cause: self.cause,
        }
    }

    /// Finishes the builder directly as a failed outcome.
    pub fn into_outcome<V>(self) -> Outcome<V> {
        self.build().into_outcome()
    }
}
