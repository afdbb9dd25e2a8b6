//! Tracing integration for outcomes.
//!
//! Reports outcomes to `tracing` subscribers through the
//! [`on_success`](crate::Outcome::on_success) /
//! [`on_failure`](crate::Outcome::on_failure) hooks, so observability never
//! changes what an outcome is.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rs = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{debug, warn};

use crate::types::Outcome;

/// Extension trait that logs an outcome as it passes through.
///
/// # Examples
///
/// ```
/// use outcome::tracing_ext::OutcomeTraceExt;
/// use outcome::Outcome;
///
/// let parsed = Outcome::attempt(|| "42".parse::<i32>()).traced("parse_port");
/// assert!(parsed.is_success());
/// ```
pub trait OutcomeTraceExt<V>: Sized {
    /// Emits a `warn` event for a failure and a `debug` event for a
    /// success, identified by `operation`; the outcome itself is returned
    /// unchanged.
    fn traced(self, operation: &str) -> Self;
}

impl<V> OutcomeTraceExt<V> for Outcome<V> {
    fn traced(self, operation: &str) -> Self {
        self.on_success(|_| debug!(operation, "operation succeeded"))
            .on_failure(|failure| warn!(operation, failure = %failure, "operation failed"))
    }
}
