//! Operational error context propagation with `anyhow`.
//!
//! Toolkit callbacks cannot return errors, so they hand failures to
//! `ErrorReporter` instead of dropping them.

use std::error::Error as StdError;

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::error,
};

/// Extension trait for adding context to errors.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }
}

/// Centralized error reporting for failures raised inside UI callbacks.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Logs an error together with the action that raised it.
    pub fn error(error: &Error, context: &str) {
        error!(context = context, error = %format!("{error:#}"), "Operation failed");
    }
}
