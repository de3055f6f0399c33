//! Error sink for user-facing failures.

use tracing::error;

use crate::error::HoldError;

/// Receives errors the controller should see.
///
/// The host usually forwards these to its own error window.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &HoldError);
}

/// Reporter that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, err: &HoldError) {
        error!(error = %err, "Hold engine error");
    }
}
