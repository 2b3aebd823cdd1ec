use std::time::Duration;

use thiserror::Error;

use cordon_model::ModelError;

/// Error type produced by caller-supplied operations and fallbacks.
pub type OpError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Terminal outcome of a failed execution attempt.
///
/// Every variant except [`GateError::Config`] and [`GateError::Internal`] may
/// be routed through a fallback before the caller sees it.
#[derive(Debug, Error)]
pub enum GateError {
    /// The command name is not registered with the registry.
    #[error("command '{0}' is not configured")]
    Config(String),

    /// The command spec failed validation.
    #[error("invalid command configuration: {0}")]
    Model(#[from] ModelError),

    /// All slots for the command were taken; the call was not queued.
    #[error("rejected: no executor available for command '{0}'")]
    Rejected(String),

    /// The admission controller refused the call before a slot was tried.
    #[error("circuit open: command '{0}' is not accepting calls")]
    CircuitOpen(String),

    /// The timeout budget elapsed before the operation finished.
    /// The operation itself keeps running in the background.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// The operation returned an error or panicked.
    #[error("operation failed: {0}")]
    Operation(OpError),

    /// The fallback was invoked and failed as well.
    ///
    /// Both halves are kept as structured fields so callers can inspect the
    /// fallback error and the triggering error independently.
    #[error("fallback failed with '{fallback}'; original error was '{original}'")]
    Fallback {
        fallback: OpError,
        original: Box<GateError>,
    },

    /// The attempt was dropped without reporting an outcome.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GateError {
    /// Returns `true` for outcomes caused by the timeout budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GateError::Timeout(_))
    }

    /// Returns `true` for outcomes caused by slot exhaustion.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GateError::Rejected(_))
    }
}
