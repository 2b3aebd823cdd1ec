//! Fallback invocation for failed attempts.
use crate::error::{GateError, OpError};

/// Caller-supplied recovery logic.
///
/// Receives the error that triggered it (rejection, operation failure, or
/// timeout) and either recovers (`Ok`) or fails with its own error.
pub type FallbackFn = Box<dyn FnOnce(&GateError) -> Result<(), OpError> + Send + 'static>;

/// Route a failure through an optional fallback.
///
/// - no fallback: the original error passes through unchanged;
/// - fallback succeeds: the failure is fully masked into `Ok(())`;
/// - fallback fails: both errors are kept in [`GateError::Fallback`].
pub fn apply(fallback: Option<FallbackFn>, original: GateError) -> Result<(), GateError> {
    let Some(fallback) = fallback else {
        return Err(original);
    };

    match fallback(&original) {
        Ok(()) => Ok(()),
        Err(fallback_err) => Err(GateError::Fallback {
            fallback: fallback_err,
            original: Box::new(original),
        }),
    }
}
