use std::sync::Arc;

/// Decides whether a command may be attempted and tracks attempt outcomes.
///
/// Implementations are injected into [`crate::gate::ExecutionGate`] and used
/// for every attempt on every command.
pub trait AdmissionController: Send + Sync + 'static {
    /// Returns `true` if a call to `command` should be attempted.
    ///
    /// Consulted after command resolution but before a slot is tried, so a
    /// denial never consumes pool capacity.
    fn allow(&self, command: &str) -> bool;

    /// Record that an operation for `command` completed within budget.
    fn record_success(&self, command: &str);

    /// Record that an attempt for `command` was rejected, failed, or timed out.
    ///
    /// Fallback recovery does not change what is recorded here; health
    /// tracking follows the primary outcome.
    fn record_failure(&self, command: &str);
}

/// Shared handle to an admission controller.
///
/// Stored in [`crate::gate::ExecutionGate`] and cloned into each attempt.
pub type AdmissionHandle = Arc<dyn AdmissionController>;
