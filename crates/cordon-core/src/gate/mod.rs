//! The per-command execution gate.
//! - Resolves a command's slot pool and timeout from the registry.
//! - Consults the admission controller before trying a slot.
//! - Races the operation against its timeout budget.
//! - Routes every failure through the optional fallback.
//! - Delivers exactly one outcome to the caller.
mod completion;
pub use completion::Completion;

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinError;
use tokio::time;
use tracing::{debug, trace};

use crate::admission::{self, AdmissionHandle};
use crate::error::{GateError, OpError};
use crate::fallback::{self, FallbackFn};
use crate::registry::{CommandRegistry, ResolvedCommand};

/// Runs operations for named commands under slot and timeout budgets.
///
/// The gate never blocks the calling task: [`ExecutionGate::execute`] spawns
/// the attempt and returns a [`Completion`] immediately. It must be called
/// from within a tokio runtime.
pub struct ExecutionGate {
    registry: Arc<CommandRegistry>,
    admission: AdmissionHandle,
}

impl ExecutionGate {
    /// Create a gate over a registry, admitting every call.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self {
            registry,
            admission: admission::allow_all(),
        }
    }

    /// Replace the admission controller and return the updated gate.
    ///
    /// This is the seam where a circuit breaker plugs in: `allow` is asked
    /// before each attempt, and every primary outcome is reported back.
    pub fn with_admission(mut self, admission: AdmissionHandle) -> Self {
        self.admission = admission;
        self
    }

    /// Run `operation` for `command` and return a handle to its outcome.
    ///
    /// The attempt:
    /// 1. resolves the command; an unknown name is delivered as
    ///    [`GateError::Config`] with no operation run and no fallback invoked;
    /// 2. asks the admission controller; denial becomes
    ///    [`GateError::CircuitOpen`], routed through the fallback;
    /// 3. tries a slot without waiting; a saturated pool becomes
    ///    [`GateError::Rejected`], routed through the fallback;
    /// 4. runs the operation while racing the timeout budget. A timeout does
    ///    not cancel the operation: it keeps running in the background and its
    ///    slot is released once it finishes.
    ///
    /// A fallback that succeeds masks any of those failures into `Ok(())`.
    pub fn execute<O>(
        &self,
        command: impl Into<String>,
        operation: O,
        fallback: Option<FallbackFn>,
    ) -> Completion
    where
        O: Future<Output = Result<(), OpError>> + Send + 'static,
    {
        let command = command.into();

        let resolved = match self.registry.resolve(&command) {
            Ok(resolved) => resolved,
            // config errors are not operation failures: no fallback,
            // nothing reported to the admission controller
            Err(err) => return Completion::immediate(Err(err)),
        };

        let (tx, completion) = Completion::channel();
        let admission = Arc::clone(&self.admission);
        tokio::spawn(async move {
            let outcome = attempt(resolved, command, operation, fallback, admission).await;
            // the caller may have dropped its handle; the outcome is
            // discarded then, never re-sent
            let _ = tx.send(outcome);
        });
        completion
    }

    /// Run `operation` for `command` and wait for the outcome.
    pub async fn execute_wait<O>(
        &self,
        command: impl Into<String>,
        operation: O,
        fallback: Option<FallbackFn>,
    ) -> Result<(), GateError>
    where
        O: Future<Output = Result<(), OpError>> + Send + 'static,
    {
        self.execute(command, operation, fallback).outcome().await
    }

    /// Get a clone of the registry handle this gate resolves commands from.
    pub fn registry(&self) -> Arc<CommandRegistry> {
        Arc::clone(&self.registry)
    }
}

/// Run one attempt to its single terminal outcome.
async fn attempt<O>(
    resolved: ResolvedCommand,
    command: String,
    operation: O,
    fallback: Option<FallbackFn>,
    admission: AdmissionHandle,
) -> Result<(), GateError>
where
    O: Future<Output = Result<(), OpError>> + Send + 'static,
{
    if !admission.allow(&command) {
        debug!(command = %command, "admission controller denied the call");
        return fallback::apply(fallback, GateError::CircuitOpen(command));
    }

    let Some(token) = resolved.pool.try_acquire() else {
        debug!(command = %command, "rejected: no executor available");
        admission.record_failure(&command);
        return fallback::apply(fallback, GateError::Rejected(command));
    };

    let mut running = tokio::spawn(async move {
        // the token travels with the operation so the slot is released
        // exactly once, when the operation finishes, even if that is long
        // after the timeout fired
        let _token = token;
        operation.await
    });

    tokio::select! {
        finished = &mut running => match finished {
            Ok(Ok(())) => {
                trace!(command = %command, "operation completed within budget");
                admission.record_success(&command);
                Ok(())
            }
            Ok(Err(err)) => {
                debug!(command = %command, error = %err, "operation failed");
                admission.record_failure(&command);
                fallback::apply(fallback, GateError::Operation(err))
            }
            Err(join_err) => {
                admission.record_failure(&command);
                fallback::apply(fallback, operation_crash(join_err))
            }
        },
        _ = time::sleep(resolved.timeout) => {
            // dropping the join handle detaches the operation; it keeps
            // running in the background
            debug!(command = %command, timeout = ?resolved.timeout, "timeout elapsed before completion");
            admission.record_failure(&command);
            fallback::apply(fallback, GateError::Timeout(resolved.timeout))
        }
    }
}

/// Convert an operation task crash into an operation error.
///
/// Panics are caught here so slot accounting survives a panicking operation;
/// the slot itself is released by task teardown.
fn operation_crash(err: JoinError) -> GateError {
    if err.is_panic() {
        let payload = err.into_panic();
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        GateError::Operation(format!("operation panicked: {msg}").into())
    } else {
        GateError::Internal("operation task was cancelled before completion".to_string())
    }
}
