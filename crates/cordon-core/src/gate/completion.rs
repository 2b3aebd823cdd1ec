use tokio::sync::oneshot;

use crate::error::GateError;

pub(crate) type Outcome = Result<(), GateError>;

/// Handle to the single terminal outcome of an execution attempt.
///
/// Returned by [`crate::gate::ExecutionGate::execute`] immediately; the
/// attempt itself runs in background tasks. Exactly one outcome is ever
/// delivered: `Ok(())` means the operation (or its fallback) succeeded.
pub struct Completion {
    rx: oneshot::Receiver<Outcome>,
}

impl Completion {
    /// Make a completion and the sender its attempt reports through.
    pub(crate) fn channel() -> (oneshot::Sender<Outcome>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    /// Make a completion that already holds its outcome.
    pub(crate) fn immediate(outcome: Outcome) -> Self {
        let (tx, completion) = Self::channel();
        // the receiver is alive, the buffered send cannot fail
        let _ = tx.send(outcome);
        completion
    }

    /// Wait for the attempt's outcome.
    pub async fn outcome(self) -> Outcome {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(GateError::Internal(
                "attempt dropped without reporting an outcome".to_string(),
            )),
        }
    }
}
