//! Admission control seam for the execution gate.
//!
//! The gate asks an [`AdmissionController`] whether a command should be tried
//! at all and reports how each attempt ended. A circuit breaker
//! (closed/open/half-open) plugs in here without changing the gate contract.
mod controller;
pub use controller::{AdmissionController, AdmissionHandle};

mod noop;
pub use noop::AllowAll;

use std::sync::Arc;

/// Create an admission handle that admits every call and records nothing.
#[inline]
pub fn allow_all() -> AdmissionHandle {
    Arc::new(AllowAll)
}
