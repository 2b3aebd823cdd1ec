//! Latency and fault isolation for calls to remote dependencies.
//! - `ExecutionGate` runs caller operations under per-command slot and timeout budgets.
//! - `CommandRegistry` maps command names to their pools and timeouts.
//! - `AdmissionController` is the seam where a circuit breaker plugs in.
//!
//! A slow or failing dependency is bounded to its own slots and its own
//! timeout budget, so it cannot exhaust the caller or cascade failure.
pub mod admission;
pub mod error;
pub mod fallback;
pub mod gate;
pub mod pool;
pub mod registry;

pub mod prelude {
    pub use crate::admission::{AdmissionController, AdmissionHandle, allow_all};
    pub use crate::error::{GateError, OpError};
    pub use crate::fallback::FallbackFn;
    pub use crate::gate::{Completion, ExecutionGate};
    pub use crate::pool::{SlotPool, SlotToken};
    pub use crate::registry::{CommandRegistry, ResolvedCommand};
}
