//! Fixed-capacity slot pool bounding concurrent operations for one command.
//!
//! Acquisition is strictly non-blocking: a saturated pool answers `None`
//! instead of queueing the caller.
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Pool of interchangeable execution slots for a single command.
///
/// The number of slots in circulation (held + available) equals the
/// configured capacity for the pool's whole lifetime. Pools are shared across
/// attempts and safe for concurrent acquire/release from arbitrary tasks.
#[derive(Debug)]
pub struct SlotPool {
    capacity: usize,
    slots: Arc<Semaphore>,
}

impl SlotPool {
    /// Create a pool with a fixed number of slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Take a slot if one is free; never waits.
    pub fn try_acquire(&self) -> Option<SlotToken> {
        Arc::clone(&self.slots)
            .try_acquire_owned()
            .ok()
            .map(|permit| SlotToken { _permit: permit })
    }

    /// Get the configured slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of slots currently free.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}

/// Permission to run one concurrent operation.
///
/// A token is single-use and held by exactly one attempt; dropping it returns
/// the slot to the pool. Double-release is impossible by construction.
#[derive(Debug)]
pub struct SlotToken {
    _permit: OwnedSemaphorePermit,
}
