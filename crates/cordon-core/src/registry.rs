//! Per-command configuration and pool lookup.
//!
//! The registry is an explicit, injectable object: construct one per process
//! and share it with every gate that should see the same commands. There is
//! no module-level global state.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, trace};

use cordon_model::{CommandSpec, ModelResult};

use crate::error::GateError;
use crate::pool::SlotPool;

/// Everything the gate needs to run one attempt for a command.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    /// Slot pool shared by all attempts for this command.
    pub pool: Arc<SlotPool>,
    /// Timeout budget for a single call.
    pub timeout: Duration,
}

struct CommandEntry {
    spec: CommandSpec,
    pool: OnceLock<Arc<SlotPool>>,
}

/// Maps command names to their specs and lazily-created slot pools.
///
/// Pools are created on first resolve with an atomic create-if-absent step,
/// so concurrent first-use of a command always observes the same pool
/// instance. Once created, a pool lives for the registry's lifetime even if
/// the spec is replaced.
#[derive(Default)]
pub struct CommandRegistry {
    commands: RwLock<HashMap<String, CommandEntry>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the spec for a command.
    ///
    /// The spec is validated before it is stored; a command with zero slots
    /// or a zero timeout is refused. Replacing the spec of a command whose
    /// pool already exists keeps the existing pool.
    pub fn configure(&self, name: impl Into<String>, spec: CommandSpec) -> ModelResult<()> {
        spec.validate()?;
        let name = name.into();
        debug!(command = %name, max_concurrent = spec.max_concurrent, timeout_ms = spec.timeout_ms, "configuring command");

        let mut commands = self.commands.write().unwrap_or_else(PoisonError::into_inner);
        match commands.entry(name) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().spec = spec;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CommandEntry {
                    spec,
                    pool: OnceLock::new(),
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if the command is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Look up the pool and timeout for a command in one step.
    ///
    /// An unknown name is a configuration error, distinct from operation,
    /// timeout, and rejection failures.
    pub fn resolve(&self, name: &str) -> Result<ResolvedCommand, GateError> {
        let commands = self.commands.read().unwrap_or_else(PoisonError::into_inner);
        let entry = commands
            .get(name)
            .ok_or_else(|| GateError::Config(name.to_string()))?;

        let pool = entry
            .pool
            .get_or_init(|| {
                trace!(command = %name, capacity = entry.spec.max_concurrent, "creating slot pool");
                Arc::new(SlotPool::new(entry.spec.max_concurrent))
            })
            .clone();

        Ok(ResolvedCommand {
            pool,
            timeout: entry.spec.timeout(),
        })
    }

    /// Get the slot pool for a command.
    pub fn pool_for(&self, name: &str) -> Result<Arc<SlotPool>, GateError> {
        self.resolve(name).map(|resolved| resolved.pool)
    }

    /// Get the timeout budget for a command.
    pub fn timeout_for(&self, name: &str) -> Result<Duration, GateError> {
        self.resolve(name).map(|resolved| resolved.timeout)
    }
}
