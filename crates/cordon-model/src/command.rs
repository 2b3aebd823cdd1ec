use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_MS};
use crate::error::{ModelError, ModelResult};

/// Per-command isolation settings.
///
/// A command is a named remote-dependency call site. Its spec bounds how many
/// calls may run concurrently and how long a single call may take before the
/// caller observes a timeout.
///
/// This value is typically provided in configuration files or built in code
/// before the command is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandSpec {
    /// Maximum number of calls allowed in flight at the same time.
    pub max_concurrent: usize,
    /// Timeout budget for a single call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl CommandSpec {
    /// Create a spec with explicit limits.
    pub fn new(max_concurrent: usize, timeout_ms: u64) -> Self {
        Self {
            max_concurrent,
            timeout_ms,
        }
    }

    /// Check that the spec describes a usable command.
    ///
    /// A command with zero slots could never run anything and a zero timeout
    /// would fail every call, so both are treated as misconfiguration.
    pub fn validate(&self) -> ModelResult<()> {
        if self.max_concurrent == 0 {
            return Err(ModelError::InvalidConcurrency);
        }
        if self.timeout_ms == 0 {
            return Err(ModelError::InvalidTimeout);
        }
        Ok(())
    }

    /// Get the timeout budget as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
