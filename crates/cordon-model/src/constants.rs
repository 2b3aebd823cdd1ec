//! Default configuration values for commands.
//!
//! A command that is configured without explicit limits falls back to these.
//! Keeping them here avoids scattering magic numbers throughout the codebase.

/// Default number of concurrent slots per command.
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Default timeout budget per call, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;
