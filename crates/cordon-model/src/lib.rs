mod constants;
pub use constants::{DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_MS};

mod command;
pub use command::CommandSpec;

mod error;
pub use error::{ModelError, ModelResult};
