use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid concurrency limit: a command needs at least one slot")]
    InvalidConcurrency,

    #[error("invalid timeout: a command needs a non-zero timeout budget")]
    InvalidTimeout,

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
