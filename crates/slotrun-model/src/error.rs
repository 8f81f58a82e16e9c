use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid value for N: {0}")]
    InvalidSlots(String),

    #[error("unknown shell mode: {0}")]
    UnknownShellMode(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
