use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid specification: {0}")]
    InvalidSpec(String),
}
