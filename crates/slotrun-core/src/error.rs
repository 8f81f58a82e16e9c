use thiserror::Error;

use slotrun_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid runner configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot list scripts in '{path}': {reason}")]
    Discovery { path: String, reason: String },

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
