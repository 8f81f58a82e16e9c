use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("spawn failed for '{job}': {reason}")]
    Spawn { job: String, reason: String },
}
