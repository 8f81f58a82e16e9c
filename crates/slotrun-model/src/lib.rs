mod domain;
pub use domain::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SCRIPT_PREFIX, DEFAULT_SCRIPT_SUFFIX};
pub use domain::{DEFAULT_SHELL, SCRIPTS_DIR};
pub use domain::{PollIntervalMs, Slots};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{Job, JobExit};

mod strategy;
pub use strategy::ShellMode;
