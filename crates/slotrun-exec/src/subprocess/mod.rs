//! Subprocess launcher.
//!
//! Runs each job as an OS child process spawned via `tokio::process::Command`.
mod config;
pub use config::SpawnConfig;

mod launcher;
pub use launcher::ScriptLauncher;

mod process;
pub use process::ChildProcess;

use std::sync::Arc;

use slotrun_core::LauncherHandle;

use crate::ExecError;

/// Build the default subprocess launcher as a shared handle.
pub fn subprocess_launcher(config: SpawnConfig) -> Result<LauncherHandle, ExecError> {
    Ok(Arc::new(ScriptLauncher::new("subprocess", config)?))
}
