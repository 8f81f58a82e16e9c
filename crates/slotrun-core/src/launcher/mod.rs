//! Launcher abstraction used by the runner to turn a [`Job`] into a running process.
//!
//! Concrete launchers (OS subprocesses, test doubles) implement these traits and are injected into
//! [`crate::JobRunner`].
mod error;
pub use error::LaunchError;

use std::{io, sync::Arc};

use async_trait::async_trait;
use slotrun_model::{Job, JobExit};

/// Starts jobs.
///
/// A launcher is responsible for:
/// - spawning the job without waiting for it (`launch`)
/// - returning a handle the runner can poll or block on
pub trait Launcher: Send + Sync {
    /// Launcher name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Spawn `job` and return its process handle.
    ///
    /// Must not block until the job finishes.
    fn launch(&self, job: &Job) -> Result<Box<dyn JobProcess>, LaunchError>;
}

/// Handle to a launched job.
///
/// The runner only observes the process through this handle; it never alters it.
#[async_trait]
pub trait JobProcess: Send {
    /// OS process id, when there is one.
    fn id(&self) -> Option<u32> {
        None
    }

    /// Non-blocking completion check.
    ///
    /// Returns `Ok(None)` while the job is still running.
    fn try_wait(&mut self) -> io::Result<Option<JobExit>>;

    /// Block until the job exits.
    async fn wait(&mut self) -> io::Result<JobExit>;
}

/// Shared handle to a launcher.
pub type LauncherHandle = Arc<dyn Launcher>;
