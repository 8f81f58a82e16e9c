pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod launcher;
pub mod runner;

pub use config::{DiscoveryConfig, RunnerConfig};
pub use discovery::discover;
pub use error::CoreError;
pub use event::{MemoryReporter, NoOpReporter, Reporter, ReporterHandle, RunEvent, noop_reporter};
pub use launcher::{JobProcess, LaunchError, Launcher, LauncherHandle};
pub use runner::{JobQueue, JobRunner, RunSummary};

pub mod prelude {
    pub use crate::config::{DiscoveryConfig, RunnerConfig};
    pub use crate::error::CoreError;
    pub use crate::event::{Reporter, RunEvent};
    pub use crate::launcher::{JobProcess, LaunchError, Launcher};
    pub use crate::runner::{JobRunner, RunSummary};
}
