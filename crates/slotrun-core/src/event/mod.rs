//! Run events and the reporting interface.
//!
//! The runner describes everything it does as a [`RunEvent`]; reporters decide where the
//! events go (console, logs, memory). Reporters are injected into [`crate::JobRunner`].
mod run_event;
pub use run_event::RunEvent;

mod reporter;
pub use reporter::{Reporter, ReporterHandle};

mod noop;
pub use noop::NoOpReporter;

mod memory;
pub use memory::MemoryReporter;

use std::sync::Arc;

/// Create a no-op reporter handle.
#[inline]
pub fn noop_reporter() -> ReporterHandle {
    Arc::new(NoOpReporter)
}
