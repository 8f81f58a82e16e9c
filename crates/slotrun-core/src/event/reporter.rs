use std::sync::Arc;

use crate::event::RunEvent;

/// Receives run events.
///
/// Called synchronously from the runner's control loop, so implementations must be cheap.
pub trait Reporter: Send + Sync + 'static {
    fn on_event(&self, event: &RunEvent);
}

/// Shared handle to a reporter.
pub type ReporterHandle = Arc<dyn Reporter>;
