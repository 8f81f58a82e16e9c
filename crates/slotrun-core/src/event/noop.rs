use crate::event::{RunEvent, Reporter};

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl Reporter for NoOpReporter {
    #[inline(always)]
    fn on_event(&self, _: &RunEvent) {}
}
