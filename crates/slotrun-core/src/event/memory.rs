use std::sync::Mutex;

use crate::event::{Reporter, RunEvent};

/// Reporter that keeps every event in memory.
///
/// Useful for embedding the runner and for tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<RunEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events received so far.
    pub fn events(&self) -> Vec<RunEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Status lines an operator would have seen, quiet events excluded.
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter(|e| !e.is_quiet())
            .map(|e| e.to_string())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn on_event(&self, event: &RunEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}
