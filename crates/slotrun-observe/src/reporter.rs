//! Console reporter for run events.
//!
//! Prints each event's status line to stdout and mirrors it as a structured tracing event,
//! so the same run can be followed on the console and in the logs.

use std::{
    io::{self, Stdout, Write},
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use tracing::{debug, info, trace, warn};

use slotrun_core::{Reporter, RunEvent};

/// Reporter that writes status lines to a sink, stdout by default.
///
/// A successful exit prints nothing.
#[derive(Debug)]
pub struct ConsoleReporter<W = Stdout> {
    out: Mutex<W>,
    write_failed: AtomicBool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out` instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            write_failed: AtomicBool::new(false),
        }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn print(&self, event: &RunEvent) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Child processes share stdout; flush so lines are not held back behind their output.
        let result = writeln!(out, "{event}").and_then(|_| out.flush());
        if let Err(e) = result {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                debug!(error = %e, "status line could not be written");
            }
        }
    }
}

impl<W: Write + Send + 'static> Reporter for ConsoleReporter<W> {
    fn on_event(&self, event: &RunEvent) {
        log_event(event);
        if !event.is_quiet() {
            self.print(event);
        }
    }
}

/// Logs an event with a level matching its severity.
fn log_event(e: &RunEvent) {
    let job = e.job().unwrap_or_default();
    if e.is_failure() {
        let code = match e {
            RunEvent::Finished { exit, .. } => exit.code(),
            _ => None,
        };
        warn!(job, code, "{e}");
        return;
    }
    match e {
        RunEvent::Launching { seq, total, .. } => debug!(seq, total, job, "{e}"),
        RunEvent::Finished { seq, .. } => trace!(seq, job, "job succeeded"),
        RunEvent::Completed { summary } => info!(
            total = summary.total,
            succeeded = summary.succeeded,
            unsuccessful = summary.unsuccessful(),
            "{e}"
        ),
        _ => debug!("{e}"),
    }
}
