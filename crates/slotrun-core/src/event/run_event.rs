use std::fmt;

use slotrun_model::JobExit;

use crate::runner::RunSummary;

/// Something the runner did or observed.
///
/// `Display` renders the human-readable status line for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Jobs were collected and are about to be scheduled.
    Queued { total: usize },
    /// A job is being launched; `seq` is the 1-based launch counter.
    Launching { seq: usize, total: usize, job: String },
    /// A job could not be started. It occupies no slot.
    SpawnFailed { seq: usize, job: String, reason: String },
    /// A launched job was observed to exit.
    Finished { seq: usize, job: String, exit: JobExit },
    /// Completion of a launched job could not be observed; it is no longer tracked.
    Lost { seq: usize, job: String, reason: String },
    /// The queue is empty; the runner now blocks on the remaining jobs.
    Draining { remaining: usize },
    /// Every job has been launched and observed.
    Completed { summary: RunSummary },
}

impl RunEvent {
    /// Events that carry no information for the operator.
    ///
    /// Only a successful exit is quiet.
    pub fn is_quiet(&self) -> bool {
        matches!(self, RunEvent::Finished { exit, .. } if exit.is_success())
    }

    /// Events that describe a job going wrong.
    pub fn is_failure(&self) -> bool {
        match self {
            RunEvent::SpawnFailed { .. } | RunEvent::Lost { .. } => true,
            RunEvent::Finished { exit, .. } => !exit.is_success(),
            _ => false,
        }
    }

    /// Name of the job the event is about, if any.
    pub fn job(&self) -> Option<&str> {
        match self {
            RunEvent::Launching { job, .. }
            | RunEvent::SpawnFailed { job, .. }
            | RunEvent::Finished { job, .. }
            | RunEvent::Lost { job, .. } => Some(job),
            _ => None,
        }
    }
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEvent::Queued { total } => write!(f, "There are {total} script files"),
            RunEvent::Launching { seq, total, job } => {
                write!(f, "Running script {seq}/{total}: {job}")
            }
            RunEvent::SpawnFailed { job, reason, .. } => {
                write!(f, "Failed to start script {job}: {reason}")
            }
            RunEvent::Finished { exit, job, .. } => match exit {
                JobExit::Code(0) => write!(f, "Script completed: {job}"),
                JobExit::Code(code) => write!(f, "Process terminated with code: {code}"),
                JobExit::Signal(sig) => write!(f, "Process terminated by signal: {sig}"),
            },
            RunEvent::Lost { job, reason, .. } => {
                write!(f, "Lost track of script {job}: {reason}")
            }
            RunEvent::Draining { .. } => f.write_str("Waiting for last scripts to end"),
            RunEvent::Completed { .. } => f.write_str("All jobs are completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(exit: JobExit) -> RunEvent {
        RunEvent::Finished {
            seq: 1,
            job: "evomaster_1.sh".into(),
            exit,
        }
    }

    #[test]
    fn launch_line_carries_counter_and_name() {
        let ev = RunEvent::Launching {
            seq: 3,
            total: 10,
            job: "evomaster_7.sh".into(),
        };
        assert_eq!(ev.to_string(), "Running script 3/10: evomaster_7.sh");
    }

    #[test]
    fn non_zero_exit_cites_the_code() {
        let ev = finished(JobExit::Code(7));
        assert_eq!(ev.to_string(), "Process terminated with code: 7");
        assert!(!ev.is_quiet());
        assert!(ev.is_failure());
    }

    #[test]
    fn successful_exit_is_quiet() {
        let ev = finished(JobExit::SUCCESS);
        assert!(ev.is_quiet());
        assert!(!ev.is_failure());
    }

    #[test]
    fn signal_exit_is_reported() {
        let ev = finished(JobExit::Signal(9));
        assert_eq!(ev.to_string(), "Process terminated by signal: 9");
        assert!(ev.is_failure());
    }

    #[test]
    fn banners_match_console_wording() {
        assert_eq!(
            RunEvent::Queued { total: 4 }.to_string(),
            "There are 4 script files"
        );
        assert_eq!(
            RunEvent::Draining { remaining: 2 }.to_string(),
            "Waiting for last scripts to end"
        );
        assert_eq!(
            RunEvent::Completed {
                summary: RunSummary::default()
            }
            .to_string(),
            "All jobs are completed"
        );
    }

    #[test]
    fn job_is_exposed_only_for_job_events() {
        assert_eq!(finished(JobExit::SUCCESS).job(), Some("evomaster_1.sh"));
        assert_eq!(RunEvent::Queued { total: 0 }.job(), None);
    }
}
