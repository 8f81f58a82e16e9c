use std::fmt;

use serde::{Deserialize, Serialize};

/// Observed completion of a launched job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobExit {
    /// The process returned an exit code.
    Code(i32),
    /// The process was terminated by a signal (Unix only).
    Signal(i32),
}

impl JobExit {
    /// Successful completion.
    pub const SUCCESS: JobExit = JobExit::Code(0);

    /// `true` only for exit code `0`.
    pub const fn is_success(&self) -> bool {
        matches!(self, JobExit::Code(0))
    }

    /// Exit code, if the process returned one.
    pub const fn code(&self) -> Option<i32> {
        match self {
            JobExit::Code(c) => Some(*c),
            JobExit::Signal(_) => None,
        }
    }
}

impl fmt::Display for JobExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobExit::Code(c) => write!(f, "code {c}"),
            JobExit::Signal(s) => write!(f, "signal {s}"),
        }
    }
}
