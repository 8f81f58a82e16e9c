use serde::{Deserialize, Serialize};

/// Counters collected over one run.
///
/// Informational only: a run with failed jobs is still a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Jobs handed to the runner.
    pub total: usize,
    /// Launch attempts, including spawn failures.
    pub launched: usize,
    /// Jobs that exited with code 0.
    pub succeeded: usize,
    /// Jobs that exited with a non-zero code or a signal.
    pub failed: usize,
    /// Jobs that could not be started.
    pub spawn_failed: usize,
    /// Jobs whose completion could not be observed.
    pub lost: usize,
}

impl RunSummary {
    /// Jobs that did not succeed, for any reason.
    pub fn unsuccessful(&self) -> usize {
        self.failed + self.spawn_failed + self.lost
    }

    /// `true` once every job has been launched and accounted for.
    pub fn is_complete(&self) -> bool {
        self.launched == self.total
            && self.succeeded + self.unsuccessful() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::RunSummary;

    #[test]
    fn default_is_complete_and_clean() {
        let s = RunSummary::default();
        assert!(s.is_complete());
        assert_eq!(s.unsuccessful(), 0);
    }

    #[test]
    fn counts_every_kind_of_failure() {
        let s = RunSummary {
            total: 5,
            launched: 5,
            succeeded: 2,
            failed: 1,
            spawn_failed: 1,
            lost: 1,
        };
        assert_eq!(s.unsuccessful(), 3);
        assert!(s.is_complete());
    }

    #[test]
    fn missing_jobs_are_incomplete() {
        let s = RunSummary {
            total: 3,
            launched: 2,
            succeeded: 2,
            ..Default::default()
        };
        assert!(!s.is_complete());
    }
}
