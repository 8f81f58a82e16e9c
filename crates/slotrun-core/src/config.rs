use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use slotrun_model::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SCRIPT_PREFIX, DEFAULT_SCRIPT_SUFFIX};
use slotrun_model::{PollIntervalMs, Slots};

use crate::error::CoreError;

/// Scheduling configuration for [`crate::JobRunner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Maximum number of jobs in flight.
    pub slots: Slots,
    /// Sleep between two polls of a full in-flight set.
    pub poll_interval_ms: PollIntervalMs,
    /// Seed for the launch-order shuffle. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            slots: Slots::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            seed: None,
        }
    }
}

impl RunnerConfig {
    /// Config with the given number of slots and default everything else.
    pub fn new(slots: Slots) -> Self {
        Self {
            slots,
            ..Default::default()
        }
    }

    pub fn with_poll_interval_ms(mut self, ms: PollIntervalMs) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration.
    ///
    /// Rules:
    /// - `poll_interval_ms` is not zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.poll_interval_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "poll_interval_ms cannot be zero".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// RNG used to shuffle the job queue.
    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Which files in the scripts directory count as jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Required file name prefix.
    pub prefix: String,
    /// Required file name suffix.
    pub suffix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SCRIPT_PREFIX.to_string(),
            suffix: DEFAULT_SCRIPT_SUFFIX.to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Returns `true` if `name` carries both the prefix and the suffix.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(&self.suffix)
    }
}
