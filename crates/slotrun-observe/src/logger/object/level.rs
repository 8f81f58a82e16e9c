use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Default filter: only problems reach stderr, status lines stay on stdout.
const DEFAULT_LEVEL: &str = "warn";

/// Validated `tracing_subscriber::EnvFilter` expression.
///
/// Stores the raw string (e.g. `"warn"`, `"slotrun_core=trace,info"`) so it can be
/// shown back to the user and serialized, and builds the `EnvFilter` on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Creates a new `LoggerLevel`, validating the filter expression.
    ///
    /// # Examples
    /// ```
    /// use slotrun_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("slotrun_core=debug,warn").unwrap();
    /// assert_eq!(lvl.as_str(), "slotrun_core=debug,warn");
    /// assert!(LoggerLevel::new("slotrun_core=chatty").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the `EnvFilter` for this expression.
    pub fn to_env_filter(&self) -> EnvFilter {
        // Validated on construction; fall back to the default rather than panic.
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        LoggerLevel(DEFAULT_LEVEL.to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(LoggerError::InvalidLevel("empty filter".into()));
        }
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}
