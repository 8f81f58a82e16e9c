use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::logger::error::LoggerError;

/// Local offset detected once per process.
static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Timezone for log timestamps.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone, detected by [`init_local_offset`].
    Local,
}

impl LoggerTimeZone {
    /// Offset to apply to timestamps.
    pub fn offset(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => init_local_offset(),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        };
        f.write_str(s)
    }
}

/// Detects the local UTC offset and caches it for the process lifetime.
///
/// **Call in `main()` before the tokio runtime starts**: on most Unix platforms
/// detection refuses to run once the process has several threads.
/// Falls back to UTC when detection fails.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_utc() {
        assert_eq!(LoggerTimeZone::default(), LoggerTimeZone::Utc);
        assert_eq!(LoggerTimeZone::Utc.offset(), UtcOffset::UTC);
    }

    #[test]
    fn parses_case_insensitive() {
        assert_eq!(LoggerTimeZone::from_str("UTC").unwrap(), LoggerTimeZone::Utc);
        assert_eq!(LoggerTimeZone::from_str("Local").unwrap(), LoggerTimeZone::Local);
        assert!(LoggerTimeZone::from_str("pst").is_err());
    }

    #[test]
    fn local_offset_is_cached_and_sane() {
        let first = init_local_offset();
        assert_eq!(first, LoggerTimeZone::Local.offset());
        assert!(first.whole_hours().abs() <= 14);
    }
}
