use std::{convert::TryFrom, fmt, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of jobs allowed to run at the same time.
///
/// A `Slots` value is always at least `1`:
/// - text input is parsed as a signed integer so that `0` and negative values are reported as invalid
///   rather than as parse failures;
/// - serde goes through [`TryFrom<u64>`], so config files are validated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64")]
#[serde(into = "u64")]
pub struct Slots(NonZeroUsize);

impl Slots {
    /// Creates a new `Slots` value.
    ///
    /// # Examples
    /// ```
    /// use slotrun_model::Slots;
    ///
    /// assert_eq!(Slots::new(4).unwrap().get(), 4);
    /// assert!(Slots::new(0).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self, ModelError> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidSlots(n.to_string()))
    }

    /// Returns the limit as a plain `usize`.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for Slots {
    fn default() -> Self {
        Self(NonZeroUsize::MIN)
    }
}

impl FromStr for Slots {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidSlots(s.to_string()))?;
        Self::try_from(n)
    }
}

impl TryFrom<i64> for Slots {
    type Error = ModelError;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map_err(|_| ModelError::InvalidSlots(n.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<u64> for Slots {
    type Error = ModelError;
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map_err(|_| ModelError::InvalidSlots(n.to_string()))
            .and_then(Self::new)
    }
}

impl From<Slots> for u64 {
    fn from(s: Slots) -> Self {
        s.get() as u64
    }
}

impl fmt::Display for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
