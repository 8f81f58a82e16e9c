use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Defines how a job command reaches the operating system.
///
/// Strategies:
/// - `Direct`: the script interpreter is spawned directly (`bash scripts/job.sh`).
/// - `Wrapped`: the whole command line is handed to the platform shell
///   (`cmd /C ...` on Windows, `sh -c ...` elsewhere).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShellMode {
    /// Spawn the interpreter directly.
    Direct,
    /// Go through the platform shell layer.
    Wrapped,
}

impl ShellMode {
    /// Mode appropriate for the host platform.
    ///
    /// Windows needs the platform shell to resolve `bash`; everything else spawns it directly.
    pub const fn host() -> Self {
        if cfg!(windows) {
            ShellMode::Wrapped
        } else {
            ShellMode::Direct
        }
    }

    pub const fn is_wrapped(&self) -> bool {
        matches!(self, ShellMode::Wrapped)
    }
}

impl Default for ShellMode {
    fn default() -> Self {
        Self::host()
    }
}

impl FromStr for ShellMode {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ShellMode::Direct),
            "wrapped" | "shell" => Ok(ShellMode::Wrapped),
            "host" => Ok(ShellMode::host()),
            other => Err(ModelError::UnknownShellMode(other.to_string())),
        }
    }
}

impl fmt::Display for ShellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShellMode::Direct => "direct",
            ShellMode::Wrapped => "wrapped",
        };
        f.write_str(s)
    }
}
