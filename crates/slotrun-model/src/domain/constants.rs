//! Common model-level constants.
//!
//! Defaults shared by discovery, the runner and the command-line front-end.

/// Name of the subdirectory of the experiment folder that holds the job scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// File name prefix a script must carry to be picked up as a job.
pub const DEFAULT_SCRIPT_PREFIX: &str = "evomaster";

/// File name suffix a script must carry to be picked up as a job.
pub const DEFAULT_SCRIPT_SUFFIX: &str = ".sh";

/// Program used to execute each script.
pub const DEFAULT_SHELL: &str = "bash";

/// Delay between two polls of a full in-flight set.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;
