mod slots;
pub use slots::Slots;

mod constants;
pub use constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SCRIPT_PREFIX, DEFAULT_SCRIPT_SUFFIX};
pub use constants::{DEFAULT_SHELL, SCRIPTS_DIR};

/// Poll interval in milliseconds.
///
/// Used by the runner between two passes over the in-flight set when no slot has been freed.
pub type PollIntervalMs = u64;
