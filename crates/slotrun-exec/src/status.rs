//! Conversion of OS exit statuses into [`JobExit`].

use std::process::ExitStatus;

use slotrun_model::JobExit;

/// Map an OS exit status to a [`JobExit`].
///
/// Unix signal terminations carry no exit code and map to [`JobExit::Signal`].
pub fn exit_from_status(status: ExitStatus) -> JobExit {
    if let Some(code) = status.code() {
        return JobExit::Code(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(sig) = status.signal() {
            return JobExit::Signal(sig);
        }
    }
    JobExit::Code(-1)
}
