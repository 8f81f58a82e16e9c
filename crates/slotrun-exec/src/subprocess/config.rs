use std::path::PathBuf;

use tracing::trace;

use slotrun_model::{DEFAULT_SHELL, Job, ShellMode};

use crate::ExecError;

/// How jobs are turned into processes.
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    /// Interpreter the script is handed to (e.g. `"bash"`, `"/bin/sh"`).
    pub shell: String,
    /// Whether the interpreter is spawned directly or through the platform shell.
    pub shell_mode: ShellMode,
    /// Working directory for every job; script paths are resolved against it.
    pub working_dir: PathBuf,
}

impl SpawnConfig {
    /// Config for `working_dir` with the default interpreter and the host shell mode.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            shell_mode: ShellMode::host(),
            working_dir: working_dir.into(),
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_shell_mode(mut self, mode: ShellMode) -> Self {
        self.shell_mode = mode;
        self
    }

    /// Validate the configuration before spawning anything.
    ///
    /// Rules:
    /// - `shell` is not empty or whitespace-only;
    /// - `working_dir` is an existing directory.
    pub fn validate(&self) -> Result<(), ExecError> {
        if self.shell.trim().is_empty() {
            return Err(ExecError::InvalidSpec("shell program is empty".into()));
        }
        if !self.working_dir.is_dir() {
            return Err(ExecError::InvalidSpec(format!(
                "working directory '{}' does not exist",
                self.working_dir.display()
            )));
        }
        Ok(())
    }

    /// Program and arguments used to run `job`.
    ///
    /// - `Direct`: `<shell> <script>`
    /// - `Wrapped` on Windows: `cmd /C <shell> <script>`
    /// - `Wrapped` elsewhere: `sh -c 'exec "$0" "$@"' <shell> <script>`
    pub fn command_line(&self, job: &Job) -> (String, Vec<String>) {
        let script = job.script_path().display().to_string();
        match self.shell_mode {
            ShellMode::Direct => (self.shell.clone(), vec![script]),
            ShellMode::Wrapped if cfg!(windows) => (
                "cmd".to_string(),
                vec!["/C".to_string(), self.shell.clone(), script],
            ),
            ShellMode::Wrapped => (
                "sh".to_string(),
                vec![
                    "-c".to_string(),
                    r#"exec "$0" "$@""#.to_string(),
                    self.shell.clone(),
                    script,
                ],
            ),
        }
    }

    /// Emit a trace-level log with the essential configuration fields.
    pub fn trace_state(&self) {
        trace!(
            shell = %self.shell,
            shell_mode = %self.shell_mode,
            cwd = %self.working_dir.display(),
            "spawn config resolved"
        );
    }
}
