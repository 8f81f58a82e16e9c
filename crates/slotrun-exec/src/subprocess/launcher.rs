use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use slotrun_core::{JobProcess, LaunchError, Launcher};
use slotrun_model::Job;

use crate::{
    ExecError,
    subprocess::{config::SpawnConfig, process::ChildProcess},
};

/// Launcher that runs each job as an OS subprocess.
///
/// Standard streams are inherited, so job output goes straight to the console.
pub struct ScriptLauncher {
    /// Launcher name.
    name: &'static str,
    /// Spawn configuration shared by every job.
    config: SpawnConfig,
}

impl ScriptLauncher {
    /// Create a launcher after validating `config`.
    pub fn new(name: &'static str, config: SpawnConfig) -> Result<Self, ExecError> {
        config.validate()?;
        config.trace_state();
        Ok(Self { name, config })
    }

    /// Build the command for `job`.
    fn build_command(&self, job: &Job) -> Command {
        let (program, args) = self.config.command_line(job);
        trace!(
            job = %job,
            program = %program,
            args = ?args,
            cwd = %self.config.working_dir.display(),
            "building job command",
        );

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(&self.config.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Launcher for ScriptLauncher {
    fn name(&self) -> &'static str {
        self.name
    }

    fn launch(&self, job: &Job) -> Result<Box<dyn JobProcess>, LaunchError> {
        let mut cmd = self.build_command(job);
        let child = cmd.spawn().map_err(|e| LaunchError::Spawn {
            job: job.name().to_string(),
            reason: e.to_string(),
        })?;

        debug!(job = %job, pid = ?child.id(), "subprocess spawned");
        Ok(Box::new(ChildProcess::new(child)))
    }
}
