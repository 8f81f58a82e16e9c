mod cli;

use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use slotrun_core::{JobRunner, RunSummary, discover};
use slotrun_exec::subprocess::subprocess_launcher;
use slotrun_model::{SCRIPTS_DIR, Slots};
use slotrun_observe::{ConsoleReporter, LoggerTimeZone, init_local_offset, init_logger};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    // 1) local offset must be read while the process is still single-threaded
    if cli.log_tz == LoggerTimeZone::Local {
        init_local_offset();
    }

    // 2) logger
    if let Err(err) = init_logger(&cli.logger_config()) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    // 3) runtime
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 4) run; job failures never change the exit code
    match runtime.block_on(run(cli)) {
        Ok(summary) => {
            info!(?summary, "run finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validates the arguments, discovers the jobs and drives them to completion.
async fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    let slots: Slots = cli.slots.parse()?;

    let jobs = discover(&cli.folder, &cli.discovery_config())?;
    debug!(
        folder = %cli.folder.display(),
        scripts = SCRIPTS_DIR,
        jobs = jobs.len(),
        "jobs discovered"
    );

    let launcher = subprocess_launcher(cli.spawn_config())
        .with_context(|| format!("cannot run jobs from '{}'", cli.folder.display()))?;
    let runner = JobRunner::new(
        cli.runner_config(slots),
        launcher,
        Arc::new(ConsoleReporter::new()),
    )?;

    Ok(runner.run(jobs).await)
}
