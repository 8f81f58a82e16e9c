use std::path::PathBuf;

use clap::Parser;

use slotrun_core::{DiscoveryConfig, RunnerConfig};
use slotrun_exec::subprocess::SpawnConfig;
use slotrun_model::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_SCRIPT_PREFIX, DEFAULT_SCRIPT_SUFFIX};
use slotrun_model::{DEFAULT_SHELL, ShellMode, Slots};
use slotrun_observe::{LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone};

#[derive(Parser, Debug)]
#[command(name = "slotrun")]
#[command(version)]
#[command(about = "Run the scripts of an experiment folder, at most N at a time.")]
pub(crate) struct Cli {
    /// Number of scripts to run in parallel (at least 1).
    #[arg(value_name = "N", allow_hyphen_values = true)]
    pub(crate) slots: String,

    /// Experiment folder; jobs are read from FOLDER/scripts and run from FOLDER.
    #[arg(value_name = "FOLDER")]
    pub(crate) folder: PathBuf,

    /// Only scripts whose name starts with this prefix are run.
    #[arg(long, default_value = DEFAULT_SCRIPT_PREFIX)]
    pub(crate) prefix: String,

    /// Only scripts whose name ends with this suffix are run.
    #[arg(long, default_value = DEFAULT_SCRIPT_SUFFIX)]
    pub(crate) suffix: String,

    /// Interpreter each script is handed to.
    #[arg(long, default_value = DEFAULT_SHELL)]
    pub(crate) shell: String,

    /// How the interpreter is spawned: direct, wrapped (through the platform shell) or host.
    #[arg(long, default_value = "host")]
    pub(crate) shell_mode: ShellMode,

    /// Delay between two checks of a full set of running scripts.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub(crate) poll_interval_ms: u64,

    /// Seed for the launch order shuffle (random when omitted).
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Diagnostics filter, e.g. `warn` or `slotrun_core=debug,info`.
    #[arg(long, default_value = "warn")]
    pub(crate) log_level: LoggerLevel,

    /// Diagnostics format: text, json or journald.
    #[arg(long, default_value = "text")]
    pub(crate) log_format: LoggerFormat,

    /// Timezone of diagnostic timestamps: utc or local.
    #[arg(long, default_value = "utc")]
    pub(crate) log_tz: LoggerTimeZone,
}

impl Cli {
    pub(crate) fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            format: self.log_format,
            level: self.log_level.clone(),
            tz: self.log_tz,
            ..Default::default()
        }
    }

    pub(crate) fn runner_config(&self, slots: Slots) -> RunnerConfig {
        RunnerConfig {
            slots,
            poll_interval_ms: self.poll_interval_ms,
            seed: self.seed,
        }
    }

    pub(crate) fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }

    pub(crate) fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig::new(&self.folder)
            .with_shell(self.shell.clone())
            .with_shell_mode(self.shell_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_with_defaults() {
        let cli = Cli::try_parse_from(["slotrun", "4", "/tmp/exp"]).unwrap();

        assert_eq!(cli.slots, "4");
        assert_eq!(cli.folder, PathBuf::from("/tmp/exp"));
        assert_eq!(cli.discovery_config(), DiscoveryConfig::default());
        assert_eq!(cli.shell, "bash");
        assert_eq!(cli.shell_mode, ShellMode::host());
        assert_eq!(cli.poll_interval_ms, 5_000);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level.as_str(), "warn");
        assert_eq!(cli.log_format, LoggerFormat::Text);
    }

    #[test]
    fn negative_n_reaches_validation() {
        let cli = Cli::try_parse_from(["slotrun", "-1", "exp"]).unwrap();
        assert_eq!(cli.slots, "-1");
        assert!(cli.slots.parse::<Slots>().is_err());
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["slotrun"]).is_err());
        assert!(Cli::try_parse_from(["slotrun", "2"]).is_err());
        assert!(Cli::try_parse_from(["slotrun", "2", "a", "b"]).is_err());
    }

    #[test]
    fn options_flow_into_configs() {
        let cli = Cli::try_parse_from([
            "slotrun",
            "3",
            "exp",
            "--prefix",
            "job_",
            "--suffix",
            ".bash",
            "--shell",
            "sh",
            "--shell-mode",
            "wrapped",
            "--poll-interval-ms",
            "250",
            "--seed",
            "11",
            "--log-level",
            "slotrun_core=debug,info",
            "--log-format",
            "json",
            "--log-tz",
            "local",
        ])
        .unwrap();

        let runner = cli.runner_config(cli.slots.parse().unwrap());
        assert_eq!(runner.slots.get(), 3);
        assert_eq!(runner.poll_interval_ms, 250);
        assert_eq!(runner.seed, Some(11));

        let discovery = cli.discovery_config();
        assert_eq!(discovery.prefix, "job_");
        assert_eq!(discovery.suffix, ".bash");

        let spawn = cli.spawn_config();
        assert_eq!(spawn.shell, "sh");
        assert_eq!(spawn.shell_mode, ShellMode::Wrapped);
        assert_eq!(spawn.working_dir, PathBuf::from("exp"));

        let logger = cli.logger_config();
        assert_eq!(logger.format, LoggerFormat::Json);
        assert_eq!(logger.tz, LoggerTimeZone::Local);
        assert_eq!(logger.level.as_str(), "slotrun_core=debug,info");
    }

    #[test]
    fn empty_shell_mode_is_rejected() {
        let result = Cli::try_parse_from(["slotrun", "1", "exp", "--shell-mode", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let result = Cli::try_parse_from(["slotrun", "1", "exp", "--log-level", "x=loud"]);
        assert!(result.is_err());
    }
}
