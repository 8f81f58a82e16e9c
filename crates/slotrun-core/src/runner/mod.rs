//! Bounded job runner.
//!
//! Drives a list of jobs to completion with at most `slots` of them in flight:
//! - fill: launch jobs until every slot is taken or the queue is empty;
//! - steady state: poll the in-flight set, free the slots of exited jobs and refill them,
//!   sleeping for the poll interval whenever a pass frees nothing;
//! - drain: once the queue is empty, block on each remaining job.
//!
//! Job failures are reported through the [`Reporter`](crate::Reporter) and never abort the run.
mod in_flight;
pub use in_flight::{InFlightSet, Reaped, RunningJob};

mod queue;
pub use queue::JobQueue;

mod summary;
pub use summary::RunSummary;


use tracing::{debug, info, instrument, trace, warn};

use slotrun_model::{Job, JobExit};

use crate::{
    config::RunnerConfig,
    error::CoreError,
    event::{ReporterHandle, RunEvent},
    launcher::LauncherHandle,
};

/// Single-threaded scheduler owning the in-flight set and the launch counter.
pub struct JobRunner {
    config: RunnerConfig,
    launcher: LauncherHandle,
    reporter: ReporterHandle,
    in_flight: InFlightSet,
    launched: usize,
    summary: RunSummary,
}

impl JobRunner {
    /// Create a runner after validating `config`.
    pub fn new(
        config: RunnerConfig,
        launcher: LauncherHandle,
        reporter: ReporterHandle,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            in_flight: InFlightSet::new(config.slots.get()),
            config,
            launcher,
            reporter,
            launched: 0,
            summary: RunSummary::default(),
        })
    }

    /// Shuffle `jobs` and run them all.
    pub async fn run(self, jobs: Vec<Job>) -> RunSummary {
        let mut rng = self.config.rng();
        self.run_queue(JobQueue::shuffled(jobs, &mut rng)).await
    }

    /// Run the jobs of `queue` in queue order.
    #[instrument(name = "run", skip_all)]
    pub async fn run_queue(mut self, mut queue: JobQueue) -> RunSummary {
        let total = queue.len();
        debug!(
            slots = self.config.slots.get(),
            launcher = self.launcher.name(),
            total,
            "starting run"
        );
        self.summary.total = total;
        self.emit(RunEvent::Queued { total });

        let poll_interval = self.config.poll_interval();
        loop {
            self.fill(&mut queue, total);
            if queue.is_empty() {
                break;
            }
            if self.poll() == 0 {
                trace!(in_flight = self.in_flight.len(), "no slot freed; sleeping");
                tokio::time::sleep(poll_interval).await;
            }
        }

        self.drain().await;

        info!(
            total = self.summary.total,
            succeeded = self.summary.succeeded,
            failed = self.summary.failed,
            spawn_failed = self.summary.spawn_failed,
            lost = self.summary.lost,
            "run completed"
        );
        self.emit(RunEvent::Completed {
            summary: self.summary,
        });
        self.summary
    }

    /// Launch queued jobs until every slot is taken or the queue is empty.
    fn fill(&mut self, queue: &mut JobQueue, total: usize) {
        while self.in_flight.has_free_slot() {
            let Some(job) = queue.pop() else {
                return;
            };
            self.launch(job, total);
        }
    }

    fn launch(&mut self, job: Job, total: usize) {
        self.launched += 1;
        self.summary.launched += 1;
        let seq = self.launched;

        self.emit(RunEvent::Launching {
            seq,
            total,
            job: job.name().to_string(),
        });

        match self.launcher.launch(&job) {
            Ok(process) => {
                let running = RunningJob::new(seq, job, process);
                debug!(seq, job = %running.job, pid = ?running.pid(), "job launched");
                if let Err(running) = self.in_flight.insert(running) {
                    // fill() only launches into a free slot
                    warn!(seq, job = %running.job, "no free slot for launched job");
                }
            }
            Err(e) => {
                self.summary.spawn_failed += 1;
                self.emit(RunEvent::SpawnFailed {
                    seq,
                    job: job.name().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// One non-blocking pass over the in-flight set. Returns the number of freed slots.
    fn poll(&mut self) -> usize {
        let reaped = self.in_flight.reap();
        let freed = reaped.len();
        for r in reaped {
            match r {
                Reaped::Exited { job, exit } => self.finished(job, exit),
                Reaped::Lost { job, error } => self.lost(job, error.to_string()),
            }
        }
        if freed > 0 {
            trace!(freed, in_flight = self.in_flight.len(), "slots freed");
        }
        freed
    }

    /// Block on every job still in flight.
    async fn drain(&mut self) {
        let remaining = self.in_flight.take_all();
        self.emit(RunEvent::Draining {
            remaining: remaining.len(),
        });

        for mut running in remaining {
            match running.wait().await {
                Ok(exit) => self.finished(running, exit),
                Err(e) => self.lost(running, e.to_string()),
            }
        }
    }

    fn finished(&mut self, running: RunningJob, exit: JobExit) {
        if exit.is_success() {
            self.summary.succeeded += 1;
        } else {
            self.summary.failed += 1;
        }
        self.emit(RunEvent::Finished {
            seq: running.seq,
            job: running.job.name().to_string(),
            exit,
        });
    }

    fn lost(&mut self, running: RunningJob, reason: String) {
        self.summary.lost += 1;
        self.emit(RunEvent::Lost {
            seq: running.seq,
            job: running.job.name().to_string(),
            reason,
        });
    }

    #[inline]
    fn emit(&self, event: RunEvent) {
        self.reporter.on_event(&event);
    }
}
