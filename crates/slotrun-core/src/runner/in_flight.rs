use std::{fmt, io};

use slotrun_model::{Job, JobExit};

use crate::launcher::JobProcess;

/// A launched job and the handle used to observe it.
pub struct RunningJob {
    /// 1-based launch position.
    pub seq: usize,
    pub job: Job,
    process: Box<dyn JobProcess>,
}

impl RunningJob {
    pub fn new(seq: usize, job: Job, process: Box<dyn JobProcess>) -> Self {
        Self { seq, job, process }
    }

    #[inline]
    pub fn pid(&self) -> Option<u32> {
        self.process.id()
    }

    /// Block until the job exits.
    pub async fn wait(&mut self) -> io::Result<JobExit> {
        self.process.wait().await
    }
}

impl fmt::Debug for RunningJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunningJob")
            .field("seq", &self.seq)
            .field("job", &self.job.name())
            .field("pid", &self.pid())
            .finish()
    }
}

/// Outcome of one poll for a single job.
#[derive(Debug)]
pub enum Reaped {
    /// The job exited.
    Exited { job: RunningJob, exit: JobExit },
    /// Polling the job failed; it is no longer tracked.
    Lost { job: RunningJob, error: io::Error },
}

/// Jobs launched and not yet observed to exit.
///
/// Never holds more than `capacity` jobs.
#[derive(Debug)]
pub struct InFlightSet {
    capacity: usize,
    jobs: Vec<RunningJob>,
}

impl InFlightSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // N may be far larger than the job count; grow on demand.
            jobs: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[inline]
    pub fn has_free_slot(&self) -> bool {
        self.jobs.len() < self.capacity
    }

    /// Track a launched job.
    ///
    /// Gives the job back if every slot is taken.
    pub fn insert(&mut self, job: RunningJob) -> Result<(), RunningJob> {
        if !self.has_free_slot() {
            return Err(job);
        }
        self.jobs.push(job);
        Ok(())
    }

    /// Poll every job once without blocking and remove the ones that are done.
    ///
    /// Returned in launch order.
    pub fn reap(&mut self) -> Vec<Reaped> {
        let mut reaped = Vec::new();
        let mut i = 0;
        while i < self.jobs.len() {
            match self.jobs[i].process.try_wait() {
                Ok(None) => i += 1,
                Ok(Some(exit)) => {
                    let job = self.jobs.remove(i);
                    reaped.push(Reaped::Exited { job, exit });
                }
                Err(error) => {
                    let job = self.jobs.remove(i);
                    reaped.push(Reaped::Lost { job, error });
                }
            }
        }
        reaped
    }

    /// Remove and return every tracked job.
    pub fn take_all(&mut self) -> Vec<RunningJob> {
        std::mem::take(&mut self.jobs)
    }
}
