use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};

use slotrun_model::Job;

/// Jobs not launched yet, consumed front to back.
///
/// The order is fixed at construction.
#[derive(Debug, Default)]
pub struct JobQueue {
    jobs: VecDeque<Job>,
}

impl JobQueue {
    /// Queue in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(mut jobs: Vec<Job>, rng: &mut R) -> Self {
        jobs.shuffle(rng);
        Self::in_order(jobs)
    }

    /// Queue in the given order.
    pub fn in_order(jobs: Vec<Job>) -> Self {
        Self { jobs: jobs.into() }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Job> {
        self.jobs.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
