mod job;
pub use job::Job;

mod exit;
pub use exit::JobExit;
