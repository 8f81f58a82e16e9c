use std::io;

use async_trait::async_trait;
use tokio::process::Child;

use slotrun_core::JobProcess;
use slotrun_model::JobExit;

use crate::exit_from_status;

/// [`JobProcess`] backed by a tokio child process.
#[derive(Debug)]
pub struct ChildProcess {
    child: Child,
}

impl ChildProcess {
    pub fn new(child: Child) -> Self {
        Self { child }
    }
}

#[async_trait]
impl JobProcess for ChildProcess {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    fn try_wait(&mut self) -> io::Result<Option<JobExit>> {
        Ok(self.child.try_wait()?.map(exit_from_status))
    }

    async fn wait(&mut self) -> io::Result<JobExit> {
        let status = self.child.wait().await?;
        Ok(exit_from_status(status))
    }
}
