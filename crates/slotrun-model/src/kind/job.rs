use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{SCRIPTS_DIR, error::ModelError};

/// One schedulable unit of work: a script to execute.
///
/// `script` is relative to the working directory jobs are started in,
/// so a job named `evomaster_1.sh` runs as `<shell> scripts/evomaster_1.sh`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    name: String,
    script: PathBuf,
}

impl Job {
    /// Create a job for a script stored in the `scripts` directory.
    ///
    /// # Examples
    /// ```
    /// use slotrun_model::Job;
    ///
    /// let job = Job::script("evomaster_1.sh").unwrap();
    /// assert_eq!(job.name(), "evomaster_1.sh");
    /// assert!(job.script_path().ends_with("evomaster_1.sh"));
    /// ```
    pub fn script(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        let script = Path::new(SCRIPTS_DIR).join(&name);
        Self::new(name, script)
    }

    /// Create a job with an explicit script path.
    pub fn new(name: impl Into<String>, script: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::Invalid("job name is empty".into()));
        }
        Ok(Self {
            name,
            script: script.into(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn script_path(&self) -> &Path {
        &self.script
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_lives_under_scripts_dir() {
        let job = Job::script("evomaster_42.sh").unwrap();
        assert_eq!(job.script_path(), Path::new("scripts").join("evomaster_42.sh"));
        assert_eq!(job.to_string(), "evomaster_42.sh");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(Job::script("").is_err());
        assert!(Job::new("   ", "x.sh").is_err());
    }
}
