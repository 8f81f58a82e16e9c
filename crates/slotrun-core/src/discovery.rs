//! Job discovery: turns the scripts directory of an experiment folder into a list of jobs.
use std::{fs, path::Path};

use tracing::{debug, trace};

use slotrun_model::{Job, SCRIPTS_DIR};

use crate::{config::DiscoveryConfig, error::CoreError};

/// List `<folder>/scripts` and return one [`Job`] per matching regular file.
///
/// Jobs are sorted by name; the runner is responsible for randomizing launch order.
/// A missing folder or scripts directory is an error, an empty one is not.
pub fn discover(folder: &Path, cfg: &DiscoveryConfig) -> Result<Vec<Job>, CoreError> {
    let dir = folder.join(SCRIPTS_DIR);
    let listing_error = |reason: String| CoreError::Discovery {
        path: dir.display().to_string(),
        reason,
    };

    if !folder.is_dir() {
        return Err(listing_error(format!(
            "folder '{}' does not exist or is not a directory",
            folder.display()
        )));
    }
    let entries = fs::read_dir(&dir).map_err(|e| listing_error(e.to_string()))?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| listing_error(e.to_string()))?;
        let Ok(name) = entry.file_name().into_string() else {
            debug!(path = ?entry.path(), "skipping non UTF-8 file name");
            continue;
        };
        // Follows symlinks, so a link to a script counts as a script.
        if !entry.path().is_file() || !cfg.matches(&name) {
            trace!(file = %name, "skipping");
            continue;
        }
        jobs.push(Job::script(name)?);
    }
    jobs.sort_by(|a, b| a.name().cmp(b.name()));

    debug!(dir = %dir.display(), jobs = jobs.len(), "scripts discovered");
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_with(files: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let scripts = tmp.path().join(SCRIPTS_DIR);
        fs::create_dir(&scripts).unwrap();
        for f in files {
            fs::write(scripts.join(f), "exit 0\n").unwrap();
        }
        tmp
    }

    #[test]
    fn keeps_only_matching_regular_files() {
        let tmp = folder_with(&[
            "evomaster_2.sh",
            "evomaster_1.sh",
            "other_3.sh",
            "evomaster_4.txt",
            "README.md",
        ]);
        fs::create_dir(tmp.path().join(SCRIPTS_DIR).join("evomaster_dir.sh")).unwrap();

        let jobs = discover(tmp.path(), &DiscoveryConfig::default()).unwrap();
        let names: Vec<&str> = jobs.iter().map(|j| j.name()).collect();

        assert_eq!(names, vec!["evomaster_1.sh", "evomaster_2.sh"]);
        assert_eq!(
            jobs[0].script_path(),
            Path::new(SCRIPTS_DIR).join("evomaster_1.sh")
        );
    }

    #[test]
    fn empty_scripts_dir_yields_no_jobs() {
        let tmp = folder_with(&[]);
        let jobs = discover(tmp.path(), &DiscoveryConfig::default()).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn custom_prefix_and_suffix() {
        let tmp = folder_with(&["job_a.bash", "job_b.sh", "evomaster_c.sh"]);
        let cfg = DiscoveryConfig {
            prefix: "job_".into(),
            suffix: ".bash".into(),
        };

        let jobs = discover(tmp.path(), &cfg).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name(), "job_a.bash");
    }

    #[test]
    fn missing_folder_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");

        let err = discover(&missing, &DiscoveryConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::Discovery { .. }));
    }

    #[test]
    fn missing_scripts_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();

        let err = discover(tmp.path(), &DiscoveryConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::Discovery { .. }));
    }
}
