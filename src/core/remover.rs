use indicatif::ProgressBar;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::planner::DeletionPlan;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RemovalReport {
    pub removed: Vec<PathBuf>,
    /// Paths that still exist and need manual attention.
    pub failed: Vec<PathBuf>,
}

/// Remove every path in `plan`. A failure never stops the remaining removals.
///
/// A missing companion file only means there was nothing to remove, so it
/// does not count as a failure; a missing image does.
pub fn remove_planned(plan: &DeletionPlan, progress: &ProgressBar) -> RemovalReport {
    progress.set_length(plan.len() as u64);
    progress.set_position(0);

    let mut report = RemovalReport::default();

    for path in &plan.images {
        match fs::remove_file(path) {
            Ok(()) => report.removed.push(path.clone()),
            Err(e) => {
                log::debug!("Failed to delete {}: {}", path.display(), e);
                report.failed.push(path.clone());
            }
        }
        progress.inc(1);
    }

    for path in &plan.secondary {
        match fs::remove_file(path) {
            Ok(()) => report.removed.push(path.clone()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No companion file {}", path.display());
            }
            Err(e) => {
                log::debug!("Failed to delete {}: {}", path.display(), e);
                report.failed.push(path.clone());
            }
        }
        progress.inc(1);
    }

    progress.finish();
    report
}
