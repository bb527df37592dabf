use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::grouping::DuplicateGroups;

/// Paths slated for removal. Never touches the filesystem to build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    /// Duplicate images, group by group.
    pub images: Vec<PathBuf>,
    /// Companion files sharing a duplicate's base name.
    pub secondary: Vec<PathBuf>,
}

impl DeletionPlan {
    pub fn len(&self) -> usize {
        self.images.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.secondary.is_empty()
    }
}

/// Plan removal of every duplicate in `groups`, plus `<stem><extension>`
/// companions when a secondary extension is given. Keepers are never planned.
pub fn plan_deletions(
    groups: &DuplicateGroups,
    directory: &Path,
    secondary_extension: Option<&str>,
) -> DeletionPlan {
    let extension = secondary_extension
        .filter(|ext| !ext.is_empty())
        .map(normalize_extension);

    let mut plan = DeletionPlan::default();
    for group in groups {
        for duplicate in &group.duplicates {
            plan.images.push(directory.join(&duplicate.name));
            if let Some(ext) = &extension {
                plan.secondary
                    .push(directory.join(companion_name(&duplicate.name, ext)));
            }
        }
    }
    plan
}

/// `txt` and `.txt` both mean `.txt`.
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

fn companion_name(name: &OsStr, extension: &str) -> OsString {
    let mut companion = Path::new(name).file_stem().unwrap_or(name).to_os_string();
    companion.push(extension);
    companion
}
