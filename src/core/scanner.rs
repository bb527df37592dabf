use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::core::fingerprint::{FingerprintError, Fingerprinter, ImageFingerprint};
use crate::core::grouping::{DuplicateGroups, Placement};
use crate::core::image::{CandidateFile, LoadError, LoadOutcome};

/// Entries whose name contains this are never opened.
pub const EXCLUDED_MARKER: &str = ".psd";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid directory: {path}")]
    InvalidDirectory { path: PathBuf },

    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Fingerprint error: {0}")]
    Fingerprint(#[from] FingerprintError),

    #[error("Scan interrupted")]
    Interrupted,
}

/// Why an entry did not become a candidate.
#[derive(Debug)]
pub enum SkipReason {
    NotAFile,
    Excluded,
    Unreadable(LoadError),
    Unlisted(walkdir::Error),
}

#[derive(Debug)]
pub struct ScanReport {
    pub groups: DuplicateGroups,
    /// Every entry the listing produced, readable or not.
    pub entries: usize,
    /// Entries that decoded and were fingerprinted.
    pub hashed: usize,
    pub skipped: usize,
    pub hash_size: u32,
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn duplicate_count(&self) -> usize {
        self.groups.duplicate_count()
    }
}

pub struct Scanner {
    fingerprinter: Fingerprinter,
    cancellation_token: Arc<AtomicBool>,
}

impl Scanner {
    pub fn new(hash_size: u32) -> Result<Self, ScanError> {
        Ok(Self {
            fingerprinter: Fingerprinter::new(hash_size)?,
            cancellation_token: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn with_cancellation_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancellation_token = token;
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation_token.load(Ordering::Relaxed)
    }

    /// Fingerprint every readable image directly inside `dir` and group them.
    ///
    /// Unreadable and excluded entries are skipped; only an interrupt stops
    /// the scan early.
    pub fn scan(&self, dir: &Path, progress: &ProgressBar) -> Result<ScanReport, ScanError> {
        if !dir.is_dir() {
            return Err(ScanError::InvalidDirectory {
                path: dir.to_path_buf(),
            });
        }

        let start = Instant::now();
        let entries = list_entries(dir)?;
        let total = entries.len();
        log::info!("Scanning {} entries in {}", total, dir.display());

        progress.set_length(total as u64);
        progress.set_position(0);

        let mut groups = DuplicateGroups::new();
        let mut hashed = 0;
        let mut skipped = 0;

        for entry in entries {
            if self.is_cancelled() {
                progress.abandon();
                return Err(ScanError::Interrupted);
            }

            match self.candidate(entry) {
                Ok((fingerprint, file)) => {
                    hashed += 1;
                    match groups.insert(fingerprint, file.clone()) {
                        Placement::NewGroup => {}
                        Placement::Keeper { displaced } => log::debug!(
                            "{} ({}px) replaces {} ({}px) as keeper",
                            file.display_name(),
                            file.width,
                            displaced.display_name(),
                            displaced.width
                        ),
                        Placement::Duplicate { keeper } => {
                            log::debug!(
                                "{} duplicates {}",
                                file.display_name(),
                                keeper.display_name()
                            )
                        }
                    }
                }
                Err((name, reason)) => {
                    skipped += 1;
                    log::debug!("Skipping {}: {:?}", name, reason);
                }
            }
            progress.inc(1);
        }

        progress.finish();
        let elapsed = start.elapsed();
        log::info!(
            "Hashed {} of {} entries in {:.2?}, {} skipped",
            hashed,
            total,
            elapsed,
            skipped
        );

        Ok(ScanReport {
            groups,
            entries: total,
            hashed,
            skipped,
            hash_size: self.fingerprinter.hash_size(),
            elapsed,
        })
    }

    fn candidate(
        &self,
        entry: Result<DirEntry, walkdir::Error>,
    ) -> Result<(ImageFingerprint, CandidateFile), (String, SkipReason)> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let name = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                return Err((name, SkipReason::Unlisted(e)));
            }
        };

        let display = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() {
            return Err((display, SkipReason::NotAFile));
        }
        if is_excluded(&display) {
            return Err((display, SkipReason::Excluded));
        }

        // The decoded image is dropped at the end of this call, before the
        // next entry is opened.
        match LoadOutcome::open(entry.path()) {
            LoadOutcome::Decoded(image) => {
                let fingerprint = self.fingerprinter.fingerprint(&image);
                let width = image.width();
                Ok((fingerprint, CandidateFile::new(entry.file_name(), width)))
            }
            LoadOutcome::Unreadable(e) => Err((display, SkipReason::Unreadable(e))),
        }
    }
}

/// Case-sensitive substring match on the entry name.
pub fn is_excluded(name: &str) -> bool {
    name.contains(EXCLUDED_MARKER)
}

/// Immediate children of `dir`, in platform listing order.
fn list_entries(dir: &Path) -> Result<Vec<Result<DirEntry, walkdir::Error>>, ScanError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).max_depth(1) {
        match entry {
            Ok(entry) if entry.depth() == 0 => continue,
            Err(e) if e.depth() == 0 => return Err(ScanError::Walk(e)),
            other => entries.push(other),
        }
    }
    Ok(entries)
}
