pub mod fingerprint;
pub mod grouping;
pub mod image;
pub mod planner;
pub mod remover;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_images;

pub use self::fingerprint::{DEFAULT_HASH_SIZE, Fingerprinter, ImageFingerprint, fingerprint};
pub use self::grouping::{DuplicateGroups, FingerprintGroup, Placement};
pub use self::image::{CandidateFile, LoadError, LoadOutcome};
pub use self::planner::{DeletionPlan, plan_deletions};
pub use self::remover::{RemovalReport, remove_planned};
pub use self::scanner::{ScanError, ScanReport, Scanner};
