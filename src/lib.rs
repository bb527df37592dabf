//! Find and remove duplicate images in a single directory.
//!
//! Images are compared by mean hash, so the same picture saved at another
//! resolution or in another format counts as a duplicate. In each group of
//! matching images the widest one is kept.

pub mod app;
pub mod config;
pub mod core;
pub mod interrupt;
pub mod progress;
pub mod prompt;

pub use app::{RunOutcome, run};
pub use config::{Config, ConfigError};
