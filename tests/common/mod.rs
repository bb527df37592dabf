#![allow(dead_code)]

use rmi_dup::config::Config;
use tempfile::TempDir;

#[path = "../../src/core/test_images.rs"]
mod test_images;

pub use test_images::{quadrants, save, stripes};

pub fn config(dir: &TempDir, list_only: bool, extension: Option<&str>) -> Config {
    Config::new(
        dir.path().to_path_buf(),
        list_only,
        8,
        extension.map(str::to_string),
    )
    .unwrap()
    .with_progress(false)
}
