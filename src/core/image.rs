use image::{DynamicImage, ImageReader};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Decode(#[from] image::ImageError),
}

/// A readable image in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Entry name relative to the scanned directory, exactly as listed.
    pub name: OsString,
    /// Horizontal resolution in pixels; the only metric used to pick a keeper.
    pub width: u32,
}

impl CandidateFile {
    pub fn new(name: impl Into<OsString>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    /// Name for printing; never use it to build a path.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Result of trying to open one directory entry as an image.
#[derive(Debug)]
pub enum LoadOutcome {
    Decoded(DynamicImage),
    Unreadable(LoadError),
}

impl LoadOutcome {
    /// Open and decode `path`. The file handle is closed before this returns,
    /// whichever variant comes back.
    pub fn open(path: &Path) -> Self {
        match decode(path) {
            Ok(image) => LoadOutcome::Decoded(image),
            Err(e) => LoadOutcome::Unreadable(e),
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage, LoadError> {
    // Sniff the content first so a PNG saved as `.jpg` still decodes.
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}
