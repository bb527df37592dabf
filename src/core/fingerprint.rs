use image::DynamicImage;
use image_hasher::{HashAlg, Hasher, HasherConfig, ImageHash};
use std::fmt;
use thiserror::Error;

/// Grid side length used when none is given on the command line.
pub const DEFAULT_HASH_SIZE: u32 = 8;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Invalid hash size {0}: must be a positive integer")]
    InvalidHashSize(u32),
}

/// Mean hash of an image reduced to a `hash_size × hash_size` grayscale grid.
///
/// Two fingerprints are equal only when every cell of the reduced grid falls
/// on the same side of the grid mean, so equality is coarse and lossy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFingerprint(ImageHash);

impl ImageFingerprint {
    /// Number of bits carried by the fingerprint.
    pub fn bits(&self) -> usize {
        self.0.as_bytes().len() * 8
    }
}

impl From<ImageHash> for ImageFingerprint {
    fn from(hash: ImageHash) -> Self {
        Self(hash)
    }
}

impl fmt::Display for ImageFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_base64())
    }
}

/// Fingerprints images at a fixed hash size, reusing one configured hasher.
pub struct Fingerprinter {
    hash_size: u32,
    hasher: Hasher,
}

impl Fingerprinter {
    pub fn new(hash_size: u32) -> Result<Self, FingerprintError> {
        if hash_size == 0 {
            return Err(FingerprintError::InvalidHashSize(hash_size));
        }

        let hasher = HasherConfig::new()
            .hash_alg(HashAlg::Mean)
            .hash_size(hash_size, hash_size)
            .to_hasher();

        Ok(Self { hash_size, hasher })
    }

    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    pub fn fingerprint(&self, image: &DynamicImage) -> ImageFingerprint {
        ImageFingerprint(self.hasher.hash_image(image))
    }
}

impl fmt::Debug for Fingerprinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprinter")
            .field("hash_size", &self.hash_size)
            .finish_non_exhaustive()
    }
}

/// One-off fingerprint of `image` at `hash_size`.
pub fn fingerprint(
    image: &DynamicImage,
    hash_size: u32,
) -> Result<ImageFingerprint, FingerprintError> {
    Ok(Fingerprinter::new(hash_size)?.fingerprint(image))
}
