// Synthetic images whose block edges line up with an 8×8 hash grid, so the
// same pattern hashes identically at any resolution that is a multiple of 8.

use image::{DynamicImage, ImageBuffer, Rgb};
use std::path::{Path, PathBuf};

const DARK: u8 = 16;
const BRIGHT: u8 = 240;

/// Two dark and two bright quadrants; `inverted` swaps them.
pub fn quadrants(width: u32, height: u32, inverted: bool) -> DynamicImage {
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let left = x < width / 2;
        let top = y < height / 2;
        let dark = (left == top) != inverted;
        let v = if dark { DARK } else { BRIGHT };
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(buffer)
}

/// Four vertical stripes, alternating dark and bright.
pub fn stripes(width: u32, height: u32) -> DynamicImage {
    let buffer = ImageBuffer::from_fn(width, height, |x, _| {
        let v = if (x * 4 / width) % 2 == 0 { DARK } else { BRIGHT };
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(buffer)
}

/// Save `image` as `dir/name`, format chosen by the extension.
pub fn save(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}
