//! Difference hashing of tile content

use crate::hashing::fingerprint::Fingerprint;
use image::DynamicImage;
use image::imageops::FilterType;

/// Compute the difference hash of a tile
///
/// The tile is reduced to luminance and resampled to (size + 1) columns by
/// size rows with Lanczos filtering; bit (y·size + x) records whether the
/// pixel at (x, y) is strictly brighter than its right neighbour, with ties
/// clearing the bit. The result is insensitive to uniform brightness shifts
/// and small compression artifacts but sensitive to edge structure, which is
/// what makes it suitable for flagging duplicate scans of the same artwork.
pub fn difference_hash(tile: &DynamicImage, size: u32) -> Fingerprint {
    let gray = tile.to_luma8();
    let thumbnail = image::imageops::resize(&gray, size + 1, size, FilterType::Lanczos3);

    let mut fingerprint = Fingerprint::zeroed((size * size) as usize);
    let mut bit_index = 0;
    for y in 0..size {
        for x in 0..size {
            let image::Luma([left]) = *thumbnail.get_pixel(x, y);
            let image::Luma([right]) = *thumbnail.get_pixel(x + 1, y);
            fingerprint.set(bit_index, left > right);
            bit_index += 1;
        }
    }
    fingerprint
}
