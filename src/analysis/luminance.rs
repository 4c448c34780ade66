//! Single-channel luminance plane extraction

use image::DynamicImage;
use ndarray::Array2;

/// Convert a tile to a (height, width) luminance plane on a 0-255 scale
///
/// The plane feeds the emptiness statistics; hashing performs its own
/// grayscale reduction on the resampled thumbnail instead.
pub fn luminance_plane(tile: &DynamicImage) -> Array2<f64> {
    let gray = tile.to_luma8();
    let (width, height) = gray.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let image::Luma([value]) = *gray.get_pixel(x as u32, y as u32);
        f64::from(value)
    })
}
