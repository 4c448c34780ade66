//! Emptiness classification for extracted tiles

use crate::analysis::luminance::luminance_plane;
use crate::io::configuration::{DEFAULT_EMPTY_MEAN, DEFAULT_EMPTY_STD_DEV};
use image::DynamicImage;

/// Threshold pair for the two-condition emptiness rule
///
/// Both cutoffs apply to the 0-255 luminance scale and both are
/// configuration inputs so boundary behavior stays testable.
#[derive(Debug, Clone, Copy)]
pub struct EmptinessThresholds {
    /// Population standard deviation below which a tile counts as flat
    pub std_dev: f64,
    /// Mean luminance below which a tile counts as dark
    pub mean: f64,
}

impl Default for EmptinessThresholds {
    fn default() -> Self {
        Self {
            std_dev: DEFAULT_EMPTY_STD_DEV,
            mean: DEFAULT_EMPTY_MEAN,
        }
    }
}

/// Decide whether a tile is an unused grid slot
///
/// A tile is empty iff it is both near-flat (no printed content) and dark
/// (matches a placeholder slot's background). Both conditions are required:
/// a flat but bright tile, such as a plain light-colored card, is kept.
pub fn is_empty_tile(tile: &DynamicImage, thresholds: EmptinessThresholds) -> bool {
    let plane = luminance_plane(tile);

    let Some(mean) = plane.mean() else {
        // Zero-area tiles cannot occur for validated geometry
        return false;
    };
    let std_dev = plane.std(0.0);

    std_dev < thresholds.std_dev && mean < thresholds.mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn uniform_tile(value: u8) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            16,
            16,
            Rgba([value, value, value, 255]),
        ))
    }

    // Tests that a solid black tile is classified as an unused slot
    #[test]
    fn test_uniform_black_tile_is_empty() {
        assert!(is_empty_tile(
            &uniform_tile(0),
            EmptinessThresholds::default()
        ));
    }

    // Tests that a flat but bright tile is kept regardless of variance
    #[test]
    fn test_uniform_bright_tile_is_not_empty() {
        assert!(!is_empty_tile(
            &uniform_tile(200),
            EmptinessThresholds::default()
        ));
    }

    // Tests that the mean cutoff is a configuration input, not a constant
    #[test]
    fn test_mean_threshold_is_configurable() {
        let permissive = EmptinessThresholds {
            std_dev: 2.0,
            mean: 250.0,
        };
        assert!(is_empty_tile(&uniform_tile(200), permissive));
    }
}
