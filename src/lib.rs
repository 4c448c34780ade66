//! Sheet tile extraction with emptiness filtering and perceptual deduplication
//!
//! The system splits a composite sheet image arranged as a regular grid into
//! per-tile image files, discards slots that are blank placeholders or
//! near-duplicates of already-kept tiles, and optionally assigns canonical
//! names from a fixed grid-position table.

#![forbid(unsafe_code)]

/// Tile emptiness classification from luminance statistics
pub mod analysis;
/// Grid configuration and per-cell rectangle computation
pub mod geometry;
/// Perceptual fingerprints and running duplicate detection
pub mod hashing;
/// Input/output operations and error handling
pub mod io;
/// Output naming, preset tables, and collision guarding
pub mod naming;
/// Row-major extraction pipeline over grid cells
pub mod pipeline;

pub use io::error::{Result, SplitError};
