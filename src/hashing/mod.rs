//! Perceptual fingerprints and running duplicate detection
//!
//! This module contains the near-duplicate filtering machinery:
//! - Fixed-width binary fingerprints compared by Hamming distance
//! - Difference hashing of tile content
//! - The running kept-fingerprint collection for one pipeline run

/// Running near-duplicate detection over kept fingerprints
pub mod dedupe;
/// Difference hashing of tile content
pub mod dhash;
/// Fixed-width binary fingerprints
pub mod fingerprint;

pub use dedupe::{DedupeConfig, DuplicateDetector};
pub use dhash::difference_hash;
pub use fingerprint::Fingerprint;
