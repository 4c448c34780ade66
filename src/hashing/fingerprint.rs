//! Fixed-width binary fingerprints compared by Hamming distance

use bitvec::prelude::{BitVec, Lsb0, bitvec};
use std::fmt;

/// Fixed-width perceptual fingerprint of one tile
///
/// Bit ordering is row-major in hash-grid iteration order, least-significant
/// bit first, so independently computed hashes of identical content are
/// bit-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    bits: BitVec<u64, Lsb0>,
}

impl Fingerprint {
    /// Create an all-clear fingerprint with the given bit width
    pub fn zeroed(width: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; width],
        }
    }

    /// Collect bits in iteration order, least-significant first
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Set the bit at a flattened index
    ///
    /// Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if index < self.bits.len() {
            self.bits.set(index, value);
        }
    }

    /// Test the bit at a flattened index
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of bits in the fingerprint
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Count of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Count of differing bits between two fingerprints
    ///
    /// Within one run all fingerprints share a width; a width mismatch counts
    /// every non-overlapping bit as a difference.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        let overlap = self
            .bits
            .iter()
            .by_vals()
            .zip(other.bits.iter().by_vals())
            .filter(|(a, b)| a != b)
            .count();
        overlap + self.width().abs_diff(other.width())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.bits.as_raw_slice() {
            write!(f, "{word:016x}")?;
        }
        Ok(())
    }
}
