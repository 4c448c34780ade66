//! Output name resolution with within-run collision guarding

use crate::io::configuration::SEQUENTIAL_INDEX_WIDTH;
use std::collections::HashSet;

/// Allocates output base names and guards against within-run collisions
///
/// Names are claimed before the corresponding file write is attempted so the
/// used set stays consistent even if a later write fails. Collisions against
/// files left behind by earlier runs in the same output directory are not
/// checked; those files are simply overwritten.
#[derive(Debug)]
pub struct NameResolver {
    prefix: String,
    cols: u32,
    used: HashSet<String>,
}

impl NameResolver {
    /// Create a resolver for a grid with the given column count
    pub fn new(prefix: impl Into<String>, cols: u32) -> Self {
        Self {
            prefix: prefix.into(),
            cols,
            used: HashSet::new(),
        }
    }

    /// Sequential fallback name for a cell at 0-based grid indices
    ///
    /// The index is 1-based in row-major order and zero-padded to two digits.
    pub fn fallback_name(&self, row_index: u32, col_index: u32) -> String {
        let index = row_index * self.cols + col_index + 1;
        format!(
            "{}_{index:0width$}",
            self.prefix,
            width = SEQUENTIAL_INDEX_WIDTH
        )
    }

    /// Claim a base name for this run
    ///
    /// Returns false when the name was already claimed, in which case the
    /// caller must skip the tile rather than overwrite the first writer's
    /// output.
    pub fn claim(&mut self, name: &str) -> bool {
        self.used.insert(name.to_owned())
    }

    /// Whether a name has been claimed in this run
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}
