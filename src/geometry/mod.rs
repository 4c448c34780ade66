//! Grid geometry for composite sheet images
//!
//! Computes the pixel rectangle of every grid cell from the sheet dimensions
//! and layout parameters, validating the configuration before any cropping.

/// Grid configuration and per-cell rectangle computation
pub mod grid;

pub use grid::{CellPosition, CellRect, GridConfig, SheetGeometry};
