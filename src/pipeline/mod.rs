//! Row-major extraction pipeline over grid cells

/// Extraction driver and run summary
pub mod driver;

pub use driver::{PipelineConfig, RunSummary, SheetPipeline};
