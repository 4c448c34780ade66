//! Command-line interface for splitting sheet images into tile assets

use crate::analysis::classifier::EmptinessThresholds;
use crate::geometry::grid::GridConfig;
use crate::hashing::dedupe::DedupeConfig;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_DEDUPE_DISTANCE, DEFAULT_EMPTY_MEAN, DEFAULT_EMPTY_STD_DEV, DEFAULT_GAP,
    DEFAULT_HASH_SIZE, DEFAULT_MARGIN, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX, DEFAULT_ROWS,
};
use crate::io::error::Result;
use crate::io::image::load_sheet;
use crate::io::progress::ProgressManager;
use crate::naming::preset::PresetChoice;
use crate::pipeline::driver::{PipelineConfig, RunSummary, SheetPipeline};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(
    author,
    version,
    about = "Split a grid-arranged sheet image into deduplicated tile assets"
)]
/// Command-line arguments for the sheet splitting tool
pub struct Cli {
    /// Input sheet image path
    #[arg(value_name = "SHEET")]
    pub input: PathBuf,

    /// Directory receiving the extracted tiles
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Outer margin in pixels
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Gap between adjacent cells in pixels
    #[arg(long, default_value_t = DEFAULT_GAP)]
    pub gap: u32,

    /// Filename prefix for sequential fallback names
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Standard-deviation cutoff below which a dark tile counts as empty
    #[arg(long, default_value_t = DEFAULT_EMPTY_STD_DEV)]
    pub empty_threshold: f64,

    /// Disable duplicate filtering
    #[arg(long)]
    pub no_dedupe: bool,

    /// Maximum difference-hash Hamming distance treated as a duplicate
    #[arg(long, default_value_t = DEFAULT_DEDUPE_DISTANCE)]
    pub dedupe_hamming: usize,

    /// Apply fixed row/column naming and exclusions
    #[arg(long, value_enum, default_value = "none")]
    pub preset: PresetChoice,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if duplicate filtering is active
    pub const fn dedupe_enabled(&self) -> bool {
        !self.no_dedupe
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            grid: GridConfig {
                rows: self.rows,
                cols: self.cols,
                margin: self.margin,
                gap: self.gap,
            },
            emptiness: EmptinessThresholds {
                std_dev: self.empty_threshold,
                mean: DEFAULT_EMPTY_MEAN,
            },
            dedupe: DedupeConfig {
                enabled: self.dedupe_enabled(),
                max_distance: self.dedupe_hamming,
            },
            hash_size: DEFAULT_HASH_SIZE,
            prefix: self.prefix.clone(),
        }
    }
}

/// Orchestrates one sheet extraction run from parsed arguments
pub struct SheetProcessor {
    cli: Cli,
}

impl SheetProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the sheet, run the pipeline, and report the summary
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be loaded, the grid configuration
    /// is invalid for its dimensions, or a tile cannot be written.
    pub fn process(&self) -> Result<()> {
        let sheet = load_sheet(&self.cli.input)?;

        let pipeline = SheetPipeline::new(
            sheet,
            self.cli.pipeline_config(),
            self.cli.preset.table(),
            self.cli.out_dir.clone(),
        )?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(pipeline.geometry().cell_count()));

        let summary = pipeline.run(progress.as_ref())?;

        if let Some(pm) = progress {
            pm.finish();
        }

        Self::report(&summary, &self.cli.out_dir);
        Ok(())
    }

    // The summary print is part of the tool's contract, not debug output
    #[allow(clippy::print_stdout)]
    fn report(summary: &RunSummary, out_dir: &Path) {
        println!("saved {} tiles to {}", summary.written, out_dir.display());
        println!(
            "cell size: {}x{}",
            summary.cell_width, summary.cell_height
        );
        println!("skipped empty: {}", summary.skipped_empty);
        println!("skipped duplicates: {}", summary.skipped_duplicate);
        println!("skipped preset-filtered: {}", summary.skipped_by_preset);
    }
}
