//! Extraction driver and run summary

use crate::analysis::classifier::{EmptinessThresholds, is_empty_tile};
use crate::geometry::grid::{CellPosition, GridConfig, SheetGeometry};
use crate::hashing::dedupe::{DedupeConfig, DuplicateDetector};
use crate::hashing::dhash::difference_hash;
use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{create_output_dir, save_tile};
use crate::io::progress::ProgressManager;
use crate::naming::preset::{PresetEntry, PresetTable};
use crate::naming::resolver::NameResolver;
use image::DynamicImage;
use std::path::PathBuf;

/// Tuning and naming parameters for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Grid layout of the sheet
    pub grid: GridConfig,
    /// Emptiness classification thresholds
    pub emptiness: EmptinessThresholds,
    /// Duplicate filtering settings
    pub dedupe: DedupeConfig,
    /// Edge length of the difference-hash sample grid
    pub hash_size: u32,
    /// Prefix for sequential fallback names
    pub prefix: String,
}

/// Aggregate counters reported at the end of one run
///
/// Every grid cell is accounted for by exactly one counter, so the four
/// counts always sum to the cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Tiles written to the output directory
    pub written: usize,
    /// Cells classified as unused slots
    pub skipped_empty: usize,
    /// Cells dropped as near-duplicates of earlier kept tiles
    pub skipped_duplicate: usize,
    /// Cells filtered by the preset table or by a name collision
    pub skipped_by_preset: usize,
    /// Resolved cell width in pixels
    pub cell_width: u32,
    /// Resolved cell height in pixels
    pub cell_height: u32,
}

/// Single-pass extraction driver owning the sheet and all running state
///
/// Cell order determines both deduplication precedence and naming, so the
/// pipeline is strictly sequential: earlier cells define the canonical kept
/// tiles and later near-matches are dropped. Any single-cell failure aborts
/// the run; output already written stays on disk.
pub struct SheetPipeline<'p> {
    sheet: DynamicImage,
    geometry: SheetGeometry,
    config: PipelineConfig,
    preset: Option<&'p PresetTable>,
    out_dir: PathBuf,
}

impl<'p> SheetPipeline<'p> {
    /// Validate the configuration and resolve the sheet geometry
    ///
    /// Geometry is validated here, before any cropping, so a bad
    /// configuration never produces partial output.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash size is zero, the grid counts are
    /// invalid, or the computed cell size is not positive for the sheet
    /// dimensions.
    pub fn new(
        sheet: DynamicImage,
        config: PipelineConfig,
        preset: Option<&'p PresetTable>,
        out_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if config.hash_size == 0 {
            return Err(invalid_parameter(
                "hash-size",
                &config.hash_size,
                &"hash grid size must be at least 1",
            ));
        }

        let geometry = SheetGeometry::new(sheet.width(), sheet.height(), config.grid)?;

        Ok(Self {
            sheet,
            geometry,
            config,
            preset,
            out_dir: out_dir.into(),
        })
    }

    /// Resolved geometry for this sheet
    pub const fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Run the extraction pipeline over every cell in row-major order
    ///
    /// Per cell: preset resolution first (cheap early-exit before hashing),
    /// then emptiness classification, difference hashing, duplicate
    /// detection, name resolution, and finally the file write.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a tile
    /// cannot be written.
    pub fn run(&self, progress: Option<&ProgressManager>) -> Result<RunSummary> {
        let mut summary = RunSummary {
            cell_width: self.geometry.cell_width(),
            cell_height: self.geometry.cell_height(),
            ..RunSummary::default()
        };

        let mut detector = DuplicateDetector::new(self.config.dedupe);
        let mut resolver = NameResolver::new(self.config.prefix.clone(), self.geometry.cols());

        create_output_dir(&self.out_dir)?;

        for (cell_index, (row_index, col_index)) in self.geometry.cells().enumerate() {
            if let Some(pm) = progress {
                pm.update_cell(cell_index);
            }

            let mut preset_name = None;
            if let Some(table) = self.preset {
                match table.lookup(CellPosition::from_indices(row_index, col_index)) {
                    None | Some(PresetEntry::Excluded) => {
                        summary.skipped_by_preset += 1;
                        continue;
                    }
                    Some(PresetEntry::Named(name)) => preset_name = Some(name),
                }
            }

            let rect = self.geometry.cell_rect(row_index, col_index);
            let tile = self.sheet.crop_imm(rect.x, rect.y, rect.width, rect.height);

            if is_empty_tile(&tile, self.config.emptiness) {
                summary.skipped_empty += 1;
                continue;
            }

            let fingerprint = difference_hash(&tile, self.config.hash_size);
            if detector.is_duplicate(&fingerprint) {
                summary.skipped_duplicate += 1;
                continue;
            }

            let base_name = preset_name.map_or_else(
                || resolver.fallback_name(row_index, col_index),
                str::to_owned,
            );

            // Claimed before the write so the used set stays consistent
            // even if the write fails
            if !resolver.claim(&base_name) {
                summary.skipped_by_preset += 1;
                continue;
            }

            let path = self.out_dir.join(format!("{base_name}.{OUTPUT_EXTENSION}"));
            save_tile(&tile, &path)?;

            detector.record(fingerprint);
            summary.written += 1;
        }

        Ok(summary)
    }
}
