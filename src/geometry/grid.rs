//! Cell rectangle computation for regular sheet grids

use crate::io::error::{Result, configuration_error, invalid_parameter};

/// 1-based (row, column) pair identifying a grid slot
///
/// Used both for geometry lookup and for preset-table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPosition {
    /// 1-based row
    pub row: u32,
    /// 1-based column
    pub col: u32,
}

impl CellPosition {
    /// Build a position from 0-based grid indices
    pub const fn from_indices(row_index: u32, col_index: u32) -> Self {
        Self {
            row: row_index + 1,
            col: col_index + 1,
        }
    }
}

/// Grid layout parameters for a sheet
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
    /// Outer margin in pixels
    pub margin: u32,
    /// Gap between adjacent cells in pixels
    pub gap: u32,
}

impl GridConfig {
    /// Validate the counts before geometry is derived
    ///
    /// # Errors
    ///
    /// Returns an error if the row or column count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &"row count must be at least 1",
            ));
        }
        if self.cols == 0 {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &"column count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Pixel rectangle of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge in sheet coordinates
    pub x: u32,
    /// Top edge in sheet coordinates
    pub y: u32,
    /// Cell width in pixels
    pub width: u32,
    /// Cell height in pixels
    pub height: u32,
}

/// Resolved per-sheet geometry with a fixed cell size
///
/// The cell size is computed once by floor division; any truncation
/// remainder is absorbed into unused trailing pixels of the sheet.
#[derive(Debug, Clone)]
pub struct SheetGeometry {
    config: GridConfig,
    cell_width: u32,
    cell_height: u32,
}

impl SheetGeometry {
    /// Derive cell geometry for a sheet, failing fast on impossible layouts
    ///
    /// # Errors
    ///
    /// Returns an error if the row/column counts are invalid or if the
    /// margins and gaps leave no positive cell area.
    pub fn new(sheet_width: u32, sheet_height: u32, config: GridConfig) -> Result<Self> {
        config.validate()?;

        let cols = i64::from(config.cols);
        let rows = i64::from(config.rows);
        let margin = i64::from(config.margin);
        let gap = i64::from(config.gap);

        let usable_width = i64::from(sheet_width) - 2 * margin - (cols - 1) * gap;
        let usable_height = i64::from(sheet_height) - 2 * margin - (rows - 1) * gap;
        let cell_width = usable_width.div_euclid(cols);
        let cell_height = usable_height.div_euclid(rows);

        if cell_width <= 0 || cell_height <= 0 {
            return Err(configuration_error(format!(
                "computed cell size {cell_width}x{cell_height} for a {sheet_width}x{sheet_height} \
                 sheet; margins and gaps exceed the available area"
            )));
        }

        Ok(Self {
            config,
            cell_width: cell_width as u32,
            cell_height: cell_height as u32,
        })
    }

    /// Cell width in pixels
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cell height in pixels
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Number of grid rows
    pub const fn rows(&self) -> u32 {
        self.config.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> u32 {
        self.config.cols
    }

    /// Total number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.config.rows as usize * self.config.cols as usize
    }

    /// Pixel rectangle of the cell at 0-based grid indices
    ///
    /// All rectangles lie within the sheet bounds for any geometry accepted
    /// by [`SheetGeometry::new`].
    pub const fn cell_rect(&self, row_index: u32, col_index: u32) -> CellRect {
        CellRect {
            x: self.config.margin + col_index * (self.cell_width + self.config.gap),
            y: self.config.margin + row_index * (self.cell_height + self.config.gap),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Iterate all 0-based cell indices in row-major order
    ///
    /// Row-major order is load-bearing: it fixes both deduplication
    /// precedence and sequential fallback naming.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let cols = self.config.cols;
        (0..self.config.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}
