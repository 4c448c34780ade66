//! Pipeline constants and runtime configuration defaults

// Grid layout defaults matching the portrait sheets this tool was built for
/// Default number of grid rows
pub const DEFAULT_ROWS: u32 = 4;
/// Default number of grid columns
pub const DEFAULT_COLS: u32 = 7;
/// Default outer margin in pixels
pub const DEFAULT_MARGIN: u32 = 12;
/// Default gap between cells in pixels
pub const DEFAULT_GAP: u32 = 14;

// Emptiness classification thresholds on a 0-255 luminance scale
/// Default standard-deviation cutoff below which a tile counts as flat
pub const DEFAULT_EMPTY_STD_DEV: f64 = 2.0;
/// Default mean-luminance cutoff below which a tile counts as dark
pub const DEFAULT_EMPTY_MEAN: f64 = 40.0;

// Duplicate detection settings
/// Edge length of the difference-hash sample grid (8 yields 64-bit fingerprints)
pub const DEFAULT_HASH_SIZE: u32 = 8;
/// Default maximum Hamming distance treated as a duplicate
pub const DEFAULT_DEDUPE_DISTANCE: usize = 5;

// Output settings
/// Default directory receiving extracted tiles
pub const DEFAULT_OUTPUT_DIR: &str = "_art/portraits";
/// Default prefix for sequential fallback names
pub const DEFAULT_PREFIX: &str = "portrait";
/// Zero-padded width of sequential fallback indices
pub const SEQUENTIAL_INDEX_WIDTH: usize = 2;
/// File extension for written tiles
pub const OUTPUT_EXTENSION: &str = "png";
