//! Input/output operations and error handling
//!
//! This module contains the user-facing surface of the tool:
//! - Command-line parsing and run orchestration
//! - Sheet loading and tile export
//! - Error types shared across the crate

/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types for sheet loading, configuration, and tile export
pub mod error;
/// Sheet loading and per-tile PNG export
pub mod image;
/// Per-cell progress display
pub mod progress;
