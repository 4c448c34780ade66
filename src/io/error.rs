//! Error types for sheet loading, configuration, and tile export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all extraction operations
#[derive(Debug)]
pub enum SplitError {
    /// Failed to load the input sheet from the filesystem
    ImageLoad {
        /// Path to the sheet image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Grid configuration cannot be applied to the sheet dimensions
    ///
    /// Raised before any cropping is attempted, so a bad configuration
    /// never produces partial output.
    Configuration {
        /// Description of the invalid geometry
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an extracted tile to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load sheet '{}': {source}", path.display())
            }
            Self::Configuration { reason } => {
                write!(f, "Invalid grid configuration: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export tile to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for extraction results
pub type Result<T> = std::result::Result<T, SplitError>;

impl From<image::ImageError> for SplitError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SplitError {
    SplitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error
pub fn configuration_error(reason: impl Into<String>) -> SplitError {
    SplitError::Configuration {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = configuration_error("computed cell size is not positive");
        assert_eq!(
            err.to_string(),
            "Invalid grid configuration: computed cell size is not positive"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("rows", &0, &"row count must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'rows' = '0': row count must be at least 1"
        );
    }
}
