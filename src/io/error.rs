//! Error types for sheet collection, packing, translation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save a generated sheet
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

    /// A source directory, legacy image or label file does not exist
    MissingInput {
        /// The absent path
        path: PathBuf,
    },

    /// A source directory exists but holds no matching images
    EmptyCollection {
        /// The directory that was scanned
        path: PathBuf,
    },

    /// Legacy sheet dimensions are not a whole number of tiles
    UnevenTiles {
        /// Sheet size in pixels (width, height)
        sheet_size: (u32, u32),
        /// Tile edge length in pixels
        tile_size: u32,
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

    /// A manifest file could not be parsed
    Manifest {
        /// Path to the manifest file
        path: PathBuf,
        /// Parser message
        reason: String,
    },
}

impl PackError {
    /// Whether the error only invalidates the current sheet
    ///
    /// Missing inputs, empty collections and uneven legacy sheets are reported
    /// and skipped; the batch moves on to the next sheet.
    pub const fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. } | Self::EmptyCollection { .. } | Self::UnevenTiles { .. }
        )
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::MissingInput { path } => {
                write!(f, "Missing input '{}'", path.display())
            }
            Self::EmptyCollection { path } => {
                write!(f, "No PNGs found in '{}'", path.display())
            }
            Self::UnevenTiles {
                sheet_size,
                tile_size,
            } => {
                write!(
                    f,
                    "Sheet size {}x{} is not a multiple of tile size {tile_size}",
                    sheet_size.0, sheet_size.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Manifest { path, reason } => {
                write!(f, "Invalid manifest '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to an I/O failure
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> PackError {
    let path = path.into();
    move |source| PackError::FileSystem {
        path,
        operation,
        source,
    }
}
