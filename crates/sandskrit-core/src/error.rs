//! Error handling for SandSkrit
//!
//! Provides error types for both layers of the pipeline:
//! - Path errors (argument validation, glyph lookup, boundary checks)
//! - Export errors (SVG/THR rendering and file output)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Path construction error type
///
/// Every variant is reported synchronously by the offending append call,
/// and the path is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A numeric parameter is out of range or not finite
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The glyph provider has no outline for a character
    #[error("Character {0:?} is not supported by the glyph table")]
    UnknownCharacter(char),

    /// Geometry would leave the drawable radius
    #[error("Boundary exceeded: point at radius {radius:.3} lies outside boundary {boundary:.3}")]
    BoundaryExceeded {
        /// Largest radius the rejected geometry reached.
        radius: f64,
        /// The drawable radius that was enforced.
        boundary: f64,
    },
}

impl PathError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a boundary error
    pub fn is_boundary_error(&self) -> bool {
        matches!(self, PathError::BoundaryExceeded { .. })
    }
}

/// Export error type
///
/// Represents errors raised while rendering or writing SVG and THR output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("Cannot export an empty path")]
    EmptyPath,

    /// An exporter parameter is unusable
    #[error("Invalid export parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// THR text could not be parsed
    #[error("Malformed THR record at line {line_number}: {reason}")]
    MalformedRecord {
        /// 1-based line number of the record.
        line_number: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Main error type for SandSkrit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Path construction error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for path construction
pub type PathResult<T> = std::result::Result<T, PathError>;

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
