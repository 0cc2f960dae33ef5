//! Error types for catalog loading, generation and export

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Grid dimensions cannot hold an interior cell or exceed the safety limit
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Smallest accepted value for either dimension
        minimum: usize,
        /// Largest accepted value for either dimension
        maximum: usize,
    },

    /// A position lies outside the writable interior of the grid
    InvalidPosition {
        /// Offending `[x, y]` position
        position: [usize; 2],
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
        /// Why the position was rejected
        reason: &'static str,
    },

    /// Pattern catalog failed validation at load time
    InvalidPattern {
        /// Identifier of the offending pattern
        pattern: String,
        /// Description of what is wrong with it
        reason: String,
    },

    /// No pattern and rotation combination matches a cell's neighbourhood
    ///
    /// Generation does not backtrack, so this is terminal.
    Contradiction {
        /// `[x, y]` of the unsatisfiable cell
        position: [usize; 2],
        /// Generation step when this occurred
        step: usize,
        /// Observed neighbourhood rendered as `abc/d*e/fgh`
        kernel: String,
    },

    /// The step budget ran out before the grid was complete
    BudgetExhausted {
        /// Steps executed
        steps: usize,
        /// Configured limit
        limit: usize,
    },

    /// The wall-clock deadline passed before the grid was complete
    DeadlineExceeded {
        /// Steps executed
        steps: usize,
        /// Time spent generating
        elapsed: Duration,
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

    /// Failed to save a rendered grid to disk
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

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: each side must be between {minimum} and {maximum}"
                )
            }
            Self::InvalidPosition {
                position,
                dimensions,
                reason,
            } => {
                write!(
                    f,
                    "Invalid position ({}, {}) in {}x{} grid: {reason}",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{pattern}': {reason}")
            }
            Self::Contradiction {
                position,
                step,
                kernel,
            } => {
                write!(
                    f,
                    "Contradiction at ({}, {}) on step {step}: no pattern matches neighbourhood {kernel}",
                    position[0], position[1]
                )
            }
            Self::BudgetExhausted { steps, limit } => {
                write!(f, "Step budget exhausted after {steps} steps (limit {limit})")
            }
            Self::DeadlineExceeded { steps, elapsed } => {
                write!(
                    f,
                    "Deadline exceeded after {steps} steps ({} ms)",
                    elapsed.as_millis()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AlgorithmError {
    /// Whether the error was raised while validating configuration,
    /// before any generation work started
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::InvalidPosition { .. }
                | Self::InvalidPattern { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
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
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a pattern validation error
pub fn invalid_pattern(pattern: &str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
