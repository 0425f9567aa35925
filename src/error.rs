//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Clip rejection is not an error; see [`crate::clip::ClipOutcome::Rejected`].
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong point-list arity or an unusable numeric parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Algorithm tag that does not name a known algorithm.
    #[error("Unknown {family} algorithm: {name}")]
    UnknownAlgorithm {
        /// Algorithm family (line, curve, clip).
        family: &'static str,
        /// The rejected name.
        name: String,
    },

    /// Transform that the primitive's representation cannot express.
    #[error("Cannot {transform} a {primitive}")]
    UnsupportedTransform {
        /// Primitive kind.
        primitive: &'static str,
        /// Requested transform.
        transform: &'static str,
    },

    /// Malformed command text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error (script and config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[cfg(feature = "config")]
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the error (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Build an arity error for an operation that needs at least `required` points.
    pub(crate) fn too_few_points(operation: &str, required: usize, actual: usize) -> Self {
        tracing::debug!(operation, required, actual, "rejecting point list");
        Self::InvalidArgument(format!(
            "{operation} requires at least {required} points, got {actual}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::too_few_points("B-spline", 4, 3);
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("at least 4"));
    }

    #[test]
    fn test_unknown_algorithm_display() {
        let err = Error::UnknownAlgorithm {
            family: "line",
            name: "Wu".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown line algorithm: Wu");
    }

    #[test]
    fn test_unsupported_transform_display() {
        let err = Error::UnsupportedTransform {
            primitive: "ellipse",
            transform: "rotate",
        };
        assert_eq!(err.to_string(), "Cannot rotate a ellipse");
    }
}
