//! Error types for series ordering
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! Every variant aborts the ordering call that raised it; no partial result
//! is ever returned alongside an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ordering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ordering errors
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `NotAnEntityCollection` | An input element is not a series |
/// | `InconsistentOrInvalidKeyType` | A transformation result is absent, unsupported, or mistyped |
/// | `TransformFailed` | The transformation itself reported a failure |
/// | `Config` | A configuration file cannot be read or parsed |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Error {
    /// Input collection holds something other than series
    #[error("not an entity collection: element {index} is {found}")]
    NotAnEntityCollection {
        /// Position of the offending element
        index: usize,
        /// Type name of the offending element
        found: String,
    },

    /// Transformation result cannot be used as a sort key
    #[error(
        "macro must return a non-null integer, float, or text value, consistently typed across all entities \
         (element {index}: expected {}, got {found})",
        describe_expected(.expected)
    )]
    InconsistentOrInvalidKeyType {
        /// Position of the offending element
        index: usize,
        /// Key type established by earlier elements, if any
        expected: Option<String>,
        /// What the transformation returned (`"nothing"` when absent)
        found: String,
    },

    /// The external transformation failed
    #[error("transformation failed on element {index}: {reason}")]
    TransformFailed {
        /// Position of the element being transformed
        index: usize,
        /// Failure reported by the transformation
        reason: String,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },
}

fn describe_expected(expected: &Option<String>) -> &str {
    expected.as_deref().unwrap_or("Int, Float or String")
}

impl Error {
    /// Create a `NotAnEntityCollection` error
    pub fn not_an_entity(index: usize, found: impl Into<String>) -> Self {
        Error::NotAnEntityCollection {
            index,
            found: found.into(),
        }
    }

    /// Create an `InconsistentOrInvalidKeyType` error
    pub fn invalid_key(index: usize, expected: Option<&str>, found: impl Into<String>) -> Self {
        Error::InconsistentOrInvalidKeyType {
            index,
            expected: expected.map(str::to_string),
            found: found.into(),
        }
    }

    /// Create a `TransformFailed` error
    pub fn transform_failed(index: usize, reason: impl Into<String>) -> Self {
        Error::TransformFailed {
            index,
            reason: reason.into(),
        }
    }

    /// Create a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Index of the element that caused the error, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::NotAnEntityCollection { index, .. }
            | Error::InconsistentOrInvalidKeyType { index, .. }
            | Error::TransformFailed { index, .. } => Some(*index),
            Error::Config { .. } => None,
        }
    }

    /// True for the two type errors of the keyed ordering
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Error::NotAnEntityCollection { .. } | Error::InconsistentOrInvalidKeyType { .. }
        )
    }
}
