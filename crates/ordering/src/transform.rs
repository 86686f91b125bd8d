//! The external transformation seam
//!
//! A transformation maps one series to at most one value. It is supplied by
//! the caller (a closure, a function pointer, a call into an interpreter) and
//! may have side effects. The ordering layer only relies on:
//! - one call per series, in input order
//! - a single result, possibly absent
//! - failures reported through [`TransformError`]

use seriesort_core::Value;
use thiserror::Error;

/// Failure reported by a transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransformError {
    reason: String,
}

impl TransformError {
    /// Create a transformation error
    pub fn new(reason: impl Into<String>) -> Self {
        TransformError {
            reason: reason.into(),
        }
    }

    /// Failure description
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// What a transformation returns for one series
///
/// `Ok(None)` means the transformation produced no value (a null result).
pub type TransformResult = std::result::Result<Option<Value>, TransformError>;
