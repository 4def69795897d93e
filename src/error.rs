//! Unified error types for sidediff.
//!
//! The diff engine itself has a single recoverable failure, invalid input.
//! File access in the pipeline adds the `Io` variant. Config files and
//! reports keep their own error types.

use crate::model::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sidediff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SideDiffError {
    /// Input could not be diffed
    #[error("Invalid input: {context}")]
    InvalidInput {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// A document could not be read from disk
    #[error("IO error at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Specific invalid-input kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("{side} input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 { side: Side, valid_up_to: usize },

    #[error("{side} input is {size} bytes, exceeding the limit of {limit} bytes")]
    TooLarge { side: Side, size: usize, limit: usize },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sidediff operations
pub type Result<T> = std::result::Result<T, SideDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SideDiffError {
    /// Create an invalid-input error with context
    pub fn invalid_input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::InvalidInput {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-input error for a non-UTF-8 document
    #[must_use]
    pub fn not_utf8(side: Side, valid_up_to: usize) -> Self {
        Self::invalid_input(
            format!("{side} document"),
            InputErrorKind::NotUtf8 { side, valid_up_to },
        )
    }

    /// Create an invalid-input error for a document over the size limit
    #[must_use]
    pub fn too_large(side: Side, size: usize, limit: usize) -> Self {
        Self::invalid_input(
            format!("{side} document"),
            InputErrorKind::TooLarge { side, size, limit },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The input error kind, if this is an invalid-input error
    #[must_use]
    pub const fn input_kind(&self) -> Option<&InputErrorKind> {
        match self {
            Self::InvalidInput { source, .. } => Some(source),
            _ => None,
        }
    }
}
