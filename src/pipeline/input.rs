//! Document loading stage.
//!
//! Reads both sides from disk, enforces the configured size limit and
//! rejects non-UTF-8 content before anything reaches the engine.

use crate::diff::EngineLimits;
use crate::error::SideDiffError;
use crate::model::Side;
use crate::utils::content_hash_hex;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A document read from disk and validated as UTF-8
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Where the document was read from
    pub path: PathBuf,
    /// Decoded document text
    pub text: String,
    /// Hex xxh3 hash of the raw bytes
    pub hash: String,
}

impl LoadedDocument {
    /// Validate raw bytes read from `path`.
    pub fn from_bytes(
        path: impl Into<PathBuf>,
        bytes: Vec<u8>,
        side: Side,
        limits: &EngineLimits,
    ) -> crate::error::Result<Self> {
        if bytes.len() > limits.max_input_bytes {
            return Err(SideDiffError::too_large(
                side,
                bytes.len(),
                limits.max_input_bytes,
            ));
        }

        let hash = content_hash_hex(&bytes);
        let text = String::from_utf8(bytes)
            .map_err(|e| SideDiffError::not_utf8(side, e.utf8_error().valid_up_to()))?;

        Ok(Self {
            path: path.into(),
            text,
            hash,
        })
    }

    /// Display form of the path for report headers
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

/// Load one side of the comparison with context for error messages
pub fn load_document(
    path: &Path,
    side: Side,
    limits: &EngineLimits,
    quiet: bool,
) -> Result<LoadedDocument> {
    if !quiet {
        tracing::info!("Reading {} document: {:?}", side, path);
    }

    // Reject oversized files before reading them into memory
    let size = std::fs::metadata(path)
        .map_err(|e| SideDiffError::io(path, e))
        .with_context(|| format!("Failed to read {side} file"))?
        .len();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    if size > limits.max_input_bytes {
        return Err(SideDiffError::too_large(side, size, limits.max_input_bytes))
            .with_context(|| format!("Failed to load {}", path.display()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| SideDiffError::io(path, e))
        .with_context(|| format!("Failed to read {side} file"))?;
    let document = LoadedDocument::from_bytes(path, bytes, side, limits)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    tracing::debug!(
        "Loaded {} bytes from {:?} (hash {})",
        document.byte_len(),
        path,
        document.hash
    );

    Ok(document)
}
