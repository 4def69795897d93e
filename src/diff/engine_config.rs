//! Configuration types for the diff engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default cap on LCS table cells (16M cells, 64 MiB of `u32`).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 24;

/// Default cap on tokens per side for intra-line diffing.
pub const DEFAULT_MAX_INLINE_TOKENS: usize = 512;

/// Default cap on the size of each input document (64 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Token granularity for the intra-line pass.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InlineGranularity {
    /// Words, whitespace runs and single punctuation characters
    #[default]
    Word,
    /// Single characters
    Char,
}

impl InlineGranularity {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Char => "char",
        }
    }
}

impl std::fmt::Display for InlineGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource limits applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineLimits {
    /// Maximum size of each input document in bytes
    #[schemars(range(min = 1))]
    pub max_input_bytes: usize,
    /// Maximum number of cells in an exact LCS table before falling back
    #[schemars(range(min = 1))]
    pub max_table_cells: usize,
    /// Maximum tokens per side before a line pair is classified wholesale
    #[schemars(range(min = 1))]
    pub max_inline_tokens: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            max_inline_tokens: DEFAULT_MAX_INLINE_TOKENS,
        }
    }
}

impl EngineLimits {
    /// Exact matching for larger inputs, at a higher memory ceiling.
    #[must_use]
    pub const fn precise() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_table_cells: 1 << 26,
            max_inline_tokens: 4096,
        }
    }

    /// Small tables and short inline passes, trading time for peak memory.
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            max_input_bytes: 16 * 1024 * 1024,
            max_table_cells: 1 << 20,
            max_inline_tokens: 128,
        }
    }
}
