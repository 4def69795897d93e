//! Data model for line diffs and side-by-side rows.
//!
//! Every value in this module is created fresh per diff invocation and is
//! never mutated once handed back to the caller. The types serialize to
//! camelCase JSON so that a presentation layer can consume them directly:
//!
//! ```ignore
//! let rows = sidediff::compute_side_by_side_diff("a\nb", "a\nc");
//! let json = serde_json::to_string(&rows)?;
//! // [{"leftLineNum":1,"leftContent":"a","leftType":"unchanged",...}, ...]
//! ```

mod change;
mod row;
mod span;
mod summary;

pub use change::*;
pub use row::*;
pub use span::*;
pub use summary::*;

use serde::{Deserialize, Serialize};

/// One of the two documents being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
