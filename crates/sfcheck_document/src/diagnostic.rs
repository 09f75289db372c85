//! Diagnostic types for validation results.

use serde::{Deserialize, Serialize};

use crate::Range;

/// A defect reported by a validator, with a source range and message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source range the finding covers.
    pub range: Range,

    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}
