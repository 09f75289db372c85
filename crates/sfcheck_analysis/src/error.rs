//! Analysis error types.

use thiserror::Error;

/// Errors raised while constructing or invoking a diagnostic producer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Producer construction failed.
    #[error("Producer setup error: {0}")]
    Setup(String),

    /// A backing cache failed.
    #[error("Cache error: {0}")]
    Cache(#[from] sfcheck_cache::CacheError),
}

impl AnalysisError {
    /// Creates a setup error.
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup(message.into())
    }
}

/// Maps a pattern compile failure into a setup error.
pub(crate) fn setup_from(error: regex::Error) -> AnalysisError {
    AnalysisError::setup(format!("invalid pattern: {error}"))
}
