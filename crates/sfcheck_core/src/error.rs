//! Check error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a batch check.
///
/// Only analysis failures are caught inside the run (at the orchestration
/// boundary); everything else propagates to the caller and fails the run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A selected file could not be read.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The exclusion alternation did not compile.
    #[error("Invalid exclusion pattern: {0}")]
    Exclude(#[from] regex::Error),

    /// A diagnostic producer failed during setup or invocation.
    #[error("Analysis error: {0}")]
    Analysis(#[from] sfcheck_analysis::AnalysisError),

    /// A backing cache failed.
    #[error("Cache error: {0}")]
    Cache(#[from] sfcheck_cache::CacheError),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
