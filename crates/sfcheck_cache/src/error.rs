//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using a document cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache was used after disposal.
    #[error("cache used after disposal")]
    Disposed,
}
