//! # sfcheck_cache
//!
//! Memoizing caches keyed by document identity. Each cache lives for one
//! batch run: values are computed at most once per document and the whole
//! cache is invalidated by a single [`DocumentCache::dispose`] call.

mod cache;
mod error;

pub use cache::DocumentCache;
pub use error::CacheError;
