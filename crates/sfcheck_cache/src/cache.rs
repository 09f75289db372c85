//! Document-keyed memoizing cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use sfcheck_document::Document;
use tracing::debug;

use crate::CacheError;

/// Key for one cached derivation: document uri plus version.
type CacheKey = (String, i32);

/// A memoizing cache of per-document derived values.
///
/// `get_or_compute` runs the supplied closure at most once per
/// (uri, version) pair; later calls for the same document return the
/// cached value. `dispose` invalidates every entry and must be called
/// exactly once per cache instance per run; any use after disposal is
/// an error.
pub struct DocumentCache<T> {
    entries: Mutex<Option<HashMap<CacheKey, Arc<T>>>>,
}

impl<T> DocumentCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Some(HashMap::new())),
        }
    }

    /// Returns the cached value for `document`, computing it on first use.
    pub fn get_or_compute<F>(&self, document: &Document, compute: F) -> Result<Arc<T>, CacheError>
    where
        F: FnOnce(&Document) -> T,
    {
        let mut guard = self.entries.lock();
        let entries = guard.as_mut().ok_or(CacheError::Disposed)?;

        let key = (document.uri().to_string(), document.version());
        if let Some(value) = entries.get(&key) {
            return Ok(Arc::clone(value));
        }

        let value = Arc::new(compute(document));
        entries.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.lock().as_ref().map_or(0, HashMap::len)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidates all entries. Calling twice is an error.
    pub fn dispose(&self) -> Result<(), CacheError> {
        let mut guard = self.entries.lock();
        match guard.take() {
            Some(entries) => {
                debug!("Disposed cache with {} entries", entries.len());
                Ok(())
            }
            None => Err(CacheError::Disposed),
        }
    }
}

impl<T> Default for DocumentCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
