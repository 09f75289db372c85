//! Document loading.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use sfcheck_document::Document;
use tracing::debug;

use crate::CheckError;

/// A selected file read off disk, consumed when its document is built.
#[derive(Debug)]
pub struct FileRecord {
    absolute_path: PathBuf,
    extension_tag: String,
    raw_text: String,
}

impl FileRecord {
    /// Reads one file. Read failures are not caught here; they map to
    /// [`CheckError::FileRead`] and propagate to the caller.
    pub fn read(path: &Path) -> Result<Self, CheckError> {
        let raw_text = fs::read_to_string(path).map_err(|source| CheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let extension_tag = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            absolute_path: path.to_path_buf(),
            extension_tag,
            raw_text,
        })
    }

    /// Absolute path the record was read from.
    pub fn path(&self) -> &Path {
        &self.absolute_path
    }

    /// Extension tag of the file (`vue`, `ts`, …).
    pub fn extension_tag(&self) -> &str {
        &self.extension_tag
    }

    /// Raw content, byte-for-byte.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Builds the run-owned document, consuming the record.
    pub fn into_document(self) -> Document {
        Document::new(&self.absolute_path, self.raw_text)
    }
}

/// Loads selected files into run-owned documents.
pub struct DocumentLoader;

impl DocumentLoader {
    /// Reads all paths into records with fan-out reads, rejoined in input
    /// order.
    ///
    /// The parallelism is purely an I/O latency optimization: result order
    /// matches input order regardless of completion order, and the first
    /// read failure fails the whole batch.
    pub fn read_records(paths: &[PathBuf]) -> Result<Vec<FileRecord>, CheckError> {
        debug!("Reading {} file(s)", paths.len());
        paths.par_iter().map(|path| FileRecord::read(path)).collect()
    }

    /// Loads all paths with fan-out reads, rejoined in input order.
    pub fn load(paths: &[PathBuf]) -> Result<Vec<Document>, CheckError> {
        Ok(Self::read_records(paths)?
            .into_iter()
            .map(FileRecord::into_document)
            .collect())
    }

    /// Loads a single path.
    pub fn load_one(path: &Path) -> Result<Document, CheckError> {
        Ok(FileRecord::read(path)?.into_document())
    }
}
