//! File selection.

use std::path::PathBuf;

use regex::Regex;
use tracing::info;
use walkdir::WalkDir;

use crate::{CheckError, RunOptions};

/// Resolves the concrete set of files to check.
///
/// An explicit file list bypasses both the directory scan and the
/// exclusion filter. The scan matches the run's eligible extension set and
/// is sorted so discovery order is reproducible across runs.
pub struct FileSelector<'a> {
    options: &'a RunOptions,
    exclusion: Option<Regex>,
}

impl<'a> FileSelector<'a> {
    /// Creates a selector, compiling the exclusion alternation.
    ///
    /// Exclusion entries are resolved against the workspace root and
    /// joined, unescaped, into a single `^(…)`-anchored pattern. A
    /// candidate is dropped when its absolute path matches as a plain
    /// string prefix — `src/foo` also excludes `src/foobar`. That prefix
    /// (not path-segment) semantics is load-bearing for existing setups
    /// and is preserved exactly; a malformed alternation is an error.
    pub fn new(options: &'a RunOptions) -> Result<Self, CheckError> {
        let exclusion = if options.exclude_dirs.is_empty() {
            None
        } else {
            let alternation = options
                .exclude_dirs
                .iter()
                .map(|dir| {
                    let absolute = if dir.is_absolute() {
                        dir.clone()
                    } else {
                        options.workspace_root.join(dir)
                    };
                    absolute.to_string_lossy().into_owned()
                })
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("^({alternation})"))?)
        };

        Ok(Self { options, exclusion })
    }

    /// Returns the ordered list of files to check.
    ///
    /// Duplicates are not removed; whatever the explicit list or the scan
    /// yields is passed through. Explicit paths are trusted without an
    /// existence check — a missing file surfaces later as a read failure.
    pub fn select(&self) -> Result<Vec<PathBuf>, CheckError> {
        if !self.options.explicit_files.is_empty() {
            return Ok(self.options.explicit_files.clone());
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.options.source_root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.options.is_eligible_extension(path))
            .collect();
        files.sort();

        if let Some(ref exclusion) = self.exclusion {
            files.retain(|path| !exclusion.is_match(&path.to_string_lossy()));
        }

        info!("Selected {} file(s) to check", files.len());
        Ok(files)
    }
}
