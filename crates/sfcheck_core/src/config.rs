//! Run configuration.

use std::path::{Path, PathBuf};

/// Extensions scanned in the default mode.
const COMPONENT_EXTENSIONS: &[&str] = &["vue"];
/// Extensions scanned when only strict-dialect sources are wanted.
const STRICT_EXTENSIONS: &[&str] = &["ts", "tsx", "vue"];

/// Configuration for one batch run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project root used by collaborators to resolve cross-file references.
    pub workspace_root: PathBuf,
    /// Directory scanned for files; defaults to the workspace root.
    pub source_root: PathBuf,
    /// Check only strict-dialect sources.
    pub strict_only: bool,
    /// Skip the script producer entirely.
    pub template_only: bool,
    /// Directories whose files are dropped from the scan, in order.
    pub exclude_dirs: Vec<PathBuf>,
    /// Stop after the first document with an error.
    pub fail_fast: bool,
    /// Explicit files to check, bypassing the scan; in order.
    pub explicit_files: Vec<PathBuf>,
    /// Render the per-document progress ticker on stderr.
    pub progress: bool,
}

impl RunOptions {
    /// Creates options for the given workspace, with the source root
    /// defaulting to the workspace root.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        let workspace_root = workspace_root.into();
        Self {
            source_root: workspace_root.clone(),
            workspace_root,
            strict_only: false,
            template_only: false,
            exclude_dirs: Vec::new(),
            fail_fast: false,
            explicit_files: Vec::new(),
            progress: true,
        }
    }

    /// Sets the directory to scan.
    pub fn source_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_root = dir.into();
        self
    }

    /// Restricts checking to strict-dialect sources.
    pub fn strict_only(mut self, yes: bool) -> Self {
        self.strict_only = yes;
        self
    }

    /// Skips the script producer.
    pub fn template_only(mut self, yes: bool) -> Self {
        self.template_only = yes;
        self
    }

    /// Adds an excluded directory.
    pub fn exclude_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exclude_dirs.push(dir.into());
        self
    }

    /// Enables the early-exit-on-first-error policy.
    pub fn fail_fast(mut self, yes: bool) -> Self {
        self.fail_fast = yes;
        self
    }

    /// Enables or suppresses the progress ticker.
    pub fn progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }

    /// Sets an explicit file list, bypassing the directory scan.
    pub fn explicit_files(mut self, files: Vec<PathBuf>) -> Self {
        self.explicit_files = files;
        self
    }

    /// The extension set eligible for this run.
    ///
    /// Computed per run from the options, never kept in module state, so
    /// repeated embedded invocations with different flags cannot observe
    /// each other.
    pub fn eligible_extensions(&self) -> &'static [&'static str] {
        if self.strict_only {
            STRICT_EXTENSIONS
        } else {
            COMPONENT_EXTENSIONS
        }
    }

    /// Whether `path` carries an extension eligible for this run.
    pub fn is_eligible_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| self.eligible_extensions().contains(&extension))
    }
}
