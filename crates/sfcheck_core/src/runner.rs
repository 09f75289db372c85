//! Run lifecycle.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use sfcheck_analysis::{
    AnalysisError, RegionCache, ScriptBindings, ScriptValidator, TemplateValidator,
};
use sfcheck_cache::DocumentCache;
use tracing::{debug, error, warn};

use crate::{
    CheckError, DiagnosticReporter, DocumentLoader, FileRecord, FileSelector, Progress,
    RunAccumulator, RunOptions, SourceClassifier, ValidationOrchestrator,
};

/// The externally observable result of one run.
///
/// The core never terminates the process; the command-line adapter
/// translates `success` into the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// True if and only if no error was seen across the whole run.
    pub success: bool,
    /// Total diagnostics reported.
    pub error_count: usize,
    /// Documents fully processed.
    pub files_checked: usize,
    /// The early-exit policy cut the run short.
    pub stopped_early: bool,
}

/// Owns one full invocation end to end: file selection, classification,
/// loading, the validation loop, progress, cache lifecycle, and the
/// summary line.
pub struct RunController {
    options: RunOptions,
}

impl RunController {
    /// Creates a controller for the given options.
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Executes the run, writing diagnostic blocks to `sink`.
    pub fn execute<W: Write>(&self, sink: W) -> Result<RunOutcome, CheckError> {
        let selector = FileSelector::new(&self.options)?;
        let paths = selector.select()?;

        let regions: RegionCache = Arc::new(DocumentCache::new());
        let bindings: Arc<DocumentCache<ScriptBindings>> = Arc::new(DocumentCache::new());

        let mut reporter = DiagnosticReporter::new(sink);
        let mut progress = Progress::new(self.options.progress);

        let result = self.validate(&paths, &regions, &bindings, &mut reporter, &mut progress);

        // Both caches are released exactly once, on every exit path,
        // before control returns to the caller.
        if let Err(failure) = regions.dispose() {
            warn!("Region cache disposal failed: {failure}");
        }
        if let Err(failure) = bindings.dispose() {
            warn!("Binding cache disposal failed: {failure}");
        }
        progress.finish();

        let accumulator = result?;

        if !self.options.fail_fast {
            reporter.summary(accumulator.total_error_count, accumulator.documents_processed)?;
        }

        Ok(RunOutcome {
            success: !accumulator.has_error,
            error_count: accumulator.total_error_count,
            files_checked: accumulator.documents_processed,
            stopped_early: accumulator.stopped,
        })
    }

    /// Builds the producers and runs the validation loop.
    ///
    /// Producer construction failure is caught at this boundary: the run
    /// is marked failed and control proceeds to cleanup in `execute`.
    fn validate<W: Write>(
        &self,
        paths: &[PathBuf],
        regions: &RegionCache,
        bindings: &Arc<DocumentCache<ScriptBindings>>,
        reporter: &mut DiagnosticReporter<W>,
        progress: &mut Progress,
    ) -> Result<RunAccumulator, CheckError> {
        let producers: Result<_, AnalysisError> = (|| {
            let template = TemplateValidator::new(Arc::clone(regions), Arc::clone(bindings))?;
            let script = ScriptValidator::new(Arc::clone(regions))?;
            Ok((template, script))
        })();
        let (template, script) = match producers {
            Ok(producers) => producers,
            Err(failure) => {
                error!("Failed to set up diagnostic producers: {failure}");
                return Ok(RunAccumulator {
                    has_error: true,
                    ..RunAccumulator::default()
                });
            }
        };

        let mut orchestrator = ValidationOrchestrator::new(
            &template,
            &script,
            reporter,
            progress,
            self.options.template_only,
            self.options.fail_fast,
        );

        // Each file is read exactly once: in strict-only mode the record
        // read for classification is the same record its document is built
        // from, so classification and validation observe one snapshot.
        if self.options.strict_only {
            let classifier = SourceClassifier::new();
            if self.options.fail_fast {
                // Lazy single-pass reads: a file after the early stop is
                // never read.
                orchestrator.run(paths.iter().filter_map(|path| {
                    match FileRecord::read(path) {
                        Ok(record)
                            if classifier
                                .is_eligible(record.extension_tag(), record.raw_text()) =>
                        {
                            Some(Ok(record.into_document()))
                        }
                        Ok(record) => {
                            debug!("Skipping non-strict source {}", record.path().display());
                            None
                        }
                        Err(failure) => Some(Err(failure)),
                    }
                }))
            } else {
                let records = DocumentLoader::read_records(paths)?;
                let documents: Vec<_> = records
                    .into_iter()
                    .filter(|record| {
                        let keep =
                            classifier.is_eligible(record.extension_tag(), record.raw_text());
                        if !keep {
                            debug!("Skipping non-strict source {}", record.path().display());
                        }
                        keep
                    })
                    .map(FileRecord::into_document)
                    .collect();
                orchestrator.run(documents.into_iter().map(Ok))
            }
        } else if self.options.fail_fast {
            // Lazy loads: a document after the early stop is never read.
            orchestrator.run(paths.iter().map(|path| DocumentLoader::load_one(path)))
        } else {
            let documents = DocumentLoader::load(paths)?;
            orchestrator.run(documents.into_iter().map(Ok))
        }
    }
}
