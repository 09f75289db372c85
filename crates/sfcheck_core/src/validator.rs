//! The sequential validation loop.

use std::io::Write;

use sfcheck_analysis::{AnalysisError, DiagnosticProducer};
use sfcheck_document::{Diagnostic, Document};
use tracing::error;

use crate::{CheckError, DiagnosticReporter, Progress};

/// Accumulated state of one validation run.
///
/// Mutated sequentially, once per processed document; the loop is a fold
/// over the ordered document sequence, so there are no shared loop
/// variables to reason about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunAccumulator {
    /// At least one diagnostic or producer failure was seen.
    pub has_error: bool,
    /// Total number of diagnostics across processed documents.
    pub total_error_count: usize,
    /// Number of documents fully processed.
    pub documents_processed: usize,
    /// The early-exit policy stopped the run.
    pub stopped: bool,
}

/// Drives the two diagnostic producers over a document sequence.
///
/// Documents are processed strictly sequentially in the supplied order —
/// the order is significant: it matches discovery order so the early-exit
/// policy is deterministic and reproducible over the same input set. For
/// each document the template producer runs first, then the script
/// producer (unless skipped); template diagnostics precede script
/// diagnostics in the reported output, and reporting happens per document,
/// not batched at the end.
pub struct ValidationOrchestrator<'a, W: Write> {
    template: &'a dyn DiagnosticProducer,
    script: &'a dyn DiagnosticProducer,
    reporter: &'a mut DiagnosticReporter<W>,
    progress: &'a mut Progress,
    template_only: bool,
    fail_fast: bool,
}

impl<'a, W: Write> ValidationOrchestrator<'a, W> {
    /// Creates the orchestrator over the two producers.
    pub fn new(
        template: &'a dyn DiagnosticProducer,
        script: &'a dyn DiagnosticProducer,
        reporter: &'a mut DiagnosticReporter<W>,
        progress: &'a mut Progress,
        template_only: bool,
        fail_fast: bool,
    ) -> Self {
        Self {
            template,
            script,
            reporter,
            progress,
            template_only,
            fail_fast,
        }
    }

    /// Runs the validation loop.
    ///
    /// Producer invocation failures are caught here: the run is marked
    /// failed, the cause is logged, and control proceeds directly to
    /// cleanup. Document load failures surfaced by the iterator are NOT
    /// caught; they propagate to the top-level runner. Either way the
    /// caller performs cache disposal after this returns.
    pub fn run(
        &mut self,
        documents: impl IntoIterator<Item = Result<Document, CheckError>>,
    ) -> Result<RunAccumulator, CheckError> {
        let mut accumulator = RunAccumulator::default();

        for document in documents {
            let document = document?;

            match self.validate_document(&document) {
                Ok(diagnostics) => {
                    if !diagnostics.is_empty() {
                        accumulator.has_error = true;
                        accumulator.total_error_count += diagnostics.len();
                        for diagnostic in &diagnostics {
                            self.reporter.render(&document, diagnostic)?;
                        }
                    }
                }
                Err(failure) => {
                    error!("Validation failed for {}: {failure}", document.uri());
                    accumulator.has_error = true;
                    break;
                }
            }

            self.progress.tick();
            accumulator.documents_processed += 1;

            if self.fail_fast && accumulator.has_error {
                accumulator.stopped = true;
                self.reporter.early_stop_notice()?;
                break;
            }
        }

        Ok(accumulator)
    }

    /// Validates one document: template diagnostics unconditionally, then
    /// script diagnostics unless skipped, concatenated in that order.
    fn validate_document(&self, document: &Document) -> Result<Vec<Diagnostic>, AnalysisError> {
        let mut diagnostics = self.template.validate(document)?;

        if !self.template_only && self.script.can_validate(document) {
            diagnostics.extend(self.script.validate(document)?);
        }

        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfcheck_document::Range;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct StubProducer {
        name: &'static str,
        applicable: bool,
        diagnostics_per_document: usize,
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl StubProducer {
        fn clean(name: &'static str) -> Self {
            Self {
                name,
                applicable: true,
                diagnostics_per_document: 0,
                fail: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_findings(name: &'static str, count: usize) -> Self {
            Self {
                diagnostics_per_document: count,
                ..Self::clean(name)
            }
        }

        fn not_applicable(name: &'static str) -> Self {
            Self {
                applicable: false,
                ..Self::clean(name)
            }
        }

        fn failing(name: &'static str) -> Self {
            Self {
                fail: true,
                ..Self::clean(name)
            }
        }
    }

    impl DiagnosticProducer for StubProducer {
        fn name(&self) -> &'static str {
            self.name
        }

        fn can_validate(&self, _document: &Document) -> bool {
            self.applicable
        }

        fn validate(&self, document: &Document) -> Result<Vec<Diagnostic>, AnalysisError> {
            self.calls.borrow_mut().push(document.uri().to_string());
            if self.fail {
                return Err(AnalysisError::setup("stub failure"));
            }
            Ok((0..self.diagnostics_per_document)
                .map(|i| {
                    Diagnostic::new(
                        Range::on_line(0, i as u32, i as u32 + 1),
                        format!("{} finding {i}", self.name),
                    )
                })
                .collect())
        }
    }

    fn documents(count: usize) -> Vec<Result<Document, CheckError>> {
        (0..count)
            .map(|i| {
                Ok(Document::new(
                    &PathBuf::from(format!("/tmp/doc{i}.vue")),
                    "<template/>\n".to_string(),
                ))
            })
            .collect()
    }

    fn run_with(
        template: &StubProducer,
        script: &StubProducer,
        template_only: bool,
        fail_fast: bool,
        count: usize,
    ) -> (RunAccumulator, String) {
        let mut reporter = DiagnosticReporter::new(Vec::new());
        let mut progress = Progress::new(false);
        let accumulator = ValidationOrchestrator::new(
            template,
            script,
            &mut reporter,
            &mut progress,
            template_only,
            fail_fast,
        )
        .run(documents(count))
        .unwrap();
        let output = String::from_utf8(reporter.into_sink()).unwrap();
        (accumulator, output)
    }

    #[test]
    fn clean_run_processes_every_document() {
        let template = StubProducer::clean("template");
        let script = StubProducer::clean("script");
        let (accumulator, output) = run_with(&template, &script, false, false, 3);

        assert_eq!(
            accumulator,
            RunAccumulator {
                has_error: false,
                total_error_count: 0,
                documents_processed: 3,
                stopped: false,
            }
        );
        assert_eq!(output, "");
        assert_eq!(template.calls.borrow().len(), 3);
        assert_eq!(script.calls.borrow().len(), 3);
    }

    #[test]
    fn template_findings_precede_script_findings() {
        let template = StubProducer::with_findings("template", 1);
        let script = StubProducer::with_findings("script", 1);
        let (accumulator, output) = run_with(&template, &script, false, false, 1);

        assert_eq!(accumulator.total_error_count, 2);
        let template_at = output.find("template finding 0").unwrap();
        let script_at = output.find("script finding 0").unwrap();
        assert!(template_at < script_at);
    }

    #[test]
    fn template_only_skips_the_script_producer() {
        let template = StubProducer::clean("template");
        let script = StubProducer::with_findings("script", 1);
        let (accumulator, _) = run_with(&template, &script, true, false, 2);

        assert!(!accumulator.has_error);
        assert!(script.calls.borrow().is_empty());
    }

    #[test]
    fn inapplicable_script_producer_is_skipped() {
        let template = StubProducer::clean("template");
        let script = StubProducer::not_applicable("script");
        let (accumulator, _) = run_with(&template, &script, false, false, 2);

        assert!(!accumulator.has_error);
        assert!(script.calls.borrow().is_empty());
    }

    #[test]
    fn fail_fast_stops_after_first_document_with_errors() {
        let template = StubProducer::with_findings("template", 1);
        let script = StubProducer::clean("script");
        let (accumulator, output) = run_with(&template, &script, false, true, 3);

        assert_eq!(
            accumulator,
            RunAccumulator {
                has_error: true,
                total_error_count: 1,
                documents_processed: 1,
                stopped: true,
            }
        );
        assert_eq!(template.calls.borrow().len(), 1);
        assert!(output.contains("fail-exit"));
    }

    #[test]
    fn without_fail_fast_errors_do_not_stop_the_run() {
        let template = StubProducer::with_findings("template", 2);
        let script = StubProducer::clean("script");
        let (accumulator, _) = run_with(&template, &script, false, false, 3);

        assert_eq!(
            accumulator,
            RunAccumulator {
                has_error: true,
                total_error_count: 6,
                documents_processed: 3,
                stopped: false,
            }
        );
    }

    #[test]
    fn producer_failure_is_caught_and_fails_the_run() {
        let template = StubProducer::failing("template");
        let script = StubProducer::clean("script");
        let (accumulator, _) = run_with(&template, &script, false, false, 3);

        assert!(accumulator.has_error);
        assert!(!accumulator.stopped);
        // processing stops at the failing document
        assert_eq!(accumulator.documents_processed, 0);
        assert_eq!(template.calls.borrow().len(), 1);
    }

    #[test]
    fn load_failure_propagates_uncaught() {
        let template = StubProducer::clean("template");
        let script = StubProducer::clean("script");
        let mut reporter = DiagnosticReporter::new(Vec::new());
        let mut progress = Progress::new(false);
        let mut orchestrator = ValidationOrchestrator::new(
            &template,
            &script,
            &mut reporter,
            &mut progress,
            false,
            false,
        );

        let result = orchestrator.run(vec![Err(CheckError::FileRead {
            path: PathBuf::from("/tmp/missing.vue"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        })]);
        assert!(matches!(result, Err(CheckError::FileRead { .. })));
    }
}
