//! Embedded-script validator.

use regex::Regex;
use sfcheck_document::{Diagnostic, Document, Position, Range, ScriptRegion};
use tracing::debug;

use crate::producer::{DiagnosticProducer, RegionCache};
use crate::{AnalysisError, error};

/// Validates the script region of a document.
///
/// Not applicable to component documents without an inline script section
/// (no script at all, or an external `src` reference): those are reported
/// as lacking validation capability and skipped by the orchestration.
pub struct ScriptValidator {
    regions: RegionCache,
    debugger_statement: Regex,
    any_annotation: Regex,
}

impl ScriptValidator {
    /// Creates the validator over the shared region cache.
    pub fn new(regions: RegionCache) -> Result<Self, AnalysisError> {
        let debugger_statement = Regex::new(r"\bdebugger\b").map_err(error::setup_from)?;
        let any_annotation = Regex::new(r":\s*any\b").map_err(error::setup_from)?;

        Ok(Self {
            regions,
            debugger_statement,
            any_annotation,
        })
    }

    fn region_of(&self, document: &Document) -> Result<Option<ScriptRegion>, AnalysisError> {
        let region = self.regions.get_or_compute(document, ScriptRegion::extract)?;
        Ok((*region).clone())
    }

    fn range_at(document: &Document, start: usize, end: usize) -> Range {
        let (start_line, start_character) = document.position_at(start);
        let (end_line, end_character) = document.position_at(end);
        Range::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    fn is_strict(region: &ScriptRegion) -> bool {
        matches!(region.lang.as_deref(), Some("ts") | Some("tsx"))
    }
}

impl DiagnosticProducer for ScriptValidator {
    fn name(&self) -> &'static str {
        "script"
    }

    fn can_validate(&self, document: &Document) -> bool {
        match self.regions.get_or_compute(document, ScriptRegion::extract) {
            Ok(region) => matches!(&*region, Some(script) if script.src.is_none()),
            Err(_) => false,
        }
    }

    fn validate(&self, document: &Document) -> Result<Vec<Diagnostic>, AnalysisError> {
        let Some(region) = self.region_of(document)? else {
            return Ok(Vec::new());
        };

        let mut diagnostics = Vec::new();

        for found in self.debugger_statement.find_iter(&region.text) {
            diagnostics.push(Diagnostic::new(
                Self::range_at(
                    document,
                    region.offset + found.start(),
                    region.offset + found.end(),
                ),
                "'debugger' statement in checked source",
            ));
        }

        if Self::is_strict(&region) {
            for found in self.any_annotation.find_iter(&region.text) {
                diagnostics.push(Diagnostic::new(
                    Self::range_at(
                        document,
                        region.offset + found.start(),
                        region.offset + found.end(),
                    ),
                    "'any' annotation defeats strict checking",
                ));
            }
        }

        diagnostics.sort_by_key(|diagnostic| diagnostic.range.start);

        debug!(
            "{}: {} finding(s) in {}",
            self.name(),
            diagnostics.len(),
            document.uri()
        );
        Ok(diagnostics)
    }
}
