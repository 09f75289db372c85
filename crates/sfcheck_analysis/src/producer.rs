//! The diagnostic producer contract.

use std::sync::Arc;

use sfcheck_cache::DocumentCache;
use sfcheck_document::{Diagnostic, Document, ScriptRegion};

use crate::AnalysisError;

/// Shared memoized extraction of per-document script regions.
///
/// `None` entries record that a document has no script section, so the
/// extraction runs at most once per document even when both producers
/// consult it.
pub type RegionCache = Arc<DocumentCache<Option<ScriptRegion>>>;

/// A producer of diagnostics for one document.
///
/// Implementations are independent collaborators; the orchestration layer
/// calls them in a fixed order and treats their output as read-only.
pub trait DiagnosticProducer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this producer can validate the given document.
    ///
    /// Producers that are always applicable keep the default.
    fn can_validate(&self, _document: &Document) -> bool {
        true
    }

    /// Validates one document, returning its findings in source order.
    fn validate(&self, document: &Document) -> Result<Vec<Diagnostic>, AnalysisError>;
}
