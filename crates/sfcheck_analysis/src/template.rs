//! Template interpolation validator.

use std::sync::Arc;

use regex::Regex;
use sfcheck_cache::DocumentCache;
use sfcheck_document::{Diagnostic, Document, Position, Range, ScriptRegion};
use tracing::debug;

use crate::bindings::ScriptBindings;
use crate::producer::{DiagnosticProducer, RegionCache};
use crate::{AnalysisError, error};

/// Validates `{{ … }}` interpolations in the template section.
///
/// Reports unterminated and empty interpolations, and interpolation roots
/// the script section never declares. Applicable to every document; a
/// document without a template section simply yields no findings.
pub struct TemplateValidator {
    regions: RegionCache,
    bindings: Arc<DocumentCache<ScriptBindings>>,
    template_open: Regex,
    interpolation_root: Regex,
}

impl TemplateValidator {
    /// Creates the validator over the shared caches.
    pub fn new(
        regions: RegionCache,
        bindings: Arc<DocumentCache<ScriptBindings>>,
    ) -> Result<Self, AnalysisError> {
        let template_open = Regex::new(r"<template[^>]*>").map_err(error::setup_from)?;
        let interpolation_root =
            Regex::new(r"^[\s(!+\-]*([A-Za-z_$][\w$]*)").map_err(error::setup_from)?;

        Ok(Self {
            regions,
            bindings,
            template_open,
            interpolation_root,
        })
    }

    /// Locates the template section as (content_start, content_end) byte
    /// offsets within the full document text.
    fn template_span(&self, document: &Document) -> Option<(usize, usize)> {
        if document.language_tag() != "vue" {
            return None;
        }
        let text = document.text();
        let open = self.template_open.find(text)?;
        let start = open.end();
        // Last close tag so nested <template> blocks stay inside the span.
        let end = text.rfind("</template>").filter(|&e| e >= start).unwrap_or(text.len());
        Some((start, end))
    }

    /// Bindings declared by the script section, or `None` when there is no
    /// inline script to check against.
    fn bindings_for(
        &self,
        document: &Document,
    ) -> Result<Option<Arc<ScriptBindings>>, AnalysisError> {
        let region = self.regions.get_or_compute(document, ScriptRegion::extract)?;
        let Some(script) = (*region).as_ref() else {
            return Ok(None);
        };
        // An external script is presumed to declare whatever the template
        // uses; only inline scripts constrain the binding check.
        if script.src.is_some() {
            return Ok(None);
        }
        let text = script.text.clone();
        let bindings = self
            .bindings
            .get_or_compute(document, move |_| ScriptBindings::extract(&text))?;
        Ok(Some(bindings))
    }

    fn range_at(document: &Document, start: usize, end: usize) -> Range {
        let (start_line, start_character) = document.position_at(start);
        let (end_line, end_character) = document.position_at(end);
        Range::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }
}

impl DiagnosticProducer for TemplateValidator {
    fn name(&self) -> &'static str {
        "template"
    }

    fn validate(&self, document: &Document) -> Result<Vec<Diagnostic>, AnalysisError> {
        let Some((content_start, content_end)) = self.template_span(document) else {
            return Ok(Vec::new());
        };

        let bindings = self.bindings_for(document)?;
        let content = &document.text()[content_start..content_end];
        let mut diagnostics = Vec::new();
        let mut cursor = 0;

        while let Some(rel) = content[cursor..].find("{{") {
            let open = cursor + rel;
            let Some(close_rel) = content[open + 2..].find("}}") else {
                diagnostics.push(Diagnostic::new(
                    Self::range_at(document, content_start + open, content_start + open + 2),
                    "Unterminated interpolation",
                ));
                break;
            };
            let close = open + 2 + close_rel;
            let inner = &content[open + 2..close];

            if inner.trim().is_empty() {
                diagnostics.push(Diagnostic::new(
                    Self::range_at(document, content_start + open, content_start + close + 2),
                    "Empty interpolation",
                ));
            } else if let Some(bindings) = bindings.as_deref() {
                if let Some(captures) = self.interpolation_root.captures(inner) {
                    let root = captures.get(1).map_or("", |m| m.as_str());
                    if !root.is_empty() && !bindings.declares(root) {
                        let root_start =
                            content_start + open + 2 + captures.get(1).map_or(0, |m| m.start());
                        diagnostics.push(Diagnostic::new(
                            Self::range_at(document, root_start, root_start + root.len()),
                            format!("Property '{root}' is not defined in the script section"),
                        ));
                    }
                }
            }

            cursor = close + 2;
        }

        debug!(
            "{}: {} finding(s) in {}",
            self.name(),
            diagnostics.len(),
            document.uri()
        );
        Ok(diagnostics)
    }
}
