//! Strict-dialect source classification.

use regex::Regex;

/// Decides whether a file's script section is written in the strict
/// dialect and therefore eligible when only strict sources are checked.
///
/// Classification is single-line regex sniffing over raw text, not a
/// structural parse: a multi-line script tag or reordered attributes may
/// be misclassified. That heuristic behavior is intentional and kept
/// behind this type so it can later be swapped for a real single-file
/// component parser without touching selection or orchestration.
pub struct SourceClassifier {
    strict_lang: Regex,
    external_src: Regex,
}

impl SourceClassifier {
    /// Creates a classifier with its sniffing patterns compiled.
    pub fn new() -> Self {
        Self {
            strict_lang: Regex::new(r#"<script[^>\n]*\blang=["'](?:ts|tsx)["']"#)
                .expect("static pattern"),
            external_src: Regex::new(r#"<script[^>\n]*\bsrc="#).expect("static pattern"),
        }
    }

    /// Whether a file is eligible for strict-only checking.
    pub fn is_eligible(&self, extension_tag: &str, raw_text: &str) -> bool {
        // Non-component files are strict-dialect by construction.
        if extension_tag != "vue" {
            return true;
        }
        // Nothing to exclude without a script section.
        if !raw_text.contains("<script") {
            return true;
        }
        if self.strict_lang.is_match(raw_text) {
            return true;
        }
        // External script, presumed strict and classified independently.
        if self.external_src.is_match(raw_text) {
            return true;
        }
        false
    }
}

impl Default for SourceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
