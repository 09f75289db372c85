//! Script-region extraction.
//!
//! Produces the `<script>`-only sub-view of a component document. Component
//! files are sliced to the embedded script content; non-component files
//! (plain `ts`/`tsx` sources) are the script region in their entirety.
//!
//! Extraction is textual, not a structural parse: the first `<script …>`
//! open tag and the first `</script>` close tag after it delimit the
//! region. Attribute values are sniffed with single-line patterns.

use std::sync::LazyLock;

use regex::Regex;

use crate::Document;

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<script\b[^>]*>").expect("static pattern"));
static LANG_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"lang=["']([^"']+)["']"#).expect("static pattern"));
static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=["']([^"']+)["']"#).expect("static pattern"));

/// The script-only sub-view of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRegion {
    /// Script content, byte-for-byte.
    pub text: String,
    /// Byte offset of the content start within the owning document.
    pub offset: usize,
    /// Value of the `lang` attribute on the script tag, if any.
    pub lang: Option<String>,
    /// Value of the `src` attribute on the script tag, if any.
    pub src: Option<String>,
}

impl ScriptRegion {
    /// Extracts the script region from a document.
    ///
    /// Returns `None` for a component document with no script section.
    pub fn extract(document: &Document) -> Option<Self> {
        let text = document.text();

        if document.language_tag() != "vue" {
            return Some(Self {
                text: text.to_string(),
                offset: 0,
                lang: Some(document.language_tag().to_string()),
                src: None,
            });
        }

        let open = OPEN_TAG.find(text)?;
        let content_start = open.end();
        let content_end = text[content_start..]
            .find("</script>")
            .map(|rel| content_start + rel)
            .unwrap_or(text.len());

        let tag = open.as_str();
        let lang = LANG_ATTR.captures(tag).map(|c| c[1].to_string());
        let src = SRC_ATTR.captures(tag).map(|c| c[1].to_string());

        Some(Self {
            text: text[content_start..content_end].to_string(),
            offset: content_start,
            lang,
            src,
        })
    }
}
