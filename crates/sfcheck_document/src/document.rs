//! In-memory document model.

use std::path::Path;

/// Version assigned to every document in a fresh batch run.
pub const INITIAL_VERSION: i32 = 1;

/// An in-memory copy of a selected file, owned by one run.
///
/// The text is a byte-for-byte copy of the file content; downstream
/// line/character offsets are computed against this exact content, so no
/// normalization may happen here.
#[derive(Debug, Clone)]
pub struct Document {
    uri: String,
    language_tag: String,
    version: i32,
    text: String,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl Document {
    /// Creates a document from an absolute path and its raw content.
    ///
    /// The uri is derived deterministically from the path; component files
    /// (`.vue`) get the `vue` language tag, everything else its extension.
    pub fn new(path: &Path, text: String) -> Self {
        let uri = format!("file://{}", path.display());
        let language_tag = match path.extension().and_then(|e| e.to_str()) {
            Some("vue") => "vue".to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let line_starts = compute_line_starts(&text);

        Self {
            uri,
            language_tag,
            version: INITIAL_VERSION,
            text,
            line_starts,
        }
    }

    /// Document identity, stable for the duration of a run.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Filesystem path portion of the uri.
    pub fn fs_path(&self) -> &str {
        self.uri.strip_prefix("file://").unwrap_or(&self.uri)
    }

    /// Language tag derived from the file extension.
    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    /// Document version, always [`INITIAL_VERSION`] for a fresh run.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Full document text, byte-for-byte as read from disk.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Text of the given line with the trailing line terminator stripped.
    ///
    /// Returns an empty string for out-of-range lines.
    pub fn line_text(&self, line: u32) -> &str {
        let line = line as usize;
        let Some(&start) = self.line_starts.get(line) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        self.text[start..end].trim_end_matches(['\n', '\r'])
    }

    /// Converts a byte offset into a zero-based (line, character) pair.
    ///
    /// The character column counts characters, not bytes, matching the
    /// coordinates validators report.
    pub fn position_at(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let character = self.text[start..offset].chars().count();
        (line as u32, character as u32)
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (idx, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(idx + 1);
        }
    }
    starts
}
