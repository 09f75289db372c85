//! Human-readable diagnostic rendering.

use std::io::{self, Write};

use sfcheck_document::{Diagnostic, Document};

/// Renders diagnostics as multi-line text blocks into an output sink.
///
/// One block per diagnostic: a header naming the document, a
/// `line:character message` line, the covered source lines tagged with
/// their line numbers, and a caret cursor under the diagnostic's start
/// line. Plain text for humans, not a machine-parseable format.
pub struct DiagnosticReporter<W: Write> {
    sink: W,
}

impl<W: Write> DiagnosticReporter<W> {
    /// Creates a reporter over the given sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Emits the block for one diagnostic.
    pub fn render(&mut self, document: &Document, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.sink)?;
        writeln!(self.sink, "Error in {}", document.fs_path())?;
        writeln!(
            self.sink,
            "{}:{} {}",
            diagnostic.range.start.line, diagnostic.range.start.character, diagnostic.message
        )?;

        // Context window clamped to [0, line_count)
        let last_line = document.line_count().saturating_sub(1);
        let first = diagnostic.range.start.line.min(last_line);
        let last = diagnostic.range.end.line.min(last_line);

        for line in first..=last {
            let text = document.line_text(line);
            writeln!(self.sink, "{line:>5} | {text}")?;

            if line == diagnostic.range.start.line {
                let start = diagnostic.range.start.character as usize;
                let width = if diagnostic.range.end.line == diagnostic.range.start.line {
                    (diagnostic.range.end.character as usize).saturating_sub(start)
                } else {
                    text.chars().count().saturating_sub(start)
                };
                writeln!(
                    self.sink,
                    "{:>5} | {}{}",
                    "",
                    " ".repeat(start),
                    "^".repeat(width.max(1))
                )?;
            }
        }

        Ok(())
    }

    /// Emits the early-stop notice for fail-fast runs.
    pub fn early_stop_notice(&mut self) -> io::Result<()> {
        writeln!(
            self.sink,
            "\nError found, stopping in fail-exit mode. Re-run locally without fail-exit for the complete list."
        )
    }

    /// Emits the end-of-run summary line.
    pub fn summary(&mut self, error_count: usize, file_count: usize) -> io::Result<()> {
        writeln!(
            self.sink,
            "\nFound: {error_count} errors in {file_count} file(s)"
        )
    }

    /// Releases the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfcheck_document::{Position, Range};
    use std::path::PathBuf;

    fn doc(text: &str) -> Document {
        Document::new(&PathBuf::from("/tmp/app.vue"), text.to_string())
    }

    fn rendered(document: &Document, diagnostic: &Diagnostic) -> String {
        let mut reporter = DiagnosticReporter::new(Vec::new());
        reporter.render(document, diagnostic).unwrap();
        String::from_utf8(reporter.into_sink()).unwrap()
    }

    #[test]
    fn renders_header_message_context_and_cursor() {
        let document = doc("<template>\n  <p>{{ missing }}</p>\n</template>\n");
        let diagnostic = Diagnostic::new(Range::on_line(1, 8, 15), "Property 'missing' is not defined in the script section");

        let output = rendered(&document, &diagnostic);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Error in /tmp/app.vue");
        assert_eq!(lines[2], "1:8 Property 'missing' is not defined in the script section");
        assert_eq!(lines[3], "    1 |   <p>{{ missing }}</p>");
        assert_eq!(lines[4], "      |         ^^^^^^^");
    }

    #[test]
    fn multi_line_range_prints_every_covered_line() {
        let document = doc("a\nbbb\nccc\nd\n");
        let diagnostic = Diagnostic::new(
            Range::new(Position::new(1, 1), Position::new(2, 2)),
            "spans lines",
        );

        let output = rendered(&document, &diagnostic);
        assert!(output.contains("    1 | bbb"));
        assert!(output.contains("    2 | ccc"));
        // cursor only under the start line, to end of that line
        assert_eq!(output.matches('^').count(), 2);
    }

    #[test]
    fn out_of_range_lines_are_clamped() {
        let document = doc("only\n");
        let diagnostic = Diagnostic::new(Range::on_line(10, 0, 4), "past the end");

        let output = rendered(&document, &diagnostic);
        assert!(output.contains("10:0 past the end"));
        // clamped to the last real line
        assert!(output.contains("    1 | "));
    }

    #[test]
    fn cursor_is_at_least_one_caret_wide() {
        let document = doc("x\n");
        let diagnostic = Diagnostic::new(Range::on_line(0, 0, 0), "zero width");
        assert_eq!(rendered(&document, &diagnostic).matches('^').count(), 1);
    }

    #[test]
    fn summary_format_is_stable() {
        let mut reporter = DiagnosticReporter::new(Vec::new());
        reporter.summary(0, 0).unwrap();
        let output = String::from_utf8(reporter.into_sink()).unwrap();
        assert_eq!(output, "\nFound: 0 errors in 0 file(s)\n");
    }
}
