use regex::Regex;
use std::sync::LazyLock;

/// A blank line: a newline, optional whitespace (which may hold more
/// newlines), then another newline.
#[allow(clippy::unwrap_used)]
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    // unwrap is safe: pattern is a compile-time constant
    Regex::new(r"\n\s*\n").unwrap()
});

/// One blank-line-delimited paragraph of source text.
///
/// The text is kept exactly as it appeared in the source; only the
/// decision to keep or drop the chunk looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Raw paragraph text.
    pub text: String,
}

/// Splits `source` into paragraphs on blank lines.
///
/// Runs of several blank lines, or blank lines holding only spaces and
/// tabs, count as one boundary. Segments that are empty after trimming are
/// dropped, so whitespace-only input yields no chunks.
pub fn split_chunks(source: &str) -> Vec<Chunk> {
    PARAGRAPH_BREAK
        .split(source)
        .filter(|segment| !segment.trim().is_empty())
        .map(|text| Chunk {
            text: text.to_string(),
        })
        .collect()
}
