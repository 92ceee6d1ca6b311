use xi_rope::Rope;

use super::span::Span;

/// A single line of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based line number in the document.
    pub number: usize,
    /// Byte span of this line in the rope (includes the terminator if present).
    pub span: Span,
    /// The raw line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line text with its `\n` or `\r\n` terminator removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their numbers and byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which keeps spans exact
/// for both LF and CRLF input.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
