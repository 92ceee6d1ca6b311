use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context; the `BlockBuilder` supplies the context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number.
    pub number: usize,
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only after stripping prefixes).
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Byte span of the line content after stripping quote prefixes.
    pub remainder_span: Span,
    /// Text content after stripping prefixes.
    pub remainder_text: String,
    /// If the remainder looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the default grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.trimmed();
        let is_blank = trimmed.trim().is_empty();

        let (qd, idx) = BlockQuote::strip_prefixes(trimmed);
        let remainder = &trimmed[idx..];

        LineClass {
            number: lr.number,
            line: lr.span,
            is_blank,
            quote_depth: qd,
            remainder_span: Span {
                start: lr.span.start + idx,
                end: lr.span.start + trimmed.len(),
            },
            remainder_text: remainder.to_string(),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}
