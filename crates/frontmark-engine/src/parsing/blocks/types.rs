use crate::parsing::rope::span::Span;

use super::kinds::FenceKind;

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks (paragraphs, code blocks) and can nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

/// The kind of a leaf block produced by the default grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
    },
}

/// A block produced by the default grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    /// The kind of leaf block (Paragraph, FencedCode, etc.)
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span (excludes prefixes like `>` on the first line).
    pub content_span: Span,
    /// 1-based number of the first line of the block.
    pub start_line: usize,
    /// 1-based number of the last line of the block (inclusive).
    pub end_line: usize,
}
