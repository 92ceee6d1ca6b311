//! Document tree produced by the pipeline.

use super::{blocks::BlockNode, rope::span::Span};

/// Identifies a node in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The document root, parent of every top-level node.
    pub const DOCUMENT: NodeId = NodeId(0);
}

/// A structured-metadata block at the very start of a document.
///
/// Built in one step by the front-matter recognizer once its closing
/// delimiter is seen, and immutable afterwards.
///
/// # Invariants
///
/// - `start_line <= end_line` (both 1-based, inclusive of delimiter lines)
/// - `raw_content` is the lines strictly between the delimiters, joined with
///   `\n`, with line terminators stripped
/// - `content_span` lies within `span`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterBlock {
    raw_content: String,
    start_line: usize,
    end_line: usize,
    span: Span,
    content_span: Span,
    parent: NodeId,
}

impl FrontMatterBlock {
    pub(crate) fn new(
        raw_content: String,
        lines: (usize, usize),
        span: Span,
        content_span: Span,
        parent: NodeId,
    ) -> Self {
        let (start_line, end_line) = lines;
        debug_assert!(start_line <= end_line);
        debug_assert!(span.contains(content_span));
        Self {
            raw_content,
            start_line,
            end_line,
            span,
            content_span,
            parent,
        }
    }

    /// The metadata text, unvalidated. Parsing it as JSON is up to the caller.
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Line of the opening delimiter.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Line of the closing delimiter.
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    /// Byte span of the whole block, both delimiter lines included.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Byte span of the lines between the delimiters.
    pub fn content_span(&self) -> Span {
        self.content_span
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }
}

/// A top-level node in the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// A block claimed by the front-matter recognizer.
    FrontMatter(FrontMatterBlock),
    /// A block produced by the default grammar.
    Block(BlockNode),
}

impl DocumentNode {
    pub fn span(&self) -> Span {
        match self {
            DocumentNode::FrontMatter(fm) => fm.span(),
            DocumentNode::Block(b) => b.span,
        }
    }

    /// 1-based inclusive line range.
    pub fn lines(&self) -> (usize, usize) {
        match self {
            DocumentNode::FrontMatter(fm) => (fm.start_line(), fm.end_line()),
            DocumentNode::Block(b) => (b.start_line, b.end_line),
        }
    }
}

/// A parsed document: top-level nodes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub nodes: Vec<DocumentNode>,
}

impl ParsedDoc {
    /// The document's front matter, if it has any.
    pub fn front_matter(&self) -> Option<&FrontMatterBlock> {
        self.nodes.iter().find_map(|n| match n {
            DocumentNode::FrontMatter(fm) => Some(fm),
            DocumentNode::Block(_) => None,
        })
    }

    /// Default-grammar blocks in source order.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockNode> {
        self.nodes.iter().filter_map(|n| match n {
            DocumentNode::Block(b) => Some(b),
            DocumentNode::FrontMatter(_) => None,
        })
    }
}
