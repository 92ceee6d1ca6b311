use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    kinds::{CodeFence, FenceSig},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

/// First and most recent line of an open leaf.
#[derive(Debug, Clone, Copy)]
struct Extent {
    start: Span,
    start_line: usize,
    last_line_end: usize,
    last_line: usize,
}

impl Extent {
    fn at(c: &LineClass) -> Self {
        Self {
            start: c.line,
            start_line: c.number,
            last_line_end: c.line.end,
            last_line: c.number,
        }
    }

    fn extend(&mut self, c: &LineClass) {
        self.last_line_end = c.line.end;
        self.last_line = c.number;
    }
}

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph { extent: Extent, content_start: usize },
    Fence { open: FenceSig, extent: Extent },
}

/// State machine for the default grammar: turns classified lines into
/// paragraphs and fenced code blocks.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_raw_zone() {
            self.containers.set_blockquote_depth(c.quote_depth);
            self.consume_fence_line(c);
            return;
        }

        // A blank line or a change of quote depth ends the paragraph under
        // the containers it was opened in.
        if c.is_blank || c.quote_depth != self.containers.blockquote_depth() {
            self.flush_paragraph();
        }
        self.containers.set_blockquote_depth(c.quote_depth);
        if c.is_blank {
            return;
        }

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_paragraph();
            self.open_leaf(open, c);
            return;
        }

        self.extend_paragraph(c);
    }

    /// True while inside a fenced code block; no other syntax is recognized there.
    pub fn in_raw_zone(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    /// Closes any open paragraph and hands back everything emitted so far.
    ///
    /// Used when a registered recognizer claims the next lines, so that
    /// blocks stay in document order.
    pub fn drain(&mut self) -> Vec<BlockNode> {
        self.flush_paragraph();
        std::mem::take(&mut self.out)
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        match open {
            BlockOpen::FencedCode { .. } => {
                if let Some(sig) = c.fence_sig {
                    self.leaf = LeafState::Fence {
                        open: sig,
                        extent: Extent::at(c),
                    };
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { open, mut extent } = self.leaf else {
            return;
        };
        extent.extend(c);
        self.leaf = LeafState::Fence { open, extent };

        if CodeFence::closes(open, c.fence_sig) {
            self.flush_fence();
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph { extent, .. } = &mut self.leaf {
            extent.extend(c);
            return;
        }
        self.leaf = LeafState::Paragraph {
            extent: Extent::at(c),
            content_start: c.remainder_span.start,
        };
    }

    fn flush_paragraph(&mut self) {
        if let LeafState::Paragraph {
            extent,
            content_start,
        } = self.leaf
        {
            self.leaf = LeafState::None;
            self.emit(BlockKind::Paragraph, extent, content_start);
        }
    }

    /// Emits the open fence. At EOF an unterminated fence is emitted as-is.
    fn flush_fence(&mut self) {
        if let LeafState::Fence { open, extent } = self.leaf {
            self.leaf = LeafState::None;
            self.emit(
                BlockKind::FencedCode { kind: open.kind },
                extent,
                extent.start.start,
            );
        }
    }

    fn emit(&mut self, kind: BlockKind, extent: Extent, content_start: usize) {
        self.out.push(BlockNode {
            containers: self.containers.frames(),
            kind,
            span: Span::new(extent.start.start, extent.last_line_end),
            content_span: Span::new(content_start, extent.last_line_end),
            start_line: extent.start_line,
            end_line: extent.last_line,
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
