//! Line-addressed view of a document for block recognition.

use xi_rope::Rope;

use super::rope::{LineRef, lines_with_spans};

/// An ordered, position-tracked cursor over the lines of a document.
///
/// The cursor owns a line snapshot taken at construction; recognizers only
/// ever see `&LineRef`s and never mutate the underlying text.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    lines: Vec<LineRef>,
    /// Index of the next line to be consumed.
    pos: usize,
}

impl SourceCursor {
    /// Creates a cursor positioned before the first line of `rope`.
    pub fn new(rope: &Rope) -> Self {
        Self {
            lines: lines_with_spans(rope).collect(),
            pos: 0,
        }
    }

    /// Index of the next line to be consumed (0-based).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True while no line has been consumed yet.
    pub fn is_at_document_start(&self) -> bool {
        self.pos == 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Total number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The next line without consuming it.
    pub fn peek(&self) -> Option<&LineRef> {
        self.lines.get(self.pos)
    }

    /// Consumes and returns the next line, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<&LineRef> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }

    /// Moves the cursor back to a previously observed position.
    ///
    /// # Panics
    /// Panics if `pos` lies ahead of the current position; a cursor only
    /// ever rewinds.
    pub fn rewind(&mut self, pos: usize) {
        assert!(
            pos <= self.pos,
            "cursor can only rewind: requested {pos}, current {}",
            self.pos
        );
        self.pos = pos;
    }
}
