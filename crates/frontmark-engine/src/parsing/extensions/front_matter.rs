//! JSON front matter.
//!
//! ```text
//! ---json
//! {"title": "Hello"}
//! ---
//! # Body starts here
//! ```
//!
//! Only recognized when the opening delimiter is the very first line of the
//! document, which keeps it apart from look-alike fences further down. The
//! payload is kept verbatim; nothing here parses or validates JSON.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::parsing::{
    nodes::{DocumentNode, FrontMatterBlock, NodeId},
    recognizer::{BlockExtension, BlockRecognizer, Continuation, Phase},
    rope::{LineRef, Span},
};

/// Delimiter lines for a front-matter block.
///
/// A line matches a delimiter when it equals it exactly once its `\n` or
/// `\r\n` terminator is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenceConfig {
    pub open: String,
    pub close: String,
}

impl FenceConfig {
    pub const DEFAULT_OPEN: &'static str = "---json";
    pub const DEFAULT_CLOSE: &'static str = "---";

    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OPEN, Self::DEFAULT_CLOSE)
    }
}

/// Registers JSON front-matter recognition with the pipeline.
#[derive(Debug, Clone, Default)]
pub struct FrontMatterExtension {
    fences: Arc<FenceConfig>,
}

impl FrontMatterExtension {
    pub fn new(fences: FenceConfig) -> Self {
        Self {
            fences: Arc::new(fences),
        }
    }

    pub fn fences(&self) -> &FenceConfig {
        &self.fences
    }
}

impl BlockExtension for FrontMatterExtension {
    fn name(&self) -> &str {
        "json-front-matter"
    }

    fn recognizer(&self) -> Box<dyn BlockRecognizer> {
        Box::new(FrontMatterRecognizer::new(Arc::clone(&self.fences)))
    }
}

/// One attempt at recognizing front matter.
#[derive(Debug)]
pub struct FrontMatterRecognizer {
    fences: Arc<FenceConfig>,
    phase: Phase,
    /// Line number and span of the opening delimiter.
    opened: Option<(usize, Span)>,
    /// Line number and span of the closing delimiter.
    closed: Option<(usize, Span)>,
    /// Lines between the delimiters; empty unless Open or Closed.
    buffered: Vec<LineRef>,
}

impl FrontMatterRecognizer {
    pub fn new(fences: Arc<FenceConfig>) -> Self {
        Self {
            fences,
            phase: Phase::Seeking,
            opened: None,
            closed: None,
            buffered: Vec::new(),
        }
    }

    fn expect_phase(&self, expected: Phase, operation: &str) {
        assert!(
            self.phase == expected,
            "front matter recognizer: `{operation}` requires phase {expected:?}, found {:?}",
            self.phase
        );
    }

    fn build(&self, parent: NodeId) -> FrontMatterBlock {
        let (Some((start_line, open_span)), Some((end_line, close_span))) =
            (self.opened, self.closed)
        else {
            unreachable!("closed recognizer always records both delimiters");
        };

        let raw_content = self
            .buffered
            .iter()
            .map(LineRef::trimmed)
            .collect::<Vec<_>>()
            .join("\n");

        let content_span = match (self.buffered.first(), self.buffered.last()) {
            (Some(first), Some(last)) => first.span.cover(last.span),
            _ => Span::empty_at(open_span.end),
        };

        FrontMatterBlock::new(
            raw_content,
            (start_line, end_line),
            open_span.cover(close_span),
            content_span,
            parent,
        )
    }
}

impl BlockRecognizer for FrontMatterRecognizer {
    fn try_open(&mut self, line: &LineRef, at_document_start: bool) -> bool {
        self.expect_phase(Phase::Seeking, "try_open");
        if !at_document_start || line.trimmed() != self.fences.open {
            return false;
        }
        self.phase = Phase::Open;
        self.opened = Some((line.number, line.span));
        true
    }

    fn try_continue(&mut self, line: Option<&LineRef>) -> Continuation {
        self.expect_phase(Phase::Open, "try_continue");
        match line {
            None => {
                self.phase = Phase::Failed;
                self.buffered.clear();
                Continuation::FailUnterminated
            }
            Some(line) if line.trimmed() == self.fences.close => {
                self.phase = Phase::Closed;
                self.closed = Some((line.number, line.span));
                Continuation::Close
            }
            Some(line) => {
                self.buffered.push(line.clone());
                Continuation::Continue
            }
        }
    }

    fn finish(self: Box<Self>, parent: NodeId) -> DocumentNode {
        self.expect_phase(Phase::Closed, "finish");
        DocumentNode::FrontMatter(self.build(parent))
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}
