//! # Recognizer Contract
//!
//! A recognizer decides whether the line under the cursor opens a block of
//! its kind and, if so, consumes exactly the lines belonging to that block.
//!
//! ## Lifecycle
//!
//! ```text
//! Seeking --try_open(true)--> Open --Close--> Closed --finish()--> node
//!                               \
//!                                `--FailUnterminated--> Failed
//! ```
//!
//! Recognizers are single use: the registry asks a [`BlockExtension`] for a
//! fresh instance for every attempt. Calling an operation outside the
//! sequence above is a programmer error and panics.

use super::{
    nodes::{DocumentNode, NodeId},
    rope::LineRef,
};

/// Where a recognizer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Seeking,
    Open,
    Closed,
    Failed,
}

/// Result of offering one more line to an open recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The line belongs to the block; keep feeding.
    Continue,
    /// The line was the closing delimiter; call `finish`.
    Close,
    /// The document ended before a closing delimiter. The caller should
    /// hand the lines from the opening one onward back to the default grammar.
    FailUnterminated,
}

/// A single recognition attempt at one document position.
pub trait BlockRecognizer {
    /// Probes `line` without consuming it. Returning `true` transfers line
    /// consumption to this recognizer.
    fn try_open(&mut self, line: &LineRef, at_document_start: bool) -> bool;

    /// Offers the next line, or `None` once the cursor is exhausted.
    fn try_continue(&mut self, line: Option<&LineRef>) -> Continuation;

    /// Builds the finished node. Only valid after [`Continuation::Close`].
    fn finish(self: Box<Self>, parent: NodeId) -> DocumentNode;

    fn phase(&self) -> Phase;
}

/// A pluggable block kind registered with the pipeline.
///
/// Extensions are shared across documents, so they only hold configuration
/// and hand out a new recognizer per attempt.
pub trait BlockExtension: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn recognizer(&self) -> Box<dyn BlockRecognizer>;
}
