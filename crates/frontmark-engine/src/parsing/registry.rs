//! Ordered set of block extensions and the loop that drives one attempt.

use super::{
    cursor::SourceCursor,
    nodes::{DocumentNode, NodeId},
    recognizer::{BlockExtension, Continuation},
};

/// Outcome of offering the cursor's next line to the registered extensions.
#[derive(Debug)]
pub enum Attempt {
    /// No extension opened; the cursor has not moved.
    Declined,
    /// An extension claimed a block; the cursor sits after its last line.
    Recognized(DocumentNode),
    /// An extension opened but never closed. The cursor has been rewound to
    /// `start`, the position of the opening line.
    Unterminated { start: usize },
}

/// Extensions in priority order; the first one to open wins.
#[derive(Default)]
pub struct RecognizerRegistry {
    extensions: Vec<Box<dyn BlockExtension>>,
}

impl RecognizerRegistry {
    pub fn new(extensions: Vec<Box<dyn BlockExtension>>) -> Self {
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| e.name())
    }

    /// Runs one recognition attempt at the cursor's current position.
    pub fn attempt(&self, cursor: &mut SourceCursor, parent: NodeId) -> Attempt {
        let start = cursor.position();
        let at_start = cursor.is_at_document_start();

        let opened = {
            let Some(line) = cursor.peek() else {
                return Attempt::Declined;
            };
            self.extensions.iter().find_map(|ext| {
                let mut rec = ext.recognizer();
                rec.try_open(line, at_start).then(|| (ext, rec, line.number))
            })
        };
        let Some((ext, mut rec, line_number)) = opened else {
            return Attempt::Declined;
        };

        log::debug!("{} opened at line {line_number}", ext.name());
        cursor.advance();

        loop {
            let line = cursor.advance();
            if let Some(line) = line {
                log::trace!("{} offered line {}", ext.name(), line.number);
            }
            match rec.try_continue(line) {
                Continuation::Continue => {}
                Continuation::Close => {
                    let node = rec.finish(parent);
                    let (first, last) = node.lines();
                    log::debug!("{} closed lines {first}..={last}", ext.name());
                    return Attempt::Recognized(node);
                }
                Continuation::FailUnterminated => {
                    log::debug!(
                        "{} unterminated from line {line_number}; falling back",
                        ext.name()
                    );
                    cursor.rewind(start);
                    return Attempt::Unterminated { start };
                }
            }
        }
    }
}

impl std::fmt::Debug for RecognizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
