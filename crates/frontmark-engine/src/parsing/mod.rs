//! # Parsing
//!
//! A line-oriented block pipeline with pluggable recognizers.
//!
//! Every line is first offered to the registered [`BlockExtension`]s in
//! order; the first recognizer that opens owns the following lines until it
//! closes or reports an unterminated block. Everything else, including the
//! lines of an unterminated attempt, goes to the default grammar in
//! [`blocks`].

pub mod blocks;
pub mod cursor;
pub mod extensions;
pub mod nodes;
pub mod recognizer;
pub mod registry;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, MarkdownLineClassifier};
use cursor::SourceCursor;
use extensions::{FenceConfig, FrontMatterExtension};
use nodes::{DocumentNode, NodeId, ParsedDoc};
use recognizer::BlockExtension;
use registry::{Attempt, RecognizerRegistry};

/// Recognizers to install, highest priority first.
pub struct PipelineConfig {
    pub extensions: Vec<Box<dyn BlockExtension>>,
}

impl PipelineConfig {
    /// A configuration with no extensions: plain default grammar.
    pub fn empty() -> Self {
        Self { extensions: vec![] }
    }

    /// JSON front matter with the given delimiters.
    pub fn with_front_matter(fences: FenceConfig) -> Self {
        Self::empty().extension(FrontMatterExtension::new(fences))
    }

    pub fn extension(mut self, ext: impl BlockExtension + 'static) -> Self {
        self.extensions.push(Box::new(ext));
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::with_front_matter(FenceConfig::default())
    }
}

/// Parses documents with a fixed set of extensions.
///
/// A pipeline holds no per-document state and can be shared across threads.
#[derive(Debug)]
pub struct Pipeline {
    registry: RecognizerRegistry,
    classifier: MarkdownLineClassifier,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            registry: RecognizerRegistry::new(config.extensions),
            classifier: MarkdownLineClassifier,
        }
    }

    pub fn registry(&self) -> &RecognizerRegistry {
        &self.registry
    }

    pub fn parse(&self, rope: &Rope) -> ParsedDoc {
        let mut cursor = SourceCursor::new(rope);
        let mut builder = BlockBuilder::new();
        let mut nodes = Vec::new();
        // Position whose extensions already failed; it goes straight to the
        // default grammar on the next pass.
        let mut fallback_at = None;

        while !cursor.is_exhausted() {
            let pos = cursor.position();
            if fallback_at != Some(pos) && !builder.in_raw_zone() {
                match self.registry.attempt(&mut cursor, NodeId::DOCUMENT) {
                    Attempt::Recognized(node) => {
                        nodes.extend(builder.drain().into_iter().map(DocumentNode::Block));
                        nodes.push(node);
                        continue;
                    }
                    Attempt::Unterminated { start } => {
                        fallback_at = Some(start);
                        continue;
                    }
                    Attempt::Declined => {}
                }
            }

            if let Some(line) = cursor.advance() {
                builder.push(&self.classifier.classify(line));
            }
        }

        nodes.extend(builder.finish().into_iter().map(DocumentNode::Block));
        ParsedDoc { nodes }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Parses `rope` with JSON front matter enabled and default delimiters.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    Pipeline::default().parse(rope)
}
