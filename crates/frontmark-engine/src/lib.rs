pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::{IoError, read_document, read_source};
pub use parsing::{
    Pipeline, PipelineConfig,
    extensions::{FenceConfig, FrontMatterExtension},
    nodes::{DocumentNode, FrontMatterBlock, NodeId, ParsedDoc},
    parse_document,
    recognizer::{BlockExtension, BlockRecognizer, Continuation, Phase},
};
