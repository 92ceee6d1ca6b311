use super::kinds::{CodeFence, FenceKind};

/// A leaf block opener recognized by the default grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind },
}

/// Detects a default-grammar leaf opener at the start of `remainder`.
///
/// Registered recognizers are consulted by the pipeline before this runs.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    CodeFence::sig(remainder).map(|sig| BlockOpen::FencedCode {
        kind: sig.kind,
    })
}
