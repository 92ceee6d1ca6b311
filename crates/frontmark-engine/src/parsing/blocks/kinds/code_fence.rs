/// Which character a code fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Signature of a line that looks like a fence opener or closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence run (at least [`CodeFence::MIN_LEN`]).
    pub len: usize,
    /// Whether anything other than whitespace follows the run.
    pub has_info: bool,
}

/// Fenced code block syntax.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let (kind, ch) = match t.as_bytes().first()? {
            b'`' => (FenceKind::Backticks, '`'),
            b'~' => (FenceKind::Tildes, '~'),
            _ => return None,
        };
        let len = t.len() - t.trim_start_matches(ch).len();
        if len < Self::MIN_LEN {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            has_info: !t[len..].trim().is_empty(),
        })
    }

    /// A closer must use the same character, be at least as long as the
    /// opener, and carry no info string.
    pub fn closes(open: FenceSig, line: Option<FenceSig>) -> bool {
        line.is_some_and(|l| l.kind == open.kind && l.len >= open.len && !l.has_info)
    }
}
