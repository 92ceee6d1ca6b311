use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, ContainerFrame},
    nodes::{DocumentNode, ParsedDoc},
    rope::slice::preview,
};

/// Serializable view of a parsed document.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub nodes: Vec<NodeSnap>,
}

#[derive(Debug, Serialize)]
pub struct NodeSnap {
    /// e.g. "FrontMatter", "Paragraph", "FencedCode(Backticks)".
    pub kind: String,
    /// 1-based inclusive line range.
    pub lines: (usize, usize),
    /// Byte span as (start, end).
    pub span: (usize, usize),
    /// Container labels, e.g. ["Quote(1)"].
    pub containers: Vec<String>,
    /// Front matter payload, or a preview of the block's source.
    pub text: String,
}

impl Snap {
    /// One line per node, e.g. `FrontMatter L1-3 @0..31 "{}"`.
    pub fn outline(&self) -> String {
        self.nodes
            .iter()
            .map(|n| {
                let containers = if n.containers.is_empty() {
                    String::new()
                } else {
                    format!(" in {}", n.containers.join("/"))
                };
                format!(
                    "{} L{}-{} @{}..{}{} {:?}",
                    n.kind, n.lines.0, n.lines.1, n.span.0, n.span.1, containers, n.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn normalize(rope: &Rope, doc: &ParsedDoc) -> Snap {
    let nodes = doc
        .nodes
        .iter()
        .map(|node| {
            let span = node.span();
            let (kind, containers, text) = match node {
                DocumentNode::FrontMatter(fm) => {
                    ("FrontMatter".to_string(), vec![], fm.raw_content().to_string())
                }
                DocumentNode::Block(b) => {
                    let kind = match &b.kind {
                        BlockKind::Paragraph => "Paragraph".to_string(),
                        BlockKind::FencedCode { kind } => format!("FencedCode({kind:?})"),
                    };
                    let containers = b
                        .containers
                        .iter()
                        .map(|c| match c {
                            ContainerFrame::BlockQuote { depth } => format!("Quote({depth})"),
                        })
                        .collect();
                    (kind, containers, preview(rope, b.content_span, 40))
                }
            };
            NodeSnap {
                kind,
                lines: node.lines(),
                span: (span.start, span.end),
                containers,
                text,
            }
        })
        .collect();

    Snap { nodes }
}
