use xi_rope::Rope;

use crate::parsing::{
    nodes::{DocumentNode, ParsedDoc},
    rope::{lines_with_spans, slice::slice_to_string},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - every node span lies within the rope, and nodes are ordered and disjoint
/// - every node's line range is well formed
/// - front matter, when present, is the first node and starts on line 1
/// - front matter content is exactly the delimited lines, newline-normalized
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, doc: &ParsedDoc) {
    let n = rope.len();
    let mut prev_end = 0usize;

    for (i, node) in doc.nodes.iter().enumerate() {
        let span = node.span();
        assert!(
            span.start <= span.end && span.end <= n,
            "node span out of bounds: {span:?} (rope len: {n})"
        );
        assert!(
            span.start >= prev_end,
            "node {i} overlaps its predecessor: {span:?} starts before {prev_end}"
        );
        prev_end = span.end;

        let (first, last) = node.lines();
        assert!(
            1 <= first && first <= last,
            "bad line range {first}..={last} on node {i}"
        );

        match node {
            DocumentNode::FrontMatter(fm) => {
                assert_eq!(i, 0, "front matter must be the first node");
                assert_eq!(fm.start_line(), 1, "front matter must start on line 1");
                assert!(
                    span.contains(fm.content_span()),
                    "content span {:?} not inside {span:?}",
                    fm.content_span()
                );
                let inner = slice_to_string(rope, fm.content_span());
                let expected = lines_with_spans(&xi_rope::Rope::from(inner.as_str()))
                    .map(|l| l.trimmed().to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                assert_eq!(
                    fm.raw_content(),
                    expected,
                    "front matter content does not match its source lines"
                );
            }
            DocumentNode::Block(b) => {
                assert!(
                    span.contains(b.content_span),
                    "content span not contained in block span: content {:?}, block {span:?}",
                    b.content_span
                );
            }
        }
    }
}
