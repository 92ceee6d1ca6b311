//! Parser-level tests. Outlines are compared with inline `insta` snapshots.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    Pipeline, PipelineConfig,
    extensions::FenceConfig,
    nodes::DocumentNode,
    parse_document, snapshot,
};

fn outline_with(pipeline: &Pipeline, src: &str) -> String {
    let rope = Rope::from(src);
    let doc = pipeline.parse(&rope);
    snapshot::invariants(&rope, &doc);
    snapshot::normalize(&rope, &doc).outline()
}

fn outline(src: &str) -> String {
    outline_with(&Pipeline::default(), src)
}

#[test]
fn front_matter_then_body() {
    insta::assert_snapshot!(outline("---json\n{\"title\": \"Hello\"}\n---\n# Heading\n"), @r##"
    FrontMatter L1-3 @0..31 "{\"title\": \"Hello\"}"
    Paragraph L4-4 @31..41 "# Heading\n"
    "##);
}

#[test]
fn delimiter_after_first_line_is_plain_content() {
    insta::assert_snapshot!(outline("# Heading\n---json\n{}\n---\n"), @r##"
    Paragraph L1-4 @0..25 "# Heading\n---json\n{}\n---\n"
    "##);
}

#[test]
fn unterminated_front_matter_falls_back() {
    insta::assert_snapshot!(outline("---json\n{\"a\": 1}\n\nbody\n"), @r##"
    Paragraph L1-2 @0..17 "---json\n{\"a\": 1}\n"
    Paragraph L4-4 @18..23 "body\n"
    "##);
}

#[test]
fn empty_front_matter() {
    insta::assert_snapshot!(outline("---json\n---\n"), @r##"
    FrontMatter L1-2 @0..12 ""
    "##);
}

#[test]
fn body_quote_after_front_matter() {
    insta::assert_snapshot!(outline("---json\n{}\n---\n> quoted\n> more\n"), @r##"
    FrontMatter L1-3 @0..15 "{}"
    Paragraph L4-5 @15..31 in Quote(1) "quoted\n> more\n"
    "##);
}

#[test]
fn later_delimiter_inside_code_fence_stays_code() {
    insta::assert_snapshot!(outline("---json\n{}\n---\n```\n---json\n```\n"), @r##"
    FrontMatter L1-3 @0..15 "{}"
    FencedCode(Backticks) L4-6 @15..31 "```\n---json\n```\n"
    "##);
}

#[rstest]
#[case::unterminated("---json\n{\"a\": 1}\n\nbody\n")]
#[case::opening_only("---json\n")]
#[case::close_missing_after_fence("---json\n```\n{}\n```\n")]
fn failed_recognition_matches_plain_grammar(#[case] src: &str) {
    let plain = Pipeline::new(PipelineConfig::empty());
    let rope = Rope::from(src);
    assert_eq!(Pipeline::default().parse(&rope), plain.parse(&rope));
}

#[rstest]
#[case::paragraph("hello\nworld\n")]
#[case::leading_blank("\n---json\n{}\n---\n")]
#[case::yaml_front_matter("---\ntitle: x\n---\n")]
#[case::indented_delimiter("  ---json\n{}\n---\n")]
fn no_front_matter_without_exact_first_line(#[case] src: &str) {
    let doc = parse_document(&Rope::from(src));
    assert!(doc.front_matter().is_none());
}

#[test]
fn custom_delimiters() {
    let pipeline = Pipeline::new(PipelineConfig::with_front_matter(FenceConfig::new(
        "+++json", "+++",
    )));
    insta::assert_snapshot!(outline_with(&pipeline, "+++json\n{}\n+++\n---json\n"), @r##"
    FrontMatter L1-3 @0..15 "{}"
    Paragraph L4-4 @15..23 "---json\n"
    "##);
}

#[test]
fn crlf_payload_is_normalized() {
    let rope = Rope::from("---json\r\n{\r\n\"a\": 1\r\n}\r\n---\r\nbody\r\n");
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc);

    let fm = doc.front_matter().unwrap();
    assert_eq!(fm.raw_content(), "{\n\"a\": 1\n}");
    assert_eq!(
        rope.slice_to_cow(fm.span().start..fm.span().end),
        "---json\r\n{\r\n\"a\": 1\r\n}\r\n---\r\n"
    );
}

#[test]
fn front_matter_is_first_node() {
    let doc = parse_document(&Rope::from("---json\n{}\n---\n\npara\n"));
    assert!(matches!(doc.nodes[0], DocumentNode::FrontMatter(_)));
    assert_eq!(doc.blocks().count(), 1);
}

#[test]
fn empty_document() {
    let doc = parse_document(&Rope::from(""));
    assert!(doc.nodes.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document(&Rope::from("\n\n\n"));
    assert!(doc.nodes.is_empty());
}
