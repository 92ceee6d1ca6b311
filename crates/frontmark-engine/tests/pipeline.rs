use frontmark_engine::{
    BlockExtension, DocumentNode, FenceConfig, FrontMatterExtension, Pipeline, PipelineConfig,
    parse_document,
    parsing::{registry::RecognizerRegistry, snapshot},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn heading_after_front_matter_goes_to_default_grammar() {
    init_logging();
    let rope = Rope::from("---json\n{\"title\": \"Hello\"}\n---\n# Heading\n");
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc);

    let fm = doc.front_matter().expect("front matter");
    assert_eq!(fm.raw_content(), r#"{"title": "Hello"}"#);
    assert_eq!((fm.start_line(), fm.end_line()), (1, 3));

    let rest: Vec<_> = doc.blocks().map(|b| b.start_line).collect();
    assert_eq!(rest, vec![4]);
}

#[test]
fn delimiter_mid_document_yields_no_front_matter() {
    init_logging();
    let rope = Rope::from("# Heading\n---json\n{}\n---\n");
    let doc = parse_document(&rope);
    assert!(doc.front_matter().is_none());
    assert!(doc.nodes.iter().all(|n| matches!(n, DocumentNode::Block(_))));
}

#[rstest]
#[case::object("{\"title\": \"Hello\", \"tags\": [\"a\"]}")]
#[case::multi_line("{\n  \"title\": \"Hello\",\n  \"n\": 3\n}")]
#[case::not_json_at_all("title: Hello")]
#[case::empty("")]
fn reattaching_delimiters_reproduces_source(#[case] payload: &str) {
    let block = if payload.is_empty() {
        "---json\n---\n".to_string()
    } else {
        format!("---json\n{payload}\n---\n")
    };
    let src = format!("{block}after\n");
    let rope = Rope::from(src.as_str());
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc);

    let fm = doc.front_matter().expect("front matter");
    assert_eq!(fm.raw_content(), payload);

    let rebuilt = if fm.raw_content().is_empty() {
        "---json\n---\n".to_string()
    } else {
        format!("---json\n{}\n---\n", fm.raw_content())
    };
    assert_eq!(rebuilt, block);
    assert_eq!(rope.slice_to_cow(fm.span().start..fm.span().end), block);
}

#[test]
fn raw_content_is_handed_over_unvalidated() {
    let rope = Rope::from("---json\n{\"title\": \"Hello\", \"weight\": 2}\n---\n");
    let doc = parse_document(&rope);
    let fm = doc.front_matter().expect("front matter");

    let value: serde_json::Value = serde_json::from_str(fm.raw_content()).unwrap();
    assert_eq!(value["title"], "Hello");
    assert_eq!(value["weight"], 2);

    let broken = parse_document(&Rope::from("---json\n{not json\n---\n"));
    let fm = broken.front_matter().expect("recognized regardless of payload");
    assert!(serde_json::from_str::<serde_json::Value>(fm.raw_content()).is_err());
}

#[test]
fn reparse_is_identical() {
    let rope = Rope::from("---json\n{\"a\": [1, 2]}\n---\n\n```\ncode\n```\n");
    let pipeline = Pipeline::default();
    assert_eq!(pipeline.parse(&rope), pipeline.parse(&rope));
}

#[test]
fn pipelines_parse_documents_in_parallel() {
    let pipeline = Pipeline::default();
    let sources: Vec<String> = (0..8)
        .map(|i| format!("---json\n{{\"id\": {i}}}\n---\nbody {i}\n"))
        .collect();

    let contents: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = sources
            .iter()
            .map(|src| {
                let pipeline = &pipeline;
                s.spawn(move || {
                    let doc = pipeline.parse(&Rope::from(src.as_str()));
                    doc.front_matter().unwrap().raw_content().to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: Vec<String> = (0..8).map(|i| format!("{{\"id\": {i}}}")).collect();
    assert_eq!(contents, expected);
}

#[test]
fn configured_pipeline_lists_extensions_in_order() {
    let config = PipelineConfig::empty()
        .extension(FrontMatterExtension::new(FenceConfig::new("~~~json", "~~~")))
        .extension(FrontMatterExtension::default());
    let pipeline = Pipeline::new(config);
    let names: Vec<_> = pipeline.registry().names().collect();
    assert_eq!(names, vec!["json-front-matter", "json-front-matter"]);

    // The first extension owns `~~~json`, so the default grammar never sees
    // it as a tilde fence.
    let doc = pipeline.parse(&Rope::from("~~~json\n{}\n~~~\n"));
    assert_eq!(doc.front_matter().map(|fm| fm.raw_content()), Some("{}"));
}

#[test]
fn registry_accepts_any_extension() {
    let ext: Box<dyn BlockExtension> = Box::new(FrontMatterExtension::default());
    let registry = RecognizerRegistry::new(vec![ext]);
    assert!(!registry.is_empty());
}
