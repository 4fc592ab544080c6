//! Integration tests covering the graph-description loader.

use std::io::Cursor;

use rstest::rstest;

use kumo_loader::{LoaderError, parse_description, try_from_path};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn parse(text: &str) -> kumo_loader::GraphDescription {
    parse_description(Cursor::new(text)).expect("description must tokenize")
}

#[test]
fn parses_a_well_formed_description() {
    let description = parse("3\nAurora\nBasalt\nCinder\n1 2\n2 3\n0 0\n");
    assert_eq!(description.vertex_count(), 3);
    assert_eq!(description.payloads(), ["Aurora", "Basalt", "Cinder"]);
    assert_eq!(description.edges(), [(1, 2), (2, 3)]);
}

#[test]
fn pairs_may_span_lines() {
    let description = parse("2\na\nb\n1\n2 2 1\n0 0\n");
    assert_eq!(description.edges(), [(1, 2), (2, 1)]);
}

#[rstest]
#[case::sentinel_mid_stream("4\na\nb\nc\nd\n1 2\n0 0\n3 4\n", vec![(1, 2)])]
#[case::sentinel_by_source_alone("2\na\nb\n0 9\n1 2\n", vec![])]
#[case::end_of_input("2\na\nb\n1 2\n", vec![(1, 2)])]
#[case::odd_trailing_token("2\na\nb\n1 2 1\n", vec![(1, 2)])]
#[case::unparseable_token_ends_stream("2\na\nb\n1 2\nx 1\n2 1\n", vec![(1, 2)])]
#[case::negative_pair_skipped("2\na\nb\n-1 2\n1 2\n", vec![(1, 2)])]
fn edge_stream_termination(#[case] text: &str, #[case] expected: Vec<(usize, usize)>) {
    assert_eq!(parse(text).edges(), expected);
}

#[test]
fn tolerates_missing_payload_lines() {
    let description = parse("4\nAurora\nBasalt\n");
    assert_eq!(description.vertex_count(), 4);
    assert_eq!(description.payloads(), ["Aurora", "Basalt"]);
    assert!(description.edges().is_empty());

    let graph = description.into_graph().expect("four vertices fit");
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.payload(2), Some("Basalt"));
    assert_eq!(graph.payload(4), Some(""));
}

#[test]
fn rejects_an_empty_description() {
    let err = parse_description(Cursor::new("")).expect_err("empty input has no header");
    assert!(matches!(err, LoaderError::MissingVertexCount));
}

#[test]
fn rejects_a_non_numeric_header() {
    let err = parse_description(Cursor::new("many\na\n")).expect_err("header must be a count");
    assert!(matches!(err, LoaderError::InvalidVertexCount { line } if line == "many"));
}

#[test]
fn into_graph_enforces_the_vertex_bound() {
    let description = parse("101\na\n");
    let err = description
        .into_graph()
        .expect_err("101 vertices exceed the bound");
    assert_eq!(err.code().as_str(), "GRAPH_TOO_MANY_VERTICES");
}

#[test]
fn builds_the_graph_described_on_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graph.txt");
    std::fs::write(&path, "3\nAurora\nBasalt\nCinder\n1 2\n2 1\n2 3\n3 2\n0 0\n")?;

    let graph = try_from_path(&path)?.into_graph()?;
    assert_eq!(graph.len(), 3);
    let chain: Vec<usize> = graph
        .neighbours(2)
        .expect("vertex 2 exists")
        .iter()
        .map(|id| id.get())
        .collect();
    assert_eq!(chain, vec![1, 3]);
    Ok(())
}
