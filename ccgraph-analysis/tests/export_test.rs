//! Edge-list export tests: first-seen index assignment and file round trip.

use std::fs;

use ccgraph_analysis::export::{json_to_csv, write_edge_list};
use ccgraph_analysis::loader::load_from_value;
use ccgraph_analysis::selection::by_predicate;
use ccgraph_core::config::LoaderConfig;
use ccgraph_core::errors::ExportError;
use serde_json::json;

fn sample_doc() -> serde_json::Value {
    json!({
        "nodes": [{"id": "z"}, {"id": "m"}, {"id": "a"}, {"id": "m"}],
        "links": [
            {"source": "a", "target": "z", "value": 1},
            {"source": "z", "target": "m", "value": 2},
            {"source": "a", "target": "z", "value": 3}
        ]
    })
}

#[test]
fn indices_follow_first_appearance() {
    let (g, _) = load_from_value(sample_doc(), &LoaderConfig::default()).unwrap();
    let mut out = Vec::new();
    let lines = write_edge_list(&g, &mut out).unwrap();
    assert_eq!(lines, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "2,0\n0,1\n2,0\n");
}

#[test]
fn view_export_renumbers_members() {
    let (g, _) = load_from_value(sample_doc(), &LoaderConfig::default()).unwrap();
    let view = by_predicate(&g, |id, _| id != "m");
    let mut out = Vec::new();
    write_edge_list(&view, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1,0\n1,0\n");
}

#[test]
fn json_file_to_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let output = dir.path().join("edges.csv");
    fs::write(&input, sample_doc().to_string()).unwrap();

    let lines = json_to_csv(&input, &output, &LoaderConfig::default()).unwrap();
    assert_eq!(lines, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), "2,0\n0,1\n2,0\n");
}

#[test]
fn json_to_csv_surfaces_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    fs::write(
        &input,
        json!({"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "b", "value": 1}]}).to_string(),
    )
    .unwrap();
    let err = json_to_csv(&input, &dir.path().join("out.csv"), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, ExportError::Load(_)));
}
