//! Aggregation report tests: per-node distributions, per-license totals,
//! and graph summaries over whole graphs and views.

use ccgraph_analysis::loader::load_from_value;
use ccgraph_analysis::report::{license_totals, licenses_by_node, summarize, LicenseTotals};
use ccgraph_analysis::selection::by_dominant_license;
use ccgraph_core::config::LoaderConfig;
use ccgraph_core::graph::LicenseGraph;
use serde_json::json;

fn mixed_graph() -> LicenseGraph {
    let doc = json!({
        "nodes": [
            {"id": "wiki", "cc_licenses": {"by-sa": 10, "by": 10}},
            {"id": "flickr", "cc_licenses": {"by": 6, "by-nc": 2, "cc0": 1}},
            {"id": "museum", "cc_licenses": {"cc0": 4}},
            {"id": "blank", "cc_licenses": {}},
            {"id": "broken", "cc_licenses": "by"},
            {"id": "bare"}
        ],
        "links": [
            {"source": "wiki", "target": "flickr", "value": 3},
            {"source": "flickr", "target": "museum", "value": 4},
            {"source": "museum", "target": "bare", "value": 5}
        ]
    });
    load_from_value(doc, &LoaderConfig::default()).unwrap().0
}

#[test]
fn licenses_by_node_skips_nodes_without_data() {
    let report = licenses_by_node(&mixed_graph());
    assert_eq!(
        report.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["flickr", "museum", "wiki"]
    );
    assert_eq!(report["flickr"].total(), 9);
}

#[test]
fn licenses_by_node_over_view() {
    let g = mixed_graph();
    let view = by_dominant_license(&g, "cc0");
    let report = licenses_by_node(&view);
    assert_eq!(report.len(), 1);
    assert!(report.contains_key("museum"));
}

#[test]
fn license_totals_count_nodes_uses_and_dominance() {
    let totals = license_totals(&mixed_graph());
    assert_eq!(
        totals["by"],
        LicenseTotals {
            nodes: 2,
            uses: 16,
            dominant_nodes: 2
        }
    );
    assert_eq!(
        totals["by-sa"],
        LicenseTotals {
            nodes: 1,
            uses: 10,
            dominant_nodes: 1
        }
    );
    assert_eq!(
        totals["cc0"],
        LicenseTotals {
            nodes: 2,
            uses: 5,
            dominant_nodes: 1
        }
    );
    assert_eq!(totals["by-nc"].dominant_nodes, 0);
}

#[test]
fn summary_covers_structure_and_licenses() {
    let summary = summarize(&mixed_graph());
    assert_eq!(summary.nodes, 6);
    assert_eq!(summary.edges, 3);
    assert_eq!(summary.total_weight, 12);
    assert_eq!(summary.licensed_nodes, 3);
    assert_eq!(summary.distinct_licenses, 4);
    assert_eq!(summary.total_license_uses, 33);

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["licensed_nodes"], 3);
}
