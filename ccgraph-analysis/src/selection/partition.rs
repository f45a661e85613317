//! Threshold-based multi-license selection.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use ccgraph_core::graph::{GraphEngine, SubgraphView};

use super::predicate::by_predicate;
use super::thresholds::SelectionThresholds;

/// One induced subgraph per requested license, holding the nodes whose
/// count for that license passes `thresholds`.
///
/// Licenses are evaluated independently (in parallel), so a node may appear
/// in several results; despite the name these are not disjoint. A license no
/// node carries maps to an empty view.
pub fn partition_by_licenses<'g, G, I, S>(
    graph: &'g G,
    licenses: I,
    thresholds: &SelectionThresholds,
) -> BTreeMap<String, SubgraphView<'g>>
where
    G: GraphEngine + Sync,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let licenses: Vec<String> = licenses
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    licenses
        .into_par_iter()
        .map(|license| {
            let view = by_predicate(graph, |_, attrs| {
                attrs
                    .license_distribution()
                    .is_some_and(|dist| thresholds.admits(dist, &license))
            });
            tracing::debug!(
                license = %license,
                quota = thresholds.quota(),
                proportion = thresholds.proportion(),
                nodes = view.node_count(),
                "license subgraph"
            );
            (license, view)
        })
        .collect()
}
