//! Transitive descendant closure over the parent → child adjacency index.

use std::collections::HashSet;

use petgraph::visit::Dfs;

use super::section_graph::SectionGraph;

/// Ids of `node_id` and everything reachable from it. Empty if `node_id` is unknown.
pub fn descendants(graph: &SectionGraph, node_id: &str) -> HashSet<String> {
    let Some(&start) = graph.node_index.get(node_id) else {
        return HashSet::new();
    };
    let mut closure = HashSet::new();
    let mut dfs = Dfs::new(&graph.graph, start);
    while let Some(idx) = dfs.next(&graph.graph) {
        closure.insert(graph.graph[idx].id.clone());
    }
    closure
}

