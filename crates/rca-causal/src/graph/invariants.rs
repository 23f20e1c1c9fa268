//! Structural invariants of a section graph.
//!
//! Every store mutation preserves these; hydrated data must satisfy them.

use rca_core::constants::CV_COL;
use rca_core::errors::ForestError;
use rca_core::models::NodeKind;

use super::compaction::rows_are_dense;
use super::section_graph::SectionGraph;

/// Check all invariants, reporting the first violation.
pub fn check_invariants(section_id: &str, graph: &SectionGraph) -> Result<(), ForestError> {
    let fail = |details: String| Err(ForestError::inconsistency(section_id, details));

    if graph.node_index.len() != graph.node_count() {
        return fail(format!(
            "node index holds {} ids for {} nodes",
            graph.node_index.len(),
            graph.node_count()
        ));
    }

    let cvs: Vec<_> = graph.nodes().filter(|n| n.kind == NodeKind::Cv).collect();
    let [cv] = cvs.as_slice() else {
        return fail(format!("expected exactly one cv node, found {}", cvs.len()));
    };
    if cv.col != CV_COL {
        return fail(format!("cv node {} is at column {}", cv.id, cv.col));
    }
    if cv.parent_id.is_some() {
        return fail(format!("cv node {} has a parent", cv.id));
    }

    for node in graph.nodes() {
        match node.kind {
            NodeKind::Cv => {}
            NodeKind::Why => {
                if let Some(parent_id) = &node.parent_id {
                    let parent_kind = graph.get(parent_id).map(|p| p.kind);
                    if !matches!(parent_kind, Some(NodeKind::Cv | NodeKind::Why)) {
                        return fail(format!(
                            "why node {} hangs off {parent_id}, which is not a cv or why",
                            node.id
                        ));
                    }
                }

                let children = graph.why_children(&node.id);
                let right = children.iter().filter(|c| c.row == node.row).count();
                let down = children.len() - right;
                if right > 1 || down > 1 {
                    return fail(format!(
                        "why node {} has {right} right and {down} down children",
                        node.id
                    ));
                }

                let terminals = graph
                    .children(&node.id)
                    .into_iter()
                    .filter(|c| c.kind == NodeKind::Root)
                    .count();
                if node.is_root_cause && (right > 0 || terminals != 1) {
                    return fail(format!(
                        "root cause {} has {right} right children and {terminals} root markers",
                        node.id
                    ));
                }
                if !node.is_root_cause && terminals > 0 {
                    return fail(format!("unmarked why node {} has a root marker", node.id));
                }
            }
            NodeKind::Root => {
                let parent = graph.parent(node);
                if !parent.is_some_and(|p| p.kind == NodeKind::Why && p.is_root_cause) {
                    return fail(format!(
                        "root node {} is not paired with a marked why",
                        node.id
                    ));
                }
            }
        }
    }

    if graph.top_level_whys().is_empty() {
        return fail("no why chain hangs off the validated cause".to_string());
    }
    if !rows_are_dense(graph) {
        return fail("rows are not densely packed".to_string());
    }
    Ok(())
}
