//! Hierarchical "why" labels ("1.1", "1.2", "1.1.1") derived from graph shape.
//!
//! Rules:
//! - child of the `cv` (or parentless): `<k>.1`, `k` = rank among its siblings by row;
//! - same row as its parent (rightward link): parent label with the last component + 1;
//! - different row (downward branch): parent label + `.<m>`, `m` = rank among the
//!   parent's downward children by row.
//!
//! Labels are never stored; every call recomputes them from the current graph.

use std::collections::HashMap;
use std::fmt;

use rca_core::models::{NodeKind, WhyNode};

use crate::graph::SectionGraph;

/// A dot-separated label, kept as its numeric components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Vec<u32>);

impl Label {
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// The final component, which bounds rightward extension.
    pub fn last(&self) -> u32 {
        self.0.last().copied().unwrap_or(0)
    }

    /// Nesting depth: 2 for "1.1", 3 for "1.1.1".
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    fn branch(rank: u32) -> Self {
        Self(vec![rank, 1])
    }

    fn next_link(&self) -> Self {
        let mut parts = self.0.clone();
        if let Some(last) = parts.last_mut() {
            *last += 1;
        }
        Self(parts)
    }

    fn sub_branch(&self, rank: u32) -> Self {
        let mut parts = self.0.clone();
        parts.push(rank);
        Self(parts)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}

/// Label of the `why` node `node_id`. `None` for unknown ids and non-`why` nodes.
pub fn derive_label(graph: &SectionGraph, node_id: &str) -> Option<Label> {
    let node = graph.get(node_id)?;
    let mut memo = HashMap::new();
    label_of(graph, node, &mut memo, graph.node_count())
}

/// Labels of every `why` node in the section, keyed by node id.
pub fn derive_labels(graph: &SectionGraph) -> HashMap<String, Label> {
    let mut memo = HashMap::new();
    for node in graph.nodes().filter(|n| n.kind == NodeKind::Why) {
        label_of(graph, node, &mut memo, graph.node_count());
    }
    memo
}

fn label_of(
    graph: &SectionGraph,
    node: &WhyNode,
    memo: &mut HashMap<String, Label>,
    budget: usize,
) -> Option<Label> {
    if node.kind != NodeKind::Why || budget == 0 {
        return None;
    }
    if let Some(label) = memo.get(&node.id) {
        return Some(label.clone());
    }

    let parent = graph.parent(node);
    let label = match parent {
        None => Label::branch(rank_of(&parentless_whys(graph), node)),
        Some(p) if p.kind == NodeKind::Cv => {
            Label::branch(rank_of(&graph.why_children(&p.id), node))
        }
        Some(p) => {
            let parent_label = label_of(graph, p, memo, budget - 1)?;
            if node.row == p.row {
                parent_label.next_link()
            } else {
                let downward: Vec<&WhyNode> = graph
                    .why_children(&p.id)
                    .into_iter()
                    .filter(|c| c.row != p.row)
                    .collect();
                parent_label.sub_branch(rank_of(&downward, node))
            }
        }
    };

    memo.insert(node.id.clone(), label.clone());
    Some(label)
}

/// Whys without a resolvable parent: treated as direct children of the section root.
fn parentless_whys(graph: &SectionGraph) -> Vec<&WhyNode> {
    graph
        .nodes()
        .filter(|n| n.kind == NodeKind::Why && graph.parent(n).is_none())
        .collect()
}

/// 1-based position of `node` among `siblings` ordered by row (ties: column, id).
fn rank_of(siblings: &[&WhyNode], node: &WhyNode) -> u32 {
    let mut ordered: Vec<&WhyNode> = siblings.to_vec();
    ordered.sort_by(|a, b| (a.row, a.col, &a.id).cmp(&(b.row, b.col, &b.id)));
    ordered
        .iter()
        .position(|s| s.id == node.id)
        .map_or(1, |i| i as u32 + 1)
}
