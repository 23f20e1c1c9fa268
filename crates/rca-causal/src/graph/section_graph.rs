//! petgraph::StableGraph wrapper holding one section's grid nodes.
//!
//! Edges run parent → child and mirror each node's `parent_id`, giving an
//! explicit adjacency index for children lookups and subtree closure.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use rca_core::errors::ForestError;
use rca_core::models::{NodeKind, WhyNode};

/// The underlying directed graph type.
pub type WhyStableGraph = StableGraph<WhyNode, (), Directed>;

/// Node collection of one section with indexed access.
#[derive(Debug, Clone)]
pub struct SectionGraph {
    /// The petgraph stable graph.
    pub graph: WhyStableGraph,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl SectionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build a graph from a flat node list, wiring edges from `parent_id`.
    ///
    /// Rejects duplicate ids, dangling parents, and parent cycles.
    pub fn from_nodes(section_id: &str, nodes: Vec<WhyNode>) -> Result<Self, ForestError> {
        let mut built = Self::new();
        for node in nodes {
            if built.node_index.contains_key(&node.id) {
                return Err(ForestError::inconsistency(
                    section_id,
                    format!("duplicate node id {}", node.id),
                ));
            }
            let id = node.id.clone();
            let idx = built.graph.add_node(node);
            built.node_index.insert(id, idx);
        }

        let links: Vec<(NodeIndex, String)> = built
            .graph
            .node_indices()
            .filter_map(|idx| {
                built.graph[idx]
                    .parent_id
                    .clone()
                    .map(|parent| (idx, parent))
            })
            .collect();

        for (child, parent_id) in links {
            let parent = built.node_index.get(&parent_id).copied().ok_or_else(|| {
                ForestError::inconsistency(
                    section_id,
                    format!(
                        "node {} references missing parent {parent_id}",
                        built.graph[child].id
                    ),
                )
            })?;
            if parent == child {
                return Err(ForestError::CycleDetected {
                    section_id: section_id.to_string(),
                    node_id: parent_id,
                });
            }
            built.graph.add_edge(parent, child, ());
        }

        if let Some(scc) = tarjan_scc(&built.graph).into_iter().find(|scc| scc.len() > 1) {
            return Err(ForestError::CycleDetected {
                section_id: section_id.to_string(),
                node_id: built.graph[scc[0]].id.clone(),
            });
        }

        Ok(built)
    }

    /// Insert a node, linking it under its parent when the parent is present.
    ///
    /// Ids must be fresh: a reused id orphans the earlier node, which
    /// `check_invariants` reports.
    pub fn insert(&mut self, node: WhyNode) -> NodeIndex {
        let parent = node
            .parent_id
            .as_ref()
            .and_then(|p| self.node_index.get(p).copied());
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        if let Some(parent) = parent {
            self.graph.add_edge(parent, idx, ());
        }
        idx
    }

    /// Remove every node in `ids` together with its edges. Returns the count removed.
    pub fn remove_all(&mut self, ids: &HashSet<String>) -> usize {
        let mut removed = 0;
        for id in ids {
            if let Some(idx) = self.node_index.remove(id) {
                self.graph.remove_node(idx);
                removed += 1;
            }
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&WhyNode> {
        self.node_index.get(id).and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WhyNode> {
        let idx = *self.node_index.get(id)?;
        self.graph.node_weight_mut(idx)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Iterate nodes in storage order (unspecified).
    pub fn nodes(&self) -> impl Iterator<Item = &WhyNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Apply `f` to every node.
    pub fn for_each_node_mut(&mut self, mut f: impl FnMut(&mut WhyNode)) {
        let indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        for idx in indices {
            if let Some(node) = self.graph.node_weight_mut(idx) {
                f(node);
            }
        }
    }

    /// Owned node list ordered by `(row, col, id)`.
    pub fn to_nodes(&self) -> Vec<WhyNode> {
        let mut nodes: Vec<WhyNode> = self.nodes().cloned().collect();
        nodes.sort_by(|a, b| (a.row, a.col, &a.id).cmp(&(b.row, b.col, &b.id)));
        nodes
    }

    /// Direct structural children of `id`, any kind.
    pub fn children(&self, id: &str) -> Vec<&WhyNode> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|child| &self.graph[child])
            .collect()
    }

    /// The `why` children of `id`.
    pub fn why_children(&self, id: &str) -> Vec<&WhyNode> {
        self.children(id)
            .into_iter()
            .filter(|n| n.kind == NodeKind::Why)
            .collect()
    }

    pub fn parent(&self, node: &WhyNode) -> Option<&WhyNode> {
        node.parent_id.as_deref().and_then(|p| self.get(p))
    }

    /// The section's validated-cause node.
    pub fn validated_cause(&self) -> Option<&WhyNode> {
        self.nodes().find(|n| n.kind == NodeKind::Cv)
    }

    /// The `why` child on the same row as `id` (a rightward extension).
    pub fn right_child(&self, id: &str) -> Option<&WhyNode> {
        let row = self.get(id)?.row;
        self.why_children(id).into_iter().find(|c| c.row == row)
    }

    /// The `why` child on a different row than `id` (a downward branch).
    pub fn down_child(&self, id: &str) -> Option<&WhyNode> {
        let row = self.get(id)?.row;
        self.why_children(id).into_iter().find(|c| c.row != row)
    }

    /// Top-level whys: children of the `cv`, plus legacy parentless whys.
    pub fn top_level_whys(&self) -> Vec<&WhyNode> {
        let cv_id = self.validated_cause().map(|cv| cv.id.as_str());
        self.nodes()
            .filter(|n| n.kind == NodeKind::Why)
            .filter(|n| n.parent_id.is_none() || n.parent_id.as_deref() == cv_id)
            .collect()
    }

    /// Highest row in use, 0 for an empty graph.
    pub fn max_row(&self) -> u32 {
        self.nodes().map(|n| n.row).max().unwrap_or(0)
    }

    /// Highest column in use, 0 for an empty graph.
    pub fn max_col(&self) -> u32 {
        self.nodes().map(|n| n.col).max().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for SectionGraph {
    fn default() -> Self {
        Self::new()
    }
}
