//! Precondition predicates for the structural edits.
//!
//! The host disables an affordance whenever its predicate returns a
//! rejection; the store re-checks the same predicate before mutating.

use serde::Serialize;

use rca_core::models::{NodeKind, WhyNode};

use crate::graph::SectionGraph;
use crate::label::derive_label;

use super::mutation::Rejection;

pub fn extend_right(
    graph: &SectionGraph,
    node: &WhyNode,
    max_chain_links: u32,
) -> Result<(), Rejection> {
    editable_why(node)?;
    if graph.right_child(&node.id).is_some() {
        return Err(Rejection::HasRightChild);
    }
    if node.is_root_cause {
        return Err(Rejection::MarkedRootCause);
    }
    if derive_label(graph, &node.id).is_some_and(|l| l.last() >= max_chain_links) {
        return Err(Rejection::ChainLimitReached {
            limit: max_chain_links,
        });
    }
    Ok(())
}

pub fn extend_down(graph: &SectionGraph, node: &WhyNode) -> Result<(), Rejection> {
    editable_why(node)?;
    if graph.down_child(&node.id).is_some() {
        return Err(Rejection::HasDownChild);
    }
    if node.is_root_cause {
        return Err(Rejection::MarkedRootCause);
    }
    Ok(())
}

/// A chain can only be terminated at its last link.
pub fn toggle_root_cause(graph: &SectionGraph, node: &WhyNode) -> Result<(), Rejection> {
    editable_why(node)?;
    if graph.right_child(&node.id).is_some() {
        return Err(Rejection::HasRightChild);
    }
    Ok(())
}

pub fn delete(node: &WhyNode) -> Result<(), Rejection> {
    if node.kind == NodeKind::Cv {
        return Err(Rejection::ValidatedCauseNode);
    }
    Ok(())
}

fn editable_why(node: &WhyNode) -> Result<(), Rejection> {
    if node.kind != NodeKind::Why {
        return Err(Rejection::NotAWhyNode);
    }
    if node.is_blank() {
        return Err(Rejection::BlankText);
    }
    Ok(())
}

/// Which edits are currently offered for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Affordances {
    pub extend_right: bool,
    pub extend_down: bool,
    pub toggle_root_cause: bool,
    pub delete: bool,
    pub has_right_child: bool,
    pub is_root_cause: bool,
}

impl Affordances {
    pub fn of(graph: &SectionGraph, node: &WhyNode, max_chain_links: u32) -> Self {
        Self {
            extend_right: extend_right(graph, node, max_chain_links).is_ok(),
            extend_down: extend_down(graph, node).is_ok(),
            toggle_root_cause: toggle_root_cause(graph, node).is_ok(),
            delete: delete(node).is_ok(),
            has_right_child: graph.right_child(&node.id).is_some(),
            is_root_cause: node.is_root_cause,
        }
    }
}
