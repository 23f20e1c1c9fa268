//! Outcomes of store mutations.

use std::fmt;

use serde::Serialize;

/// Why a structural edit was refused. The graph is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The operation only applies to `why` nodes.
    NotAWhyNode,
    /// The node's text is empty after trimming.
    BlankText,
    /// A rightward link already exists.
    HasRightChild,
    /// A downward branch already exists.
    HasDownChild,
    /// The node terminates its chain.
    MarkedRootCause,
    /// The label's last component reached the configured limit.
    ChainLimitReached { limit: u32 },
    /// The validated cause cannot be deleted on its own.
    ValidatedCauseNode,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAWhyNode => "not_a_why_node",
            Self::BlankText => "blank_text",
            Self::HasRightChild => "has_right_child",
            Self::HasDownChild => "has_down_child",
            Self::MarkedRootCause => "marked_root_cause",
            Self::ChainLimitReached { .. } => "chain_limit_reached",
            Self::ValidatedCauseNode => "validated_cause_node",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a mutation that found its section and node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A node was added (a `why`, or the `root` marker of a toggle-on).
    Created { node_id: String },
    /// Fields changed in place.
    Updated,
    /// Nodes were removed (a subtree, or the `root` marker of a toggle-off).
    Removed { node_ids: Vec<String> },
    /// Preconditions failed; nothing changed.
    Rejected(Rejection),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            Self::Created { node_id } => Some(node_id),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}
