//! Grid nodes of a "5 Whys" section.
//!
//! # Examples
//!
//! ```
//! use rca_core::models::{NodeKind, WhyNode};
//!
//! let cv = WhyNode::validated_cause("cv1", "Bearing overheated");
//! let why = WhyNode::why("w1", 1, 0, &cv.id);
//! assert_eq!(cv.kind, NodeKind::Cv);
//! assert_eq!(why.parent_id.as_deref(), Some("cv1"));
//! assert!(why.is_blank());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::CV_COL;

/// The three node roles in a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NodeKind {
    /// The validated cause heading the section. Exactly one per section.
    Cv,
    /// A user-editable link of a causal chain.
    Why,
    /// Terminal marker paired with a `why` marked as root cause.
    Root,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cv => "cv",
            Self::Why => "why",
            Self::Root => "root",
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "cv" => Some(Self::Cv),
            "why" => Some(Self::Why),
            "root" => Some(Self::Root),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the section grid.
///
/// `col` grows rightward (deeper in a chain), `row` grows downward (parallel
/// branches). Both are grid positions, never pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WhyNode {
    pub id: String,
    pub kind: NodeKind,
    pub col: u32,
    pub row: u32,
    pub text: String,
    pub is_root_cause: bool,
    pub parent_id: Option<String>,
}

impl WhyNode {
    /// The validated-cause node of a new section: column 0, row 0, no parent.
    pub fn validated_cause(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Cv,
            col: CV_COL,
            row: 0,
            text: text.into(),
            is_root_cause: false,
            parent_id: None,
        }
    }

    /// An empty `why` hanging off `parent_id`.
    pub fn why(id: impl Into<String>, col: u32, row: u32, parent_id: &str) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Why,
            col,
            row,
            text: String::new(),
            is_root_cause: false,
            parent_id: Some(parent_id.to_string()),
        }
    }

    /// A terminal `root` marker for the `why` identified by `parent_id`.
    pub fn terminal(
        id: impl Into<String>,
        col: u32,
        row: u32,
        parent_id: &str,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Root,
            col,
            row,
            text: text.into(),
            is_root_cause: false,
            parent_id: Some(parent_id.to_string()),
        }
    }

    /// True when the text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_why(&self) -> bool {
        self.kind == NodeKind::Why
    }
}
