use super::error_code::{self, RcaErrorCode};

/// Causal forest errors.
///
/// Precondition failures on mutations are not errors; they surface as a
/// rejected outcome. These variants cover stale references and malformed
/// hydrated data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("section not found: {section_id}")]
    SectionNotFound { section_id: String },

    #[error("node not found: {node_id} (section {section_id})")]
    NodeNotFound { section_id: String, node_id: String },

    #[error("cycle detected in section {section_id} at node {node_id}")]
    CycleDetected { section_id: String, node_id: String },

    #[error("graph inconsistency in section {section_id}: {details}")]
    GraphInconsistency { section_id: String, details: String },
}

impl ForestError {
    pub fn section_not_found(section_id: &str) -> Self {
        Self::SectionNotFound {
            section_id: section_id.to_string(),
        }
    }

    pub fn node_not_found(section_id: &str, node_id: &str) -> Self {
        Self::NodeNotFound {
            section_id: section_id.to_string(),
            node_id: node_id.to_string(),
        }
    }

    pub fn inconsistency(section_id: &str, details: impl Into<String>) -> Self {
        Self::GraphInconsistency {
            section_id: section_id.to_string(),
            details: details.into(),
        }
    }
}

impl RcaErrorCode for ForestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SectionNotFound { .. } => error_code::SECTION_NOT_FOUND,
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            Self::CycleDetected { .. } => error_code::CYCLE_DETECTED,
            Self::GraphInconsistency { .. } => error_code::GRAPH_INCONSISTENCY,
        }
    }
}
