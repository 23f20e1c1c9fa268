use rca_core::constants::WHY_COL;
use rca_core::errors::ForestError;
use rca_core::models::{NodeKind, SectionRecord, WhyNode};
use rca_core::traits::IIdGenerator;

use crate::graph::invariants::check_invariants;
use crate::graph::SectionGraph;

/// One validated cause and the causal chains grown from it.
#[derive(Debug, Clone)]
pub struct Section {
    /// Stable for the section's lifetime.
    pub id: String,
    /// Causal statement; also the reconciliation key.
    pub name: String,
    pub graph: SectionGraph,
}

impl Section {
    /// A fresh section: the `cv` at `(0, 0)` and one empty `why` at `(1, 0)`.
    pub fn create(ids: &mut dyn IIdGenerator, name: &str) -> Self {
        let id = ids.next_id();
        let cv = WhyNode::validated_cause(ids.next_id(), name);
        let first_why = WhyNode::why(ids.next_id(), WHY_COL, 0, &cv.id);

        let mut graph = SectionGraph::new();
        graph.insert(cv);
        graph.insert(first_why);

        Self {
            id,
            name: name.to_string(),
            graph,
        }
    }

    /// Rebuild a section from its published form, enforcing every invariant.
    pub fn from_record(record: SectionRecord) -> Result<Self, ForestError> {
        let graph = SectionGraph::from_nodes(&record.section_id, record.nodes)?;
        check_invariants(&record.section_id, &graph)?;
        Ok(Self {
            id: record.section_id,
            name: record.root_cause_statement,
            graph,
        })
    }

    pub fn to_record(&self) -> SectionRecord {
        SectionRecord {
            section_id: self.id.clone(),
            root_cause_statement: self.name.clone(),
            nodes: self.graph.to_nodes(),
        }
    }

    pub fn node(&self, node_id: &str) -> Result<&WhyNode, ForestError> {
        self.graph
            .get(node_id)
            .ok_or_else(|| ForestError::node_not_found(&self.id, node_id))
    }

    pub fn validated_cause(&self) -> Result<&WhyNode, ForestError> {
        self.graph
            .validated_cause()
            .ok_or_else(|| ForestError::inconsistency(&self.id, "missing validated cause"))
    }

    pub fn why_count(&self) -> usize {
        self.graph.nodes().filter(|n| n.kind == NodeKind::Why).count()
    }

    pub fn check_invariants(&self) -> Result<(), ForestError> {
        check_invariants(&self.id, &self.graph)
    }
}
