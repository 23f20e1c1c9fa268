//! ForestStore: the only component allowed to mutate sections and nodes.
//!
//! Lookup misses are errors. Failed preconditions are reported as
//! [`MutationOutcome::Rejected`] and leave the graph untouched.

pub mod affordances;
mod ids;
pub mod mutation;
pub mod section;

use std::collections::HashSet;

use tracing::debug;

use rca_core::config::WhysConfig;
use rca_core::constants::WHY_COL;
use rca_core::errors::ForestError;
use rca_core::models::{NodeKind, SectionRecord, WhyNode};
use rca_core::traits::{IIdGenerator, UuidIdGenerator};

use crate::graph::{compaction, subtree, SectionGraph};
use crate::label::{derive_label, Label};

use ids::UniqueIds;

pub use affordances::Affordances;
pub use mutation::{MutationOutcome, Rejection};
pub use section::Section;

/// Ordered sections plus the id source that names their nodes.
pub struct ForestStore {
    sections: Vec<Section>,
    ids: UniqueIds,
    config: WhysConfig,
}

impl ForestStore {
    /// Create an empty store with random UUID ids.
    pub fn new(config: WhysConfig) -> Self {
        Self::with_id_generator(config, Box::new(UuidIdGenerator))
    }

    /// Create an empty store drawing ids from `ids`.
    pub fn with_id_generator(config: WhysConfig, ids: Box<dyn IIdGenerator>) -> Self {
        Self {
            sections: Vec::new(),
            ids: UniqueIds::new(ids),
            config,
        }
    }

    pub fn config(&self) -> &WhysConfig {
        &self.config
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, section_id: &str) -> Result<&Section, ForestError> {
        self.sections
            .iter()
            .find(|s| s.id == section_id)
            .ok_or_else(|| ForestError::section_not_found(section_id))
    }

    /// Replace the whole forest with previously published records.
    ///
    /// All records are validated before anything is replaced.
    pub fn hydrate(&mut self, records: Vec<SectionRecord>) -> Result<usize, ForestError> {
        let sections = records
            .into_iter()
            .map(Section::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let count = sections.len();
        for section in &sections {
            self.ids.reserve(std::iter::once(section.id.as_str()));
            self.ids.reserve(section.graph.nodes().map(|n| n.id.as_str()));
        }
        self.sections = sections;
        debug!(sections = count, "hydrated forest");
        Ok(count)
    }

    /// Flattened forest in section order.
    pub fn snapshot(&self) -> Vec<SectionRecord> {
        self.sections.iter().map(Section::to_record).collect()
    }

    /// Check every section's invariants.
    pub fn verify(&self) -> Result<(), ForestError> {
        self.sections.iter().try_for_each(Section::check_invariants)
    }

    pub(crate) fn new_section(&mut self, name: &str) -> Section {
        Section::create(&mut self.ids, name)
    }

    pub(crate) fn take_sections(&mut self) -> Vec<Section> {
        std::mem::take(&mut self.sections)
    }

    pub(crate) fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    // --- Derived views ---

    pub fn label(&self, section_id: &str, node_id: &str) -> Result<Option<Label>, ForestError> {
        let section = self.section(section_id)?;
        section.node(node_id)?;
        Ok(derive_label(&section.graph, node_id))
    }

    pub fn affordances(&self, section_id: &str, node_id: &str) -> Result<Affordances, ForestError> {
        let section = self.section(section_id)?;
        let node = section.node(node_id)?;
        Ok(Affordances::of(
            &section.graph,
            node,
            self.config.max_chain_links,
        ))
    }

    // --- Mutations ---

    /// Start a new chain under the `cv`, on a fresh row below everything else.
    pub fn add_chain_from_root(&mut self, section_id: &str) -> Result<MutationOutcome, ForestError> {
        let section = find_section_mut(&mut self.sections, section_id)?;
        let cv_id = section.validated_cause()?.id.clone();
        let row = section.graph.max_row() + 1;

        let node_id = self.ids.next_id();
        section
            .graph
            .insert(WhyNode::why(node_id.clone(), WHY_COL, row, &cv_id));
        debug!(section_id, node_id = %node_id, row, "added chain from validated cause");
        Ok(MutationOutcome::Created { node_id })
    }

    /// Append the next link of `node_id`'s chain, on the same row.
    pub fn extend_right(
        &mut self,
        section_id: &str,
        node_id: &str,
    ) -> Result<MutationOutcome, ForestError> {
        let max_chain_links = self.config.max_chain_links;
        let section = find_section_mut(&mut self.sections, section_id)?;
        let source = section.node(node_id)?.clone();
        if let Err(rejection) = affordances::extend_right(&section.graph, &source, max_chain_links)
        {
            return Ok(rejected(section_id, node_id, rejection));
        }

        section.graph.for_each_node_mut(|n| {
            if n.kind == NodeKind::Root && n.row == source.row {
                n.col = n.col.saturating_add(1);
            }
        });
        let new_id = self.ids.next_id();
        section.graph.insert(WhyNode::why(
            new_id.clone(),
            source.col.saturating_add(1),
            source.row,
            &source.id,
        ));
        debug!(section_id, node_id, new_id = %new_id, "extended chain right");
        Ok(MutationOutcome::Created { node_id: new_id })
    }

    /// Branch below `node_id`, opening a new row directly under it.
    pub fn extend_down(
        &mut self,
        section_id: &str,
        node_id: &str,
    ) -> Result<MutationOutcome, ForestError> {
        let section = find_section_mut(&mut self.sections, section_id)?;
        let source = section.node(node_id)?.clone();
        if let Err(rejection) = affordances::extend_down(&section.graph, &source) {
            return Ok(rejected(section_id, node_id, rejection));
        }

        let row = source.row + 1;
        compaction::open_row(&mut section.graph, row);
        let new_id = self.ids.next_id();
        section
            .graph
            .insert(WhyNode::why(new_id.clone(), source.col, row, &source.id));
        debug!(section_id, node_id, new_id = %new_id, row, "extended chain down");
        Ok(MutationOutcome::Created { node_id: new_id })
    }

    /// Mark or unmark `node_id` as the root cause ending its chain.
    pub fn toggle_root_cause(
        &mut self,
        section_id: &str,
        node_id: &str,
    ) -> Result<MutationOutcome, ForestError> {
        let section = find_section_mut(&mut self.sections, section_id)?;
        let target = section.node(node_id)?.clone();
        if let Err(rejection) = affordances::toggle_root_cause(&section.graph, &target) {
            return Ok(rejected(section_id, node_id, rejection));
        }

        if target.is_root_cause {
            let markers = terminal_markers(&section.graph, &target.id);
            section.graph.remove_all(&markers);
            if let Some(n) = section.graph.get_mut(&target.id) {
                n.is_root_cause = false;
            }
            debug!(section_id, node_id, "unmarked root cause");
            return Ok(MutationOutcome::Removed {
                node_ids: sorted(markers),
            });
        }

        // One terminal per row: a stale marker here unpairs its owner.
        let stale: Vec<WhyNode> = section
            .graph
            .nodes()
            .filter(|n| n.kind == NodeKind::Root && n.row == target.row)
            .cloned()
            .collect();
        for marker in &stale {
            if let Some(owner) = marker
                .parent_id
                .as_deref()
                .and_then(|p| section.graph.get_mut(p))
            {
                owner.is_root_cause = false;
            }
        }
        let stale_ids: HashSet<String> = stale.into_iter().map(|n| n.id).collect();
        section.graph.remove_all(&stale_ids);

        let col = section.graph.max_col().saturating_add(1);
        let root_id = self.ids.next_id();
        if let Some(n) = section.graph.get_mut(&target.id) {
            n.is_root_cause = true;
        }
        section.graph.insert(WhyNode::terminal(
            root_id.clone(),
            col,
            target.row,
            &target.id,
            target.text.clone(),
        ));
        debug!(section_id, node_id, root_id = %root_id, col, "marked root cause");
        Ok(MutationOutcome::Created { node_id: root_id })
    }

    /// Remove `node_id` and its whole subtree, then restore the section's
    /// structural guarantees (a top-level chain exists, rows are dense).
    pub fn delete_node(
        &mut self,
        section_id: &str,
        node_id: &str,
    ) -> Result<MutationOutcome, ForestError> {
        let section = find_section_mut(&mut self.sections, section_id)?;
        let target = section.node(node_id)?.clone();
        if let Err(rejection) = affordances::delete(&target) {
            return Ok(rejected(section_id, node_id, rejection));
        }

        if target.kind == NodeKind::Root {
            if let Some(owner) = target
                .parent_id
                .as_deref()
                .and_then(|p| section.graph.get_mut(p))
            {
                owner.is_root_cause = false;
            }
        }

        let doomed = subtree::descendants(&section.graph, node_id);
        section.graph.remove_all(&doomed);

        let cv_id = section.validated_cause()?.id.clone();
        if section.graph.why_children(&cv_id).is_empty() {
            // Legacy parentless whys may still hold the first cell.
            let row = if section
                .graph
                .nodes()
                .any(|n| n.col == WHY_COL && n.row == 0)
            {
                section.graph.max_row() + 1
            } else {
                0
            };
            let replacement = self.ids.next_id();
            section
                .graph
                .insert(WhyNode::why(replacement.clone(), WHY_COL, row, &cv_id));
            debug!(section_id, node_id = %replacement, row, "recreated top-level why");
        }

        compaction::compact_rows(&mut section.graph);
        debug!(section_id, node_id, removed = doomed.len(), "deleted subtree");
        Ok(MutationOutcome::Removed {
            node_ids: sorted(doomed),
        })
    }

    /// Replace a node's text. No preconditions.
    pub fn set_text(
        &mut self,
        section_id: &str,
        node_id: &str,
        text: &str,
    ) -> Result<MutationOutcome, ForestError> {
        let section = find_section_mut(&mut self.sections, section_id)?;
        let node = section
            .graph
            .get_mut(node_id)
            .ok_or_else(|| ForestError::node_not_found(section_id, node_id))?;
        node.text = text.to_string();
        Ok(MutationOutcome::Updated)
    }
}

fn find_section_mut<'a>(
    sections: &'a mut [Section],
    section_id: &str,
) -> Result<&'a mut Section, ForestError> {
    sections
        .iter_mut()
        .find(|s| s.id == section_id)
        .ok_or_else(|| ForestError::section_not_found(section_id))
}

fn terminal_markers(graph: &SectionGraph, owner_id: &str) -> HashSet<String> {
    graph
        .children(owner_id)
        .into_iter()
        .filter(|c| c.kind == NodeKind::Root)
        .map(|c| c.id.clone())
        .collect()
}

fn rejected(section_id: &str, node_id: &str, rejection: Rejection) -> MutationOutcome {
    debug!(section_id, node_id, %rejection, "mutation rejected");
    MutationOutcome::Rejected(rejection)
}

fn sorted(ids: HashSet<String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();
    ids
}
