//! WhysEngine: owns the forest store, reconciles it with the causes list,
//! and publishes every applied change to the registered sinks.

use std::sync::Arc;

use tracing::info;

use rca_core::config::{LayoutConfig, RcaConfig};
use rca_core::errors::RcaResult;
use rca_core::models::{SectionRecord, ValidatedCause};
use rca_core::traits::{IForestSink, IIdGenerator, UuidIdGenerator};

use crate::label::Label;
use crate::store::{Affordances, ForestStore, MutationOutcome};
use crate::sync::persistence;
use crate::sync::{ForestDispatcher, ReconcileReport, Reconciler};
use crate::view::{render_section, SectionView};

/// The "5 Whys" step as one owner of all forest state.
pub struct WhysEngine {
    store: ForestStore,
    reconciler: Reconciler,
    dispatcher: ForestDispatcher,
    layout: LayoutConfig,
}

impl WhysEngine {
    /// Create an engine with random UUID ids.
    pub fn new(config: RcaConfig) -> Self {
        Self::with_id_generator(config, Box::new(UuidIdGenerator))
    }

    /// Create an engine drawing ids from `ids`.
    pub fn with_id_generator(config: RcaConfig, ids: Box<dyn IIdGenerator>) -> Self {
        Self {
            reconciler: Reconciler::new(config.whys.retention),
            store: ForestStore::with_id_generator(config.whys, ids),
            dispatcher: ForestDispatcher::new(),
            layout: config.layout,
        }
    }

    pub fn store(&self) -> &ForestStore {
        &self.store
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn register_sink(&mut self, sink: Arc<dyn IForestSink>) {
        self.dispatcher.register(sink);
    }

    // --- Synchronization ---

    /// Seed an empty forest from previously published records.
    ///
    /// Returns `false` (and changes nothing) when the forest already has
    /// sections; local state always wins over the persisted copy. A successful
    /// seed is published like any other change.
    pub fn seed(&mut self, records: Vec<SectionRecord>) -> RcaResult<bool> {
        if !self.store.is_empty() {
            return Ok(false);
        }
        let count = self.store.hydrate(records)?;
        info!(sections = count, "seeded why forest");
        self.publish();
        Ok(true)
    }

    /// [`seed`](Self::seed) from the JSON form produced by [`to_json`](Self::to_json).
    pub fn seed_from_json(&mut self, json: &str) -> RcaResult<bool> {
        let records = persistence::decode_forest(json)?;
        self.seed(records)
    }

    /// Align sections with the latest causes list and publish if anything moved.
    pub fn sync_causes(&mut self, causes: &[ValidatedCause]) -> ReconcileReport {
        let _span = crate::reconcile_span!(causes.len()).entered();
        let report = self.reconciler.reconcile(&mut self.store, causes);
        if report.changed {
            self.publish();
        }
        report
    }

    // --- Mutations ---

    pub fn add_chain_from_root(&mut self, section_id: &str) -> RcaResult<MutationOutcome> {
        let _span = crate::mutation_span!("add_chain_from_root", section_id).entered();
        let outcome = self.store.add_chain_from_root(section_id)?;
        Ok(self.after(outcome))
    }

    pub fn extend_right(&mut self, section_id: &str, node_id: &str) -> RcaResult<MutationOutcome> {
        let _span = crate::mutation_span!("extend_right", section_id).entered();
        let outcome = self.store.extend_right(section_id, node_id)?;
        Ok(self.after(outcome))
    }

    pub fn extend_down(&mut self, section_id: &str, node_id: &str) -> RcaResult<MutationOutcome> {
        let _span = crate::mutation_span!("extend_down", section_id).entered();
        let outcome = self.store.extend_down(section_id, node_id)?;
        Ok(self.after(outcome))
    }

    pub fn toggle_root_cause(
        &mut self,
        section_id: &str,
        node_id: &str,
    ) -> RcaResult<MutationOutcome> {
        let _span = crate::mutation_span!("toggle_root_cause", section_id).entered();
        let outcome = self.store.toggle_root_cause(section_id, node_id)?;
        Ok(self.after(outcome))
    }

    pub fn delete_node(&mut self, section_id: &str, node_id: &str) -> RcaResult<MutationOutcome> {
        let _span = crate::mutation_span!("delete_node", section_id).entered();
        let outcome = self.store.delete_node(section_id, node_id)?;
        Ok(self.after(outcome))
    }

    pub fn set_text(
        &mut self,
        section_id: &str,
        node_id: &str,
        text: &str,
    ) -> RcaResult<MutationOutcome> {
        let outcome = self.store.set_text(section_id, node_id, text)?;
        Ok(self.after(outcome))
    }

    // --- Reads ---

    pub fn label(&self, section_id: &str, node_id: &str) -> RcaResult<Option<Label>> {
        Ok(self.store.label(section_id, node_id)?)
    }

    pub fn affordances(&self, section_id: &str, node_id: &str) -> RcaResult<Affordances> {
        Ok(self.store.affordances(section_id, node_id)?)
    }

    pub fn view(&self, section_id: &str) -> RcaResult<SectionView> {
        let section = self.store.section(section_id)?;
        Ok(render_section(section, &self.layout, self.store.config()))
    }

    /// Views of all sections in order. Empty when no cause is validated.
    pub fn views(&self) -> Vec<SectionView> {
        self.store
            .sections()
            .iter()
            .map(|s| render_section(s, &self.layout, self.store.config()))
            .collect()
    }

    pub fn snapshot(&self) -> Vec<SectionRecord> {
        self.store.snapshot()
    }

    pub fn to_json(&self) -> RcaResult<String> {
        persistence::encode_forest(&self.store.snapshot())
    }

    /// Deliver the final step output to every sink and return it.
    pub fn submit(&self) -> Vec<SectionRecord> {
        let forest = self.store.snapshot();
        let _span = crate::submit_span!(forest.len()).entered();
        info!(sections = forest.len(), "submitting why forest");
        self.dispatcher.publish_submitted(&forest);
        forest
    }

    fn after(&self, outcome: MutationOutcome) -> MutationOutcome {
        if outcome.is_applied() {
            self.publish();
        }
        outcome
    }

    fn publish(&self) {
        if self.dispatcher.sink_count() > 0 {
            self.dispatcher.publish_changed(&self.store.snapshot());
        }
    }
}

impl Default for WhysEngine {
    fn default() -> Self {
        Self::new(RcaConfig::default())
    }
}
