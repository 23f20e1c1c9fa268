//! Reconciliation of sections against the validated causes.
//!
//! Sections are matched to causes by exact description text, so the result
//! depends only on the current causes list and never on the order in which
//! cause updates and node edits arrived.

use std::collections::HashMap;

use tracing::{debug, info};

use rca_core::config::RetentionPolicy;
use rca_core::models::ValidatedCause;

use crate::store::{ForestStore, Section};

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Existing sections carried over unchanged.
    pub kept: usize,
    /// Brand-new sections.
    pub created: usize,
    /// Parked sections brought back (`restore` policy only).
    pub restored: usize,
    /// Sections whose cause is no longer validated.
    pub dropped: usize,
    /// Whether the section list (membership or order) changed.
    pub changed: bool,
}

/// Applies the causes list to a store under a retention policy.
#[derive(Debug, Default)]
pub struct Reconciler {
    policy: RetentionPolicy,
    /// Parked sections by name, oldest first. Empty under `discard`.
    retired: HashMap<String, Vec<Section>>,
}

impl Reconciler {
    pub fn new(policy: RetentionPolicy) -> Self {
        Self {
            policy,
            retired: HashMap::new(),
        }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Number of sections currently parked.
    pub fn retired_count(&self) -> usize {
        self.retired.values().map(Vec::len).sum()
    }

    /// Rebuild the store's section list from `causes`.
    ///
    /// Each validated cause (verified, non-blank) claims the first unclaimed
    /// section with the same name, else gets a fresh section. Unclaimed
    /// sections are dropped, or parked under `restore`.
    pub fn reconcile(&mut self, store: &mut ForestStore, causes: &[ValidatedCause]) -> ReconcileReport {
        let previous = store.take_sections();
        let previous_ids: Vec<String> = previous.iter().map(|s| s.id.clone()).collect();
        let mut pool: Vec<Option<Section>> = previous.into_iter().map(Some).collect();

        let mut report = ReconcileReport::default();
        let mut next = Vec::new();

        for cause in causes.iter().filter(|c| c.is_validated()) {
            let name = cause.description_text.as_str();
            let claimed = pool.iter_mut().find_map(|slot| {
                if slot.as_ref().is_some_and(|s| s.name == name) {
                    slot.take()
                } else {
                    None
                }
            });

            let section = match claimed {
                Some(section) => {
                    report.kept += 1;
                    section
                }
                None => match self.unpark(name) {
                    Some(section) => {
                        report.restored += 1;
                        section
                    }
                    None => {
                        report.created += 1;
                        store.new_section(name)
                    }
                },
            };
            next.push(section);
        }

        for section in pool.into_iter().flatten() {
            report.dropped += 1;
            match self.policy {
                RetentionPolicy::Discard => {
                    debug!(section_id = %section.id, name = %section.name, "dropped section");
                }
                RetentionPolicy::Restore => {
                    debug!(section_id = %section.id, name = %section.name, "parked section");
                    self.retired
                        .entry(section.name.clone())
                        .or_default()
                        .push(section);
                }
            }
        }

        report.changed = next.len() != previous_ids.len()
            || next.iter().zip(&previous_ids).any(|(s, id)| &s.id != id);
        store.set_sections(next);

        if report.changed {
            info!(
                kept = report.kept,
                created = report.created,
                restored = report.restored,
                dropped = report.dropped,
                "reconciled forest"
            );
        }
        report
    }

    fn unpark(&mut self, name: &str) -> Option<Section> {
        let parked = self.retired.get_mut(name)?;
        let section = if parked.is_empty() {
            None
        } else {
            Some(parked.remove(0))
        };
        if parked.is_empty() {
            self.retired.remove(name);
        }
        section
    }
}
