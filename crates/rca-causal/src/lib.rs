//! # rca-causal
//!
//! The "5 Whys" engine. Keeps one causal forest section per validated cause,
//! each an in-memory grid graph (`petgraph`) of `cv`/`why`/`root` nodes.
//! Structural edits, derived labels, grid geometry, and reconciliation with
//! the upstream causes list.

pub mod engine;
pub mod graph;
pub mod label;
pub mod layout;
pub mod spans;
pub mod store;
pub mod sync;
pub mod tracing_setup;
pub mod view;

pub use engine::WhysEngine;
pub use graph::SectionGraph;
pub use label::{derive_label, derive_labels, Label};
pub use layout::{Connector, ConnectorKind, GridGeometry, Point, Size};
pub use store::{Affordances, ForestStore, MutationOutcome, Rejection, Section};
pub use sync::{ForestDispatcher, ReconcileReport, Reconciler};
pub use tracing_setup::init_tracing;
pub use view::{CardView, SectionView};
