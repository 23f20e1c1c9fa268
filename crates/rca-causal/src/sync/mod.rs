//! Keeps the forest aligned with the upstream causes list and hands it to
//! the report consumer.

pub mod persistence;
pub mod publish;
pub mod reconcile;

pub use publish::ForestDispatcher;
pub use reconcile::{ReconcileReport, Reconciler};
