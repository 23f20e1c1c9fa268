//! # rca-core
//!
//! Foundation crate for the RCA intake "5 Whys" forest.
//! Defines the boundary models, traits, errors, config, and constants.
//! `rca-causal` and the test fixtures depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RcaConfig;
pub use errors::{RcaError, RcaResult};
pub use models::{NodeKind, SectionRecord, ValidatedCause, WhyNode};
