//! Error handling for the RCA forest.
//! One error enum per subsystem, `thiserror` only, rolled up into [`RcaError`].

pub mod config_error;
pub mod error_code;
pub mod forest_error;
pub mod rca_error;

pub use config_error::ConfigError;
pub use error_code::RcaErrorCode;
pub use forest_error::ForestError;
pub use rca_error::{RcaError, RcaResult};
