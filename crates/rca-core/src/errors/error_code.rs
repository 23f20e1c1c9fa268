//! Stable, machine-readable error codes for hosts that map errors to UI state.

/// Implemented by every error enum in the workspace.
pub trait RcaErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const SECTION_NOT_FOUND: &str = "SECTION_NOT_FOUND";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const GRAPH_INCONSISTENCY: &str = "GRAPH_INCONSISTENCY";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const SERIALIZATION: &str = "SERIALIZATION";
