use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::node::WhyNode;

/// Flattened section as published to the report consumer and persisted.
///
/// Round-trips every node field, including `col`/`row`, since labels and
/// geometry are derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionRecord {
    #[serde(alias = "id")]
    pub section_id: String,
    #[serde(alias = "causaValidada")]
    pub root_cause_statement: String,
    pub nodes: Vec<WhyNode>,
}
