//! JSON codec for the published forest.
//!
//! The encoded form is exactly the `SectionRecord` list, so a persisted forest
//! seeds the store losslessly (grid coordinates included).

use rca_core::errors::RcaResult;
use rca_core::models::SectionRecord;

pub fn encode_forest(forest: &[SectionRecord]) -> RcaResult<String> {
    Ok(serde_json::to_string_pretty(forest)?)
}

pub fn decode_forest(json: &str) -> RcaResult<Vec<SectionRecord>> {
    Ok(serde_json::from_str(json)?)
}
