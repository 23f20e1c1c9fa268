use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_CHAIN_LINKS;

/// What happens to a section whose cause stops being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// The section and its edits are dropped for good.
    #[default]
    Discard,
    /// The section is parked by name and restored if the same text is
    /// validated again.
    Restore,
}

impl RetentionPolicy {
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Some(Self::Discard),
            "restore" => Some(Self::Restore),
            _ => None,
        }
    }
}

/// Behavior of the "5 Whys" editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhysConfig {
    /// Rightward extension is offered only while the last label component is
    /// below this value. Default: 5.
    pub max_chain_links: u32,
    /// Retention of sections whose cause is no longer validated. Default: discard.
    pub retention: RetentionPolicy,
}

impl Default for WhysConfig {
    fn default() -> Self {
        Self {
            max_chain_links: DEFAULT_MAX_CHAIN_LINKS,
            retention: RetentionPolicy::Discard,
        }
    }
}
