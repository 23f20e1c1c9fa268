use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the possible-causes step, as delivered to the forest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidatedCause {
    #[serde(alias = "description", alias = "descripcion")]
    pub description_text: String,
    /// Free-form category ("Método", "Máquina", ...). Not interpreted here.
    #[serde(default, alias = "clasificacion")]
    pub classification: String,
    #[serde(default, alias = "verificado")]
    pub verified: bool,
}

impl ValidatedCause {
    pub fn new(description_text: impl Into<String>, verified: bool) -> Self {
        Self {
            description_text: description_text.into(),
            classification: String::new(),
            verified,
        }
    }

    /// Verified and carrying non-blank text: such a cause owns a section.
    pub fn is_validated(&self) -> bool {
        self.verified && !self.description_text.trim().is_empty()
    }
}
