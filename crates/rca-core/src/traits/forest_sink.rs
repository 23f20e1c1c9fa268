use crate::models::SectionRecord;

/// External consumer of the published why-forest (the report builder).
///
/// All methods have no-op defaults; implement only what you need.
pub trait IForestSink: Send + Sync {
    /// Called after every applied change with the full flattened forest.
    fn on_forest_changed(&self, _forest: &[SectionRecord]) {}

    /// Called once per explicit submit with the step's final output.
    fn on_forest_submitted(&self, _forest: &[SectionRecord]) {}
}
