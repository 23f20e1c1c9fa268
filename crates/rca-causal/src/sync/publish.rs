//! ForestDispatcher: synchronous fan-out of the flattened forest to sinks.

use std::sync::Arc;

use tracing::warn;

use rca_core::models::SectionRecord;
use rca_core::traits::IForestSink;

/// Synchronous dispatcher wrapping a list of sinks.
#[derive(Default)]
pub struct ForestDispatcher {
    sinks: Vec<Arc<dyn IForestSink>>,
}

impl ForestDispatcher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn register(&mut self, sink: Arc<dyn IForestSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn publish_changed(&self, forest: &[SectionRecord]) {
        self.emit("changed", |s| s.on_forest_changed(forest));
    }

    pub fn publish_submitted(&self, forest: &[SectionRecord]) {
        self.emit("submitted", |s| s.on_forest_submitted(forest));
    }

    /// Sinks that panic are logged and skipped; later sinks still run.
    fn emit<F: Fn(&dyn IForestSink)>(&self, event: &'static str, f: F) {
        for (index, sink) in self.sinks.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(sink.as_ref());
            }));
            if result.is_err() {
                warn!(event, sink = index, "forest sink panicked");
            }
        }
    }
}
