//! Test fixture loader for forest datasets, cause lists, and shared test doubles.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! building engines and inputs in tests across crates.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use rca_core::models::{SectionRecord, ValidatedCause};
use rca_core::traits::IForestSink;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load a forest fixture from `forests/`.
pub fn load_forest(name: &str) -> Vec<SectionRecord> {
    load_fixture(&format!("forests/{name}.json"))
}

/// Load a causes-list fixture from `causes/`.
pub fn load_causes(name: &str) -> Vec<ValidatedCause> {
    load_fixture(&format!("causes/{name}.json"))
}

/// A verified cause with the given description.
pub fn verified(description: &str) -> ValidatedCause {
    ValidatedCause::new(description, true)
}

/// Verified causes for each description, in order.
pub fn causes(descriptions: &[&str]) -> Vec<ValidatedCause> {
    descriptions.iter().map(|d| verified(d)).collect()
}

/// Sink that records every forest it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub changed: Mutex<Vec<Vec<SectionRecord>>>,
    pub submitted: Mutex<Vec<Vec<SectionRecord>>>,
}

impl RecordingSink {
    pub fn changed_count(&self) -> usize {
        self.changed.lock().unwrap().len()
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    /// The most recent forest delivered through `on_forest_changed`.
    pub fn last_changed(&self) -> Option<Vec<SectionRecord>> {
        self.changed.lock().unwrap().last().cloned()
    }
}

impl IForestSink for RecordingSink {
    fn on_forest_changed(&self, forest: &[SectionRecord]) {
        self.changed.lock().unwrap().push(forest.to_vec());
    }

    fn on_forest_submitted(&self, forest: &[SectionRecord]) {
        self.submitted.lock().unwrap().push(forest.to_vec());
    }
}

/// Sink that always panics; the dispatcher must survive it.
pub struct PanickingSink;

impl IForestSink for PanickingSink {
    fn on_forest_changed(&self, _forest: &[SectionRecord]) {
        panic!("sink failure");
    }
}
