use std::sync::Arc;

use rca_causal::engine::WhysEngine;
use rca_causal::store::MutationOutcome;
use rca_causal::sync::persistence::{decode_forest, encode_forest};
use rca_causal::sync::ReconcileReport;
use rca_core::config::{RcaConfig, RetentionPolicy};
use rca_core::errors::{ForestError, RcaError};
use rca_core::models::ValidatedCause;
use rca_core::traits::SequentialIdGenerator;
use test_fixtures::{causes, verified, PanickingSink, RecordingSink};

fn engine_with(retention: RetentionPolicy) -> WhysEngine {
    let mut config = RcaConfig::default();
    config.whys.retention = retention;
    WhysEngine::with_id_generator(config, Box::new(SequentialIdGenerator::default()))
}

fn engine() -> WhysEngine {
    engine_with(RetentionPolicy::Discard)
}

fn names(engine: &WhysEngine) -> Vec<String> {
    engine.store().sections().iter().map(|s| s.name.clone()).collect()
}

fn ids(engine: &WhysEngine) -> Vec<String> {
    engine.store().sections().iter().map(|s| s.id.clone()).collect()
}

#[test]
fn one_section_per_validated_cause_in_order() {
    let mut engine = engine();
    let report = engine.sync_causes(&causes(&["A", "B"]));
    assert_eq!(
        report,
        ReconcileReport {
            created: 2,
            changed: true,
            ..Default::default()
        }
    );
    assert_eq!(names(&engine), ["A", "B"]);
    assert_eq!(ids(&engine), ["wy1", "wy4"]);
}

#[test]
fn unverified_and_blank_causes_are_ignored() {
    let mut engine = engine();
    engine.sync_causes(&[
        verified("A"),
        ValidatedCause::new("B", false),
        verified("  "),
    ]);
    assert_eq!(names(&engine), ["A"]);
}

#[test]
fn reconcile_is_idempotent() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A", "B"]));
    let before = engine.snapshot();
    let report = engine.sync_causes(&causes(&["A", "B"]));
    assert_eq!(report.kept, 2);
    assert!(!report.changed);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn reorder_keeps_sections_and_edits() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A", "B"]));
    engine.set_text("wy1", "wy3", "edited").unwrap();

    let report = engine.sync_causes(&causes(&["B", "A"]));
    assert!(report.changed);
    assert_eq!(report.kept, 2);
    assert_eq!(ids(&engine), ["wy4", "wy1"]);
    let a = engine.store().section("wy1").unwrap();
    assert_eq!(a.node("wy3").unwrap().text, "edited");
}

#[test]
fn unvalidated_cause_drops_its_section() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A", "B"]));
    engine.set_text("wy4", "wy6", "lost").unwrap();

    let report = engine.sync_causes(&[verified("A"), ValidatedCause::new("B", false)]);
    assert_eq!(report.dropped, 1);
    assert_eq!(names(&engine), ["A"]);
    assert_eq!(engine.reconciler().retired_count(), 0);

    // Discard: coming back starts fresh.
    let report = engine.sync_causes(&causes(&["A", "B"]));
    assert_eq!(report.created, 1);
    let b = &engine.store().sections()[1];
    assert_ne!(b.id, "wy4");
    assert_eq!(b.why_count(), 1);
    assert!(b.graph.nodes().all(|n| n.text != "lost"));
}

#[test]
fn restore_policy_brings_back_edits() {
    let mut engine = engine_with(RetentionPolicy::Restore);
    assert_eq!(engine.reconciler().policy(), RetentionPolicy::Restore);
    engine.sync_causes(&causes(&["A", "B"]));
    engine.set_text("wy4", "wy6", "kept").unwrap();

    engine.sync_causes(&causes(&["A"]));
    assert_eq!(engine.reconciler().retired_count(), 1);

    let report = engine.sync_causes(&causes(&["B", "A"]));
    assert_eq!(report.restored, 1);
    assert_eq!(report.kept, 1);
    assert_eq!(ids(&engine), ["wy4", "wy1"]);
    assert_eq!(
        engine.store().section("wy4").unwrap().node("wy6").unwrap().text,
        "kept"
    );
    assert_eq!(engine.reconciler().retired_count(), 0);
}

#[test]
fn duplicate_descriptions_get_distinct_sections() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A", "A"]));
    assert_eq!(ids(&engine), ["wy1", "wy4"]);

    let report = engine.sync_causes(&causes(&["A", "A"]));
    assert_eq!(report.kept, 2);
    assert!(!report.changed);

    // Dropping one keeps the first.
    engine.sync_causes(&causes(&["A"]));
    assert_eq!(ids(&engine), ["wy1"]);
}

#[test]
fn renamed_cause_is_a_new_section() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A"]));
    let report = engine.sync_causes(&causes(&["A."]));
    assert_eq!((report.created, report.dropped), (1, 1));
    assert_eq!(names(&engine), ["A."]);
}

#[test]
fn sinks_hear_applied_changes_only() {
    rca_causal::init_tracing();
    let mut engine = engine();
    let sink = Arc::new(RecordingSink::default());
    engine.register_sink(sink.clone());

    engine.sync_causes(&causes(&["A"]));
    assert_eq!(sink.changed_count(), 1);

    // No-op reconcile and rejected edits are silent.
    engine.sync_causes(&causes(&["A"]));
    engine.extend_right("wy1", "wy3").unwrap();
    assert_eq!(sink.changed_count(), 1);

    engine.set_text("wy1", "wy3", "why").unwrap();
    let outcome = engine.extend_right("wy1", "wy3").unwrap();
    assert!(matches!(outcome, MutationOutcome::Created { .. }));
    assert_eq!(sink.changed_count(), 3);
    assert_eq!(sink.last_changed().unwrap(), engine.snapshot());
}

#[test]
fn submit_delivers_final_forest() {
    let mut engine = engine();
    let sink = Arc::new(RecordingSink::default());
    engine.register_sink(sink.clone());
    engine.sync_causes(&causes(&["A", "B"]));

    let forest = engine.submit();
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].root_cause_statement, "A");
    assert_eq!(sink.submitted_count(), 1);
    assert_eq!(sink.submitted.lock().unwrap()[0], forest);
}

#[test]
fn panicking_sink_does_not_block_others() {
    let mut engine = engine();
    let sink = Arc::new(RecordingSink::default());
    engine.register_sink(Arc::new(PanickingSink));
    engine.register_sink(sink.clone());

    engine.sync_causes(&causes(&["A"]));
    assert_eq!(sink.changed_count(), 1);
}

#[test]
fn json_round_trip_restores_the_forest() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A", "B"]));
    engine.set_text("wy1", "wy3", "x").unwrap();
    engine.extend_down("wy1", "wy3").unwrap();
    let json = engine.to_json().unwrap();

    let mut restored = WhysEngine::default();
    assert!(restored.seed_from_json(&json).unwrap());
    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(
        restored.label("wy1", "wy7").unwrap().unwrap().to_string(),
        "1.1.1"
    );
}

#[test]
fn encoded_forest_uses_record_field_names() {
    let forest = test_fixtures::load_forest("branching");
    let json = encode_forest(&forest).unwrap();
    assert!(json.contains("\"sectionId\""));
    assert!(json.contains("\"rootCauseStatement\""));
    assert!(json.contains("\"isRootCause\""));
    assert_eq!(decode_forest(&json).unwrap(), forest);
}

#[test]
fn seeding_never_overwrites_local_state() {
    let mut engine = engine();
    engine.sync_causes(&causes(&["A"]));
    let seeded = engine
        .seed(test_fixtures::load_forest("branching"))
        .unwrap();
    assert!(!seeded);
    assert_eq!(names(&engine), ["A"]);
}

#[test]
fn seeded_sections_survive_matching_causes() {
    let mut engine = engine();
    engine.seed(test_fixtures::load_forest("branching")).unwrap();
    let report = engine.sync_causes(&test_fixtures::load_causes("possible_causes"));
    assert_eq!(report.kept, 2);
    assert!(!report.changed);
    assert_eq!(ids(&engine), ["s1", "s2"]);
}

#[test]
fn legacy_records_seed() {
    let mut engine = engine();
    engine
        .seed_from_json(&test_fixtures::load_fixture_text("forests/legacy_keys.json"))
        .unwrap();
    assert_eq!(ids(&engine), ["legacy-1"]);
    assert_eq!(
        engine.label("legacy-1", "w2").unwrap().unwrap().to_string(),
        "1.2"
    );
}

#[test]
fn cyclic_forest_is_rejected() {
    let mut engine = engine();
    let err = engine
        .seed(test_fixtures::load_forest("cyclic"))
        .unwrap_err();
    assert!(matches!(
        err,
        RcaError::Forest(ForestError::CycleDetected { .. })
    ));
    assert!(engine.store().is_empty());
}

#[test]
fn inconsistent_forest_is_rejected_whole() {
    let mut forest = test_fixtures::load_forest("branching");
    // Second cv in the second section.
    let mut extra = forest[1].nodes[0].clone();
    extra.id = "c3".into();
    extra.row = 1;
    forest[1].nodes.push(extra);

    let mut engine = engine();
    let err = engine.seed(forest).unwrap_err();
    assert!(matches!(
        err,
        RcaError::Forest(ForestError::GraphInconsistency { .. })
    ));
    assert!(engine.store().is_empty());
}

#[test]
fn dangling_parent_is_rejected() {
    let mut forest = test_fixtures::load_forest("branching");
    forest[0].nodes[4].parent_id = Some("nowhere".into());
    let mut engine = engine();
    assert!(engine.seed(forest).is_err());
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let mut engine = engine();
    let err = engine.seed_from_json("[{\"sectionId\": 1}]").unwrap_err();
    assert!(matches!(err, RcaError::Serialization(_)));
}

#[test]
fn seeding_is_published() {
    let mut engine = engine();
    let sink = Arc::new(RecordingSink::default());
    engine.register_sink(sink.clone());

    assert!(engine.seed(test_fixtures::load_forest("branching")).unwrap());
    assert_eq!(sink.changed_count(), 1);
    assert_eq!(sink.last_changed().unwrap(), engine.snapshot());

    // Matching causes change nothing, so nothing more is sent.
    let report = engine.sync_causes(&test_fixtures::load_causes("possible_causes"));
    assert!(!report.changed);
    assert_eq!(sink.changed_count(), 1);

    // A refused seed is silent.
    assert!(!engine.seed(test_fixtures::load_forest("branching")).unwrap());
    assert_eq!(sink.changed_count(), 1);
}
