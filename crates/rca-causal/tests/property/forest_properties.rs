//! Property tests for rca-causal: structural invariants under random edit
//! sequences, subtree deletion, and label stability.

use std::collections::HashSet;

use proptest::prelude::*;

use rca_causal::engine::WhysEngine;
use rca_causal::graph::{subtree, SectionGraph};
use rca_causal::label::derive_labels;
use rca_causal::store::MutationOutcome;
use rca_core::config::RcaConfig;
use rca_core::constants::CV_COL;
use rca_core::models::NodeKind;
use rca_core::traits::SequentialIdGenerator;

#[derive(Debug, Clone)]
enum Op {
    AddChain,
    Right(usize),
    Down(usize),
    Toggle(usize),
    Delete(usize),
    Text(usize, bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddChain),
        any::<usize>().prop_map(Op::Right),
        any::<usize>().prop_map(Op::Down),
        any::<usize>().prop_map(Op::Toggle),
        any::<usize>().prop_map(Op::Delete),
        (any::<usize>(), any::<bool>()).prop_map(|(i, filled)| Op::Text(i, filled)),
    ]
}

const SECTION: &str = "wy1";

fn fresh_engine() -> WhysEngine {
    let mut engine = WhysEngine::with_id_generator(
        RcaConfig::default(),
        Box::new(SequentialIdGenerator::default()),
    );
    engine.sync_causes(&test_fixtures::causes(&["Conveyor stops"]));
    engine
}

fn graph(engine: &WhysEngine) -> &SectionGraph {
    &engine.store().section(SECTION).unwrap().graph
}

/// Pick a node id by position in the grid-ordered node list.
fn pick(engine: &WhysEngine, i: usize) -> String {
    let nodes = graph(engine).to_nodes();
    nodes[i % nodes.len()].id.clone()
}

fn apply(engine: &mut WhysEngine, op: &Op) -> MutationOutcome {
    match op {
        Op::AddChain => engine.add_chain_from_root(SECTION).unwrap(),
        Op::Right(i) => {
            let id = pick(engine, *i);
            engine.extend_right(SECTION, &id).unwrap()
        }
        Op::Down(i) => {
            let id = pick(engine, *i);
            engine.extend_down(SECTION, &id).unwrap()
        }
        Op::Toggle(i) => {
            let id = pick(engine, *i);
            engine.toggle_root_cause(SECTION, &id).unwrap()
        }
        Op::Delete(i) => {
            let id = pick(engine, *i);
            engine.delete_node(SECTION, &id).unwrap()
        }
        Op::Text(i, filled) => {
            let id = pick(engine, *i);
            let text = if *filled { "because" } else { "" };
            engine.set_text(SECTION, &id, text).unwrap()
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_edit_sequence(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut engine = fresh_engine();
        for op in &ops {
            let before = engine.snapshot();
            let outcome = apply(&mut engine, op);
            if !outcome.is_applied() {
                prop_assert_eq!(engine.snapshot(), before);
            }
            prop_assert!(engine.store().verify().is_ok(), "after {:?}", op);

            let g = graph(&engine);
            let cvs: Vec<_> = g.nodes().filter(|n| n.kind == NodeKind::Cv).collect();
            prop_assert_eq!(cvs.len(), 1);
            prop_assert_eq!(cvs[0].col, CV_COL);
            prop_assert!(!g.top_level_whys().is_empty());
            // Every node but the cv hangs off exactly one parent.
            prop_assert_eq!(g.edge_count(), g.node_count() - 1);
        }
    }

    #[test]
    fn delete_removes_exactly_the_subtree(
        ops in prop::collection::vec(op_strategy(), 0..40),
        target in any::<usize>()
    ) {
        let mut engine = fresh_engine();
        for op in &ops {
            apply(&mut engine, op);
        }
        let victim = pick(&engine, target);
        let node = graph(&engine).get(&victim).unwrap().clone();
        let closure = subtree::descendants(graph(&engine), &victim);
        let survivors: HashSet<String> = graph(&engine)
            .nodes()
            .map(|n| n.id.clone())
            .filter(|id| !closure.contains(id))
            .collect();

        let outcome = engine.delete_node(SECTION, &victim).unwrap();
        if node.kind == NodeKind::Cv {
            prop_assert!(!outcome.is_applied());
            return Ok(());
        }

        let mut expected: Vec<String> = closure.iter().cloned().collect();
        expected.sort();
        prop_assert_eq!(outcome, MutationOutcome::Removed { node_ids: expected });

        let after: HashSet<String> = graph(&engine).nodes().map(|n| n.id.clone()).collect();
        for id in &closure {
            prop_assert!(!after.contains(id));
        }
        for id in &survivors {
            prop_assert!(after.contains(id));
        }
        // At most one replacement why appears.
        prop_assert!(after.len() <= survivors.len() + 1);
    }

    #[test]
    fn labels_are_unique_and_order_independent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        seed in any::<u64>()
    ) {
        let mut engine = fresh_engine();
        for op in &ops {
            apply(&mut engine, op);
        }
        let nodes = graph(&engine).to_nodes();
        let labels = derive_labels(graph(&engine));

        let whys = nodes.iter().filter(|n| n.kind == NodeKind::Why).count();
        prop_assert_eq!(labels.len(), whys);
        let distinct: HashSet<String> = labels.values().map(ToString::to_string).collect();
        prop_assert_eq!(distinct.len(), whys);

        // Rotate the node list by a seed-derived offset and rebuild.
        let mut rotated = nodes.clone();
        let len = rotated.len();
        rotated.rotate_left((seed as usize) % len);
        let rebuilt = SectionGraph::from_nodes(SECTION, rotated).unwrap();
        prop_assert_eq!(derive_labels(&rebuilt), labels);
    }
}
