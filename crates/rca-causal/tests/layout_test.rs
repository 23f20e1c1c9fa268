use rca_causal::engine::WhysEngine;
use rca_causal::graph::SectionGraph;
use rca_causal::layout::{connectors, ConnectorKind, GridGeometry, Point, Size};
use rca_core::config::{LayoutConfig, RcaConfig};
use rca_core::models::NodeKind;

fn branching_graph() -> SectionGraph {
    let record = test_fixtures::load_forest("branching").remove(0);
    SectionGraph::from_nodes(&record.section_id, record.nodes).unwrap()
}

fn seeded(config: RcaConfig) -> WhysEngine {
    let mut engine = WhysEngine::new(config);
    assert!(engine.seed(test_fixtures::load_forest("branching")).unwrap());
    engine
}

#[test]
fn origin_and_anchor_follow_cell_size() {
    let geometry = GridGeometry::default();
    assert_eq!(geometry.origin(2, 1), Point { x: 400.0, y: 190.0 });
    assert_eq!(geometry.anchor(0, 0), Point { x: 88.0, y: 75.0 });
    assert_eq!(geometry.anchor(1, 2), Point { x: 288.0, y: 455.0 });
}

#[test]
fn custom_cell_size_scales_positions() {
    let geometry = GridGeometry::new(&LayoutConfig {
        cell_width: 100.0,
        cell_height: 50.0,
        card_width: 80.0,
        card_height: 40.0,
        center_validated_cause: false,
    });
    assert_eq!(geometry.origin(3, 4), Point { x: 300.0, y: 200.0 });
    assert_eq!(geometry.anchor(3, 4), Point { x: 340.0, y: 220.0 });
}

#[test]
fn canvas_leaves_a_spare_cell() {
    let geometry = GridGeometry::default();
    let graph = branching_graph();
    // max_col 3, max_row 2
    assert_eq!(
        geometry.canvas(&graph),
        Size {
            width: 1000.0,
            height: 760.0
        }
    );
}

#[test]
fn chain_connectors_bend_at_source_column() {
    let geometry = GridGeometry::default();
    let graph = branching_graph();
    let all = connectors(&graph, &geometry);
    assert_eq!(all.len(), 5);

    let to_w1 = all.iter().find(|c| c.target_id == "w1").unwrap();
    assert_eq!(to_w1.source_id, "c1");
    assert_eq!(to_w1.kind, ConnectorKind::Chain);
    assert!(to_w1.is_straight());
    assert_eq!(to_w1.path_data(), "M 88,75 L 288,75");

    let to_w4 = all.iter().find(|c| c.target_id == "w4").unwrap();
    assert_eq!(to_w4.source_id, "c1");
    assert_eq!(
        to_w4.points,
        vec![
            Point { x: 88.0, y: 75.0 },
            Point { x: 88.0, y: 455.0 },
            Point { x: 288.0, y: 455.0 },
        ]
    );
    assert_eq!(to_w4.path_data(), "M 88,75 L 88,455 L 288,455");

    let to_w3 = all.iter().find(|c| c.target_id == "w3").unwrap();
    assert_eq!(to_w3.source_id, "w1");
    assert_eq!(to_w3.points.len(), 3);
}

#[test]
fn terminal_connector_runs_along_the_row() {
    let geometry = GridGeometry::default();
    let graph = branching_graph();
    let all = connectors(&graph, &geometry);
    let to_root = all.iter().find(|c| c.target_id == "r1").unwrap();
    assert_eq!(to_root.source_id, "w2");
    assert_eq!(to_root.kind, ConnectorKind::Terminal);
    assert_eq!(to_root.path_data(), "M 488,75 L 688,75");
}

#[test]
fn centered_cv_moves_only_the_cv() {
    let mut config = RcaConfig::default();
    config.layout.center_validated_cause = true;
    let engine = seeded(config);
    let view = engine.view("s1").unwrap();

    let cv = view.cards.iter().find(|c| c.kind == NodeKind::Cv).unwrap();
    assert_eq!(cv.origin, Point { x: 0.0, y: 190.0 });
    let w1 = view.cards.iter().find(|c| c.node_id == "w1").unwrap();
    assert_eq!(w1.origin, Point { x: 200.0, y: 0.0 });

    let to_w1 = view.connectors.iter().find(|c| c.target_id == "w1").unwrap();
    assert_eq!(to_w1.path_data(), "M 88,265 L 88,75 L 288,75");
}

#[test]
fn view_lists_cards_in_grid_order() {
    let engine = seeded(RcaConfig::default());
    let view = engine.view("s1").unwrap();
    assert_eq!(view.name, "Pump seal leaks");
    let ids: Vec<&str> = view.cards.iter().map(|c| c.node_id.as_str()).collect();
    assert_eq!(ids, ["c1", "w1", "w2", "r1", "w3", "w4"]);

    let labels: Vec<Option<&str>> = view.cards.iter().map(|c| c.label.as_deref()).collect();
    assert_eq!(
        labels,
        [None, Some("1.1"), Some("1.2"), None, Some("1.1.1"), Some("2.1")]
    );
    assert_eq!(view.canvas, Size { width: 1000.0, height: 760.0 });
}

#[test]
fn view_offers_affordances_on_whys_only() {
    let engine = seeded(RcaConfig::default());
    let view = engine.view("s1").unwrap();
    for card in &view.cards {
        assert_eq!(card.affordances.is_some(), card.kind == NodeKind::Why);
    }
    let w1 = view.cards.iter().find(|c| c.node_id == "w1").unwrap();
    let a = w1.affordances.unwrap();
    assert!(a.has_right_child);
    assert!(!a.extend_right);
    assert!(!a.extend_down);

    let w2 = view.cards.iter().find(|c| c.node_id == "w2").unwrap();
    let a = w2.affordances.unwrap();
    assert!(a.is_root_cause);
    assert!(a.toggle_root_cause);
    assert!(!a.extend_right);
}

#[test]
fn root_card_mirrors_live_why_text() {
    let mut engine = seeded(RcaConfig::default());
    engine.set_text("s1", "w2", "No maintenance budget").unwrap();
    let view = engine.view("s1").unwrap();
    let root = view.cards.iter().find(|c| c.node_id == "r1").unwrap();
    assert_eq!(root.text, "No maintenance budget");

    let cv = view.cards.iter().find(|c| c.node_id == "c1").unwrap();
    assert_eq!(cv.text, "Pump seal leaks");
}

#[test]
fn view_serializes_for_the_host() {
    let engine = seeded(RcaConfig::default());
    let json = serde_json::to_value(engine.view("s2").unwrap()).unwrap();
    assert_eq!(json["section_id"], "s2");
    assert_eq!(json["cards"][0]["kind"], "cv");
    assert_eq!(json["connectors"][0]["kind"], "chain");
}

#[test]
fn no_sections_means_no_views() {
    let engine = WhysEngine::default();
    assert!(engine.views().is_empty());
}
