//! Connector paths between structurally related cards.
//!
//! Chain connectors (into a `why`) run vertically at the source column, then
//! horizontally along the target row. Terminal connectors (into a `root`) run
//! horizontally along the source row, then vertically. Equal rows give a
//! straight segment.

use serde::Serialize;

use rca_core::models::NodeKind;

use super::geometry::{GridGeometry, Point};
use crate::graph::SectionGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Into a `why` node, from its parent or the `cv`.
    Chain,
    /// Into a `root` marker, from the `why` it terminates.
    Terminal,
}

/// A polyline between two card anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub source_id: String,
    pub target_id: String,
    pub kind: ConnectorKind,
    pub points: Vec<Point>,
}

impl Connector {
    /// SVG path data: `M x1,y1 L x2,y2 ...`.
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            d.push_str(if i == 0 { "M " } else { "L " });
            d.push_str(&format!("{},{}", p.x, p.y));
        }
        d
    }

    pub fn is_straight(&self) -> bool {
        self.points.len() == 2
    }
}

/// One connector per non-`cv` node whose source can be resolved.
///
/// Ordered by target `(row, col, id)`.
pub fn connectors(graph: &SectionGraph, geometry: &GridGeometry) -> Vec<Connector> {
    let cv = graph.validated_cause();
    let mut out = Vec::new();

    for node in graph.to_nodes() {
        let (source, kind) = match node.kind {
            NodeKind::Cv => continue,
            NodeKind::Why => match graph.parent(&node).or(cv) {
                Some(source) => (source, ConnectorKind::Chain),
                None => continue,
            },
            NodeKind::Root => match graph.parent(&node) {
                Some(source) => (source, ConnectorKind::Terminal),
                None => continue,
            },
        };

        let source_row = geometry.display_row(graph, source);
        let from = geometry.anchor(source.col, source_row);
        let to = geometry.anchor(node.col, node.row);

        let points = if source_row == node.row {
            vec![from, to]
        } else {
            let elbow = match kind {
                ConnectorKind::Chain => Point { x: from.x, y: to.y },
                ConnectorKind::Terminal => Point { x: to.x, y: from.y },
            };
            vec![from, elbow, to]
        };

        out.push(Connector {
            source_id: source.id.clone(),
            target_id: node.id.clone(),
            kind,
            points,
        });
    }
    out
}
