use serde::Serialize;

use rca_core::config::LayoutConfig;
use rca_core::models::{NodeKind, WhyNode};

use crate::graph::SectionGraph;

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Maps grid cells to pixels for one layout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub cell_width: f64,
    pub cell_height: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub center_validated_cause: bool,
}

impl GridGeometry {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            card_width: config.card_width,
            card_height: config.card_height,
            center_validated_cause: config.center_validated_cause,
        }
    }

    /// Top-left corner of cell `(col, row)`.
    pub fn origin(&self, col: u32, row: u32) -> Point {
        Point {
            x: f64::from(col) * self.cell_width,
            y: f64::from(row) * self.cell_height,
        }
    }

    /// Connection point of the card in cell `(col, row)`: the card's center.
    pub fn anchor(&self, col: u32, row: u32) -> Point {
        let origin = self.origin(col, row);
        Point {
            x: origin.x + self.card_width / 2.0,
            y: origin.y + self.card_height / 2.0,
        }
    }

    /// Row at which `node` is drawn. Only the `cv` may be displaced, and only
    /// when centering is enabled.
    pub fn display_row(&self, graph: &SectionGraph, node: &WhyNode) -> u32 {
        if node.kind == NodeKind::Cv && self.center_validated_cause {
            graph.max_row() / 2
        } else {
            node.row
        }
    }

    /// Top-left corner of `node`'s card.
    pub fn placement(&self, graph: &SectionGraph, node: &WhyNode) -> Point {
        self.origin(node.col, self.display_row(graph, node))
    }

    /// Canvas large enough for the section plus one spare cell each way.
    pub fn canvas(&self, graph: &SectionGraph) -> Size {
        Size {
            width: (f64::from(graph.max_col()) + 2.0) * self.cell_width,
            height: (f64::from(graph.max_row()) + 2.0) * self.cell_height,
        }
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}
