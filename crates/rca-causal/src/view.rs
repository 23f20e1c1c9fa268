//! Read-only presentation model of a section: positioned cards and connectors.
//!
//! This is everything a renderer needs; it never feeds back into the store.

use serde::Serialize;

use rca_core::config::{LayoutConfig, WhysConfig};
use rca_core::models::NodeKind;

use crate::label::derive_labels;
use crate::layout::{connectors, Connector, GridGeometry, Point, Size};
use crate::store::{Affordances, Section};

/// One card on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub node_id: String,
    pub kind: NodeKind,
    /// Top-left corner in pixels.
    pub origin: Point,
    /// Derived label, `why` cards only.
    pub label: Option<String>,
    /// Text to show. A `root` card mirrors its `why`'s current text.
    pub text: String,
    /// Edits offered on this card, `why` cards only.
    pub affordances: Option<Affordances>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub section_id: String,
    pub name: String,
    pub canvas: Size,
    /// Ordered by `(row, col, id)`.
    pub cards: Vec<CardView>,
    pub connectors: Vec<Connector>,
}

pub fn render_section(section: &Section, layout: &LayoutConfig, whys: &WhysConfig) -> SectionView {
    let graph = &section.graph;
    let geometry = GridGeometry::new(layout);
    let labels = derive_labels(graph);

    let cards = graph
        .to_nodes()
        .into_iter()
        .map(|node| {
            let origin = geometry.placement(graph, &node);
            let (label, text, affordances) = match node.kind {
                NodeKind::Cv => (None, section.name.clone(), None),
                NodeKind::Why => (
                    labels.get(&node.id).map(ToString::to_string),
                    node.text.clone(),
                    Some(Affordances::of(graph, &node, whys.max_chain_links)),
                ),
                NodeKind::Root => {
                    let live = graph
                        .parent(&node)
                        .map_or_else(|| node.text.clone(), |owner| owner.text.clone());
                    (None, live, None)
                }
            };
            CardView {
                node_id: node.id,
                kind: node.kind,
                origin,
                label,
                text,
                affordances,
            }
        })
        .collect();

    SectionView {
        section_id: section.id.clone(),
        name: section.name.clone(),
        canvas: geometry.canvas(graph),
        cards,
        connectors: connectors(graph, &geometry),
    }
}
