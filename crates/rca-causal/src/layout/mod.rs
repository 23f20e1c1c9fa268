//! Pixel geometry derived from the `(col, row)` grid. Nothing here is stored.

pub mod connectors;
pub mod geometry;

pub use connectors::{connectors, Connector, ConnectorKind};
pub use geometry::{GridGeometry, Point, Size};
