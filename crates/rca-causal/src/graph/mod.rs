pub mod compaction;
pub mod invariants;
pub mod section_graph;
pub mod subtree;

pub use section_graph::SectionGraph;
