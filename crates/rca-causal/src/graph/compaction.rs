//! Row bookkeeping: open a row for a downward branch, repack rows after removals.

use std::collections::{BTreeSet, HashMap};

use super::section_graph::SectionGraph;

/// Shift every node at `row` or below down by one, leaving `row` empty.
pub fn open_row(graph: &mut SectionGraph, row: u32) {
    graph.for_each_node_mut(|n| {
        if n.row >= row {
            n.row += 1;
        }
    });
}

/// Renumber rows to consecutive integers `0..=k`, preserving their order.
///
/// Returns `true` if any node moved.
pub fn compact_rows(graph: &mut SectionGraph) -> bool {
    let used: BTreeSet<u32> = graph.nodes().map(|n| n.row).collect();
    let remap: HashMap<u32, u32> = used
        .into_iter()
        .enumerate()
        .map(|(packed, row)| (row, packed as u32))
        .collect();

    let mut changed = false;
    graph.for_each_node_mut(|n| {
        if let Some(&packed) = remap.get(&n.row) {
            if packed != n.row {
                n.row = packed;
                changed = true;
            }
        }
    });
    changed
}

/// Whether the rows in use are exactly `0..=k`.
pub fn rows_are_dense(graph: &SectionGraph) -> bool {
    let used: BTreeSet<u32> = graph.nodes().map(|n| n.row).collect();
    used.iter().copied().eq(0..used.len() as u32)
}
