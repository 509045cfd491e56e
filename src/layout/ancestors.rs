//! Transitive-ancestor counting.
//!
//! Walks the topological order once. A node's ancestor set is the union of
//! its direct predecessors and their ancestor sets, all of which are already
//! complete when the node is reached.

use fixedbitset::FixedBitSet;

use super::graph::TopoOrder;

/// Number of transitive predecessors of every node, by topological index.
pub fn ancestor_counts(order: &TopoOrder) -> Vec<usize> {
    let n = order.len();
    let mut sets: Vec<FixedBitSet> = Vec::with_capacity(n);
    let mut counts = Vec::with_capacity(n);

    for preds in &order.predecessors {
        let mut set = FixedBitSet::with_capacity(n);
        for &p in preds {
            set.insert(p);
            set.union_with(&sets[p]);
        }
        counts.push(set.count_ones(..));
        sets.push(set);
    }
    counts
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_ancestors.rs"]
mod tests;
