//! Vertical slot allocation.
//!
//! Nodes are bucketed by truncated horizontal coordinate. Inside a bucket each
//! node aims for the mean of its own base level and the levels of its
//! same-group predecessors, then probes outward (0, -1, +1, -2, +2, ...)
//! until it finds an unoccupied integer level.
//!
//! Buckets run in ascending key order and members in ascending topological
//! index. A predecessor always has strictly fewer ancestors than its
//! successor, so it sits in the same or an earlier bucket and, under this
//! order, is already placed when its successor is visited.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::classify::Group;
use super::graph::TopoOrder;
use super::types::Horizontal;
use crate::error::{LayoutError, Result};

/// Probe offset for the `k`-th attempt: 0, -1, 1, -2, 2, -3, 3, ...
pub fn next_slot(k: usize) -> i64 {
    let step = k.div_ceil(2) as i64;
    if k % 2 == 1 { -step } else { step }
}

/// Group node indices by bucket key; members stay in topological order.
pub fn bucketize(xs: &[Horizontal]) -> BTreeMap<i64, Vec<usize>> {
    let mut buckets: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, x) in xs.iter().enumerate() {
        buckets.entry(x.bucket()).or_default().push(i);
    }
    buckets
}

/// Occupied vertical levels of one bucket.
struct Occupancy {
    taken: Vec<bool>,
}

impl Occupancy {
    fn new(window: usize) -> Self {
        Self {
            taken: vec![false; window],
        }
    }

    /// Claim the first free level around `target`.
    ///
    /// Returns the claimed coordinate, or the first out-of-window level the
    /// probe reached.
    fn claim(&mut self, target: f64) -> std::result::Result<f64, i64> {
        let mut k = 0;
        loop {
            let candidate = target + next_slot(k) as f64;
            let level = candidate.trunc() as i64;
            let slot = usize::try_from(level)
                .ok()
                .filter(|&s| s < self.taken.len())
                .ok_or(level)?;
            if !self.taken[slot] {
                self.taken[slot] = true;
                return Ok(candidate);
            }
            k += 1;
        }
    }
}

/// Vertical coordinates for every node, by topological index.
pub fn place_vertical(
    xs: &[Horizontal],
    groups: &[Group<'_>],
    order: &TopoOrder,
    slot_window: usize,
) -> Result<Vec<f64>> {
    // Unplaced nodes read as their base level.
    let mut ys: Vec<f64> = groups.iter().map(|g| g.level).collect();
    let buckets = bucketize(xs);
    debug!(buckets = buckets.len(), slot_window, "allocating vertical slots");

    for (&key, members) in &buckets {
        let mut occupancy = Occupancy::new(slot_window);
        for &node in members {
            let group = groups[node].label;
            let (sum, count) = order.predecessors[node]
                .iter()
                .filter(|&&p| groups[p].label == group)
                .fold((groups[node].level, 1usize), |(sum, count), &p| {
                    (sum + ys[p], count + 1)
                });
            let target = sum / count as f64;

            let y = occupancy
                .claim(target)
                .map_err(|level| LayoutError::SlotOverflow {
                    node: order.ids[node].clone(),
                    bucket: key,
                    level,
                    window: slot_window,
                })?;
            trace!(node = %order.ids[node], bucket = key, target, y, "placed");
            ys[node] = y;
        }
    }
    Ok(ys)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_vertical.rs"]
mod tests;
