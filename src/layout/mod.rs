//! Layout engine: runs every pass over a loaded import graph.
//!
//! Passes, each consuming the full output of the previous one:
//!   1. Load + validate (graph)
//!   2. Topological order (graph)
//!   3. Ancestor counts (ancestors)
//!   4. Classification + horizontal placement (classify, horizontal)
//!   5. Vertical slot allocation (vertical)
//!   6. Radius normalization (radius)

pub mod ancestors;
pub mod classify;
pub mod graph;
pub mod horizontal;
pub mod radius;
pub mod types;
pub mod vertical;

pub use classify::{Classifier, Group};
pub use graph::{DependencyGraph, TopoOrder};
pub use types::{Horizontal, LayoutResult, LayoutStats, PlacedNode};

use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::syntax::types::GraphInput;

/// Run the full layout pipeline.
pub fn full_layout(input: &GraphInput, config: &LayoutConfig) -> Result<LayoutResult> {
    config.validate()?;

    let graph = DependencyGraph::from_input(input)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded import graph"
    );

    let order = graph.topological_order()?;
    let counts = ancestors::ancestor_counts(&order);
    debug!(
        max_ancestors = counts.iter().copied().max().unwrap_or(0),
        "computed ancestor counts"
    );

    let classifier = Classifier::new(config);
    let groups: Vec<Group<'_>> = order.ids.iter().map(|id| classifier.classify(id)).collect();
    let xs = horizontal::place_horizontal(&counts, config.horizontal_exponent, config.spread_window);
    let ys = vertical::place_vertical(&xs, &groups, &order, config.slot_window)?;
    let radii = radius::normalize_radii(&order.weights, config)?;

    let weight_range = radius::weight_range(&order.weights);
    if let Some((min, max)) = weight_range {
        info!(min, max, "popularity weight range");
    }

    let stats = LayoutStats {
        node_count: order.len(),
        edge_count: order.edge_count(),
        zero_ancestor_count: counts.iter().filter(|&&c| c == 0).count(),
        bucket_count: vertical::bucketize(&xs).len(),
        weight_range,
    };

    let nodes = order
        .ids
        .iter()
        .enumerate()
        .map(|(i, id)| PlacedNode {
            id: id.clone(),
            group: groups[i].label.to_string(),
            color: groups[i].color.to_string(),
            weight: order.weights[i],
            ancestors: counts[i],
            x: xs[i],
            y: ys[i],
            radius: radii[i],
        })
        .collect();

    Ok(LayoutResult {
        nodes,
        successors: order.successors,
        stats,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pipeline.rs"]
mod tests;
