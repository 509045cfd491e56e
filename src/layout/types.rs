//! Layout types: Horizontal, PlacedNode, LayoutStats, LayoutResult.

use std::fmt;

// ─── Horizontal ──────────────────────────────────────────────────────────────

/// A horizontal coordinate.
///
/// Nodes with ancestors sit at `count ^ exponent`; nodes without any are
/// fanned out over small non-positive integers so they do not pile up at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    Spread(i64),
    Scaled(f64),
}

impl Horizontal {
    pub fn value(self) -> f64 {
        match self {
            Horizontal::Spread(x) => x as f64,
            Horizontal::Scaled(x) => x,
        }
    }

    /// Bucket key: the coordinate truncated toward zero.
    pub fn bucket(self) -> i64 {
        match self {
            Horizontal::Spread(x) => x,
            Horizontal::Scaled(x) => x.trunc() as i64,
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizontal::Spread(x) => write!(f, "{x}"),
            Horizontal::Scaled(x) => write!(f, "{x:?}"),
        }
    }
}

// ─── PlacedNode ──────────────────────────────────────────────────────────────

/// A node with every derived attribute filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    /// Group label; empty for the default group.
    pub group: String,
    pub color: String,
    pub weight: f64,
    /// Size of the transitive predecessor set.
    pub ancestors: usize,
    pub x: Horizontal,
    pub y: f64,
    pub radius: f64,
}

// ─── LayoutStats ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub zero_ancestor_count: usize,
    pub bucket_count: usize,
    /// `(min, max)` popularity weight; `None` for an empty graph.
    pub weight_range: Option<(f64, f64)>,
}

impl fmt::Display for LayoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# of nodes: {}", self.node_count)?;
        writeln!(f, "# of edges: {}", self.edge_count)?;
        writeln!(f, "# of zero-ancestor nodes: {}", self.zero_ancestor_count)?;
        writeln!(f, "# of buckets: {}", self.bucket_count)?;
        match self.weight_range {
            Some((min, max)) => write!(f, "max: {max:?} min: {min:?}"),
            None => write!(f, "max: - min: -"),
        }
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// Complete output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// Placed nodes; position in this vector is the topological index.
    pub nodes: Vec<PlacedNode>,
    /// Successor topological indices per node, ascending.
    pub successors: Vec<Vec<usize>>,
    pub stats: LayoutStats,
}

impl LayoutResult {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
