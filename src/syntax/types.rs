//! Input data structures for an import graph.
//!
//! These types are what every parser produces and what the graph loader
//! consumes: an ordered node list carrying popularity weights, and an
//! ordered edge list of "target depends on source" pairs.

// ─── NodeSpec ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    /// Module identifier (e.g. "Mathlib.Algebra.Group.Defs").
    pub id: String,
    /// Popularity weight (declaration count, page rank, ...).
    pub weight: f64,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

// ─── EdgeSpec ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    /// The imported module.
    pub source: String,
    /// The importing module; it depends on `source`.
    pub target: String,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// ─── GraphInput ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphInput {
    /// Nodes in declaration order; this order seeds topological tie-breaks.
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl GraphInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: impl Into<String>, weight: f64) -> Self {
        self.nodes.push(NodeSpec::new(id, weight));
        self
    }

    pub fn with_edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(EdgeSpec::new(source, target));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
