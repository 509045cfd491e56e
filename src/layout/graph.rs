//! DependencyGraph: loads a GraphInput into a petgraph DiGraph and orders it.
//!
//! Edges point from the imported module to the importing one, so a
//! topological order places every module after everything it depends on.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::syntax::types::GraphInput;

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: String,
    pub weight: f64,
}

/// Import graph with an id → index map for O(1) lookup.
///
/// Parallel edges are collapsed on insertion, so the graph is simple.
pub struct DependencyGraph {
    pub digraph: DiGraph<NodeData, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Build the graph, validating ids, weights and edge endpoints.
    ///
    /// Ids must be non-empty and free of whitespace.
    pub fn from_input(input: &GraphInput) -> Result<Self> {
        let mut digraph: DiGraph<NodeData, ()> =
            DiGraph::with_capacity(input.nodes.len(), input.edges.len());
        let mut node_index: HashMap<String, NodeIndex> = HashMap::with_capacity(input.nodes.len());

        for node in &input.nodes {
            // Ids are whitespace-delimited fields in the positions file.
            if node.id.is_empty() || node.id.chars().any(char::is_whitespace) {
                return Err(LayoutError::InvalidId {
                    node: node.id.clone(),
                });
            }
            if !node.weight.is_finite() || node.weight < 0.0 {
                return Err(LayoutError::InvalidWeight {
                    node: node.id.clone(),
                    weight: node.weight,
                });
            }
            if node_index.contains_key(&node.id) {
                return Err(LayoutError::DuplicateNode {
                    node: node.id.clone(),
                });
            }
            let idx = digraph.add_node(NodeData {
                id: node.id.clone(),
                weight: node.weight,
            });
            node_index.insert(node.id.clone(), idx);
        }

        for edge in &input.edges {
            let lookup = |id: &str| {
                node_index
                    .get(id)
                    .copied()
                    .ok_or_else(|| LayoutError::DanglingEdge {
                        source_id: edge.source.clone(),
                        target_id: edge.target.clone(),
                        missing: id.to_string(),
                    })
            };
            let from = lookup(edge.source.as_str())?;
            let to = lookup(edge.target.as_str())?;
            digraph.update_edge(from, to, ());
        }

        debug!(
            nodes = digraph.node_count(),
            edges = digraph.edge_count(),
            duplicates = input.edges.len() - digraph.edge_count(),
            "built dependency graph"
        );
        Ok(Self {
            digraph,
            node_index,
        })
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Topologically order the graph and re-index it by position in that order.
    ///
    /// Fails with `LayoutError::Cycle` naming a node on a cycle. Self-loops
    /// count as cycles.
    pub fn topological_order(&self) -> Result<TopoOrder> {
        let sorted = toposort(&self.digraph, None).map_err(|cycle| LayoutError::Cycle {
            node: self.digraph[cycle.node_id()].id.clone(),
        })?;

        let mut position = vec![0usize; self.digraph.node_count()];
        for (i, idx) in sorted.iter().enumerate() {
            position[idx.index()] = i;
        }

        let neighbors = |idx: NodeIndex, dir: Direction| -> Vec<usize> {
            let mut out: Vec<usize> = self
                .digraph
                .neighbors_directed(idx, dir)
                .map(|n| position[n.index()])
                .collect();
            out.sort_unstable();
            out
        };

        let mut order = TopoOrder::default();
        for &idx in &sorted {
            let data = &self.digraph[idx];
            order.ids.push(data.id.clone());
            order.weights.push(data.weight);
            order.predecessors.push(neighbors(idx, Direction::Incoming));
            order.successors.push(neighbors(idx, Direction::Outgoing));
        }
        Ok(order)
    }
}

/// The graph re-indexed by topological position.
///
/// Index `i` in every vector refers to the `i`-th node of the order, and for
/// every edge `u -> v` the index of `u` is smaller than the index of `v`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopoOrder {
    pub ids: Vec<String>,
    pub weights: Vec<f64>,
    /// Direct predecessors (imported modules), ascending.
    pub predecessors: Vec<Vec<usize>>,
    /// Direct successors (importing modules), ascending.
    pub successors: Vec<Vec<usize>>,
}

impl TopoOrder {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|x| x == id)
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
