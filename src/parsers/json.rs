//! JSON graph descriptions.
//!
//! ```json
//! {
//!   "nodes": [{"id": "Mathlib.Logic.Basic", "weight": 12.0}],
//!   "edges": [["Mathlib.Init", "Mathlib.Logic.Basic"],
//!             {"source": "Mathlib.Init", "target": "Mathlib.Order.Basic"}]
//! }
//! ```

use serde::Deserialize;

use super::Parser;
use crate::error::{LayoutError, Result};
use crate::syntax::types::{EdgeSpec, GraphInput, NodeSpec};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    #[serde(default)]
    edges: Vec<JsonEdge>,
}

#[derive(Debug, Deserialize)]
struct JsonNode {
    id: String,
    weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonEdge {
    Pair(String, String),
    Object { source: String, target: String },
}

pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, src: &str) -> Result<GraphInput> {
        let raw: JsonGraph = serde_json::from_str(src).map_err(|e| LayoutError::Parse {
            format: "JSON",
            details: e.to_string(),
        })?;

        let nodes = raw
            .nodes
            .into_iter()
            .map(|n| match n.weight {
                Some(weight) => Ok(NodeSpec::new(n.id, weight)),
                None => Err(LayoutError::MissingWeight { node: n.id }),
            })
            .collect::<Result<Vec<_>>>()?;

        let edges = raw
            .edges
            .into_iter()
            .map(|e| match e {
                JsonEdge::Pair(source, target) | JsonEdge::Object { source, target } => {
                    EdgeSpec::new(source, target)
                }
            })
            .collect();

        Ok(GraphInput { nodes, edges })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_json.rs"]
mod tests;
