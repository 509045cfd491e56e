//! Positions-and-adjacency text file consumed by the WebGL visualizer.
//!
//! ```text
//! N
//! <id> <color> <x> <y> <radius>          (N lines, topological order)
//! <index> <out-degree> <succ> <succ> ...  (N lines, topological order)
//! ```

use std::fmt::Write;

use super::Renderer;
use crate::layout::types::LayoutResult;

/// Serializes a layout into the visualizer's line format.
pub struct PositionsRenderer;

impl Renderer for PositionsRenderer {
    fn render(&self, layout: &LayoutResult) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", layout.node_count());

        for node in &layout.nodes {
            let _ = writeln!(
                out,
                "{} {} {} {:?} {:?}",
                node.id, node.color, node.x, node.y, node.radius
            );
        }

        for (index, succs) in layout.successors.iter().enumerate() {
            let _ = write!(out, "{} {}", index, succs.len());
            for succ in succs {
                let _ = write!(out, " {succ}");
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_positions.rs"]
mod tests;
