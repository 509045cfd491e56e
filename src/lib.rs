//! import-graph-layout: 2D positions for a library's module import graph.
//!
//! Public API: `layout_source()` for text in, text out; `layout::full_layout()`
//! for the structured result.
//!
//! x grows with the number of transitive dependencies, y follows the module's
//! topic with collision-avoiding jitter, and the radius follows popularity.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

use std::path::Path;

pub use config::{DegeneratePolicy, GroupRule, LayoutConfig, load_config};
pub use error::{LayoutError, Result};
pub use layout::{LayoutResult, full_layout};
pub use parsers::InputFormat;
pub use syntax::types::{EdgeSpec, GraphInput, NodeSpec};

use crate::renderers::{PositionsRenderer, Renderer};

/// Parse a graph description and lay it out, returning the structured result.
///
/// `path` only feeds format auto-detection; nothing is read from it.
pub fn layout_graph(
    src: &str,
    format: InputFormat,
    path: Option<&Path>,
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    let input = parsers::parse(src, format, path)?;
    full_layout(&input, config)
}

/// Parse a graph description, lay it out and render the positions file.
pub fn layout_source(src: &str, format: InputFormat, config: &LayoutConfig) -> Result<String> {
    let result = layout_graph(src, format, None, config)?;
    Ok(PositionsRenderer.render(&result))
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
