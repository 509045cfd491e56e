//! Parser registry: detect the input format and dispatch to the right parser.

pub mod gexf;
pub mod json;

use std::path::Path;

use crate::error::{LayoutError, Result};
use crate::syntax::types::GraphInput;

pub use gexf::GexfParser;
pub use json::JsonParser;

/// Trait for graph description parsers.
pub trait Parser {
    /// Parse the input source string into a GraphInput.
    fn parse(&self, src: &str) -> Result<GraphInput>;
}

/// Input format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
    /// Pick by file extension, then by the first non-blank character.
    #[default]
    Auto,
    Gexf,
    Json,
}

/// Resolve `Auto` to a concrete format.
///
/// The extension decides first; otherwise a leading `<` means GEXF and a
/// leading `{` means JSON. Anything else is rejected.
pub fn detect_format(path: Option<&Path>, src: &str) -> Result<InputFormat> {
    let by_extension = path
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .and_then(|ext| match ext.to_ascii_lowercase().as_str() {
            "gexf" | "xml" => Some(InputFormat::Gexf),
            "json" => Some(InputFormat::Json),
            _ => None,
        });
    if let Some(format) = by_extension {
        return Ok(format);
    }
    match src.trim_start().chars().next() {
        Some('<') => Ok(InputFormat::Gexf),
        Some('{') => Ok(InputFormat::Json),
        Some(c) => Err(LayoutError::Parse {
            format: "input",
            details: format!("cannot detect format: expected '<' or '{{', found {c:?}"),
        }),
        None => Err(LayoutError::Parse {
            format: "input",
            details: "cannot detect format of empty input".to_string(),
        }),
    }
}

/// Parse `src` in the given format, resolving `Auto` from `path` and content.
pub fn parse(src: &str, format: InputFormat, path: Option<&Path>) -> Result<GraphInput> {
    let format = match format {
        InputFormat::Auto => detect_format(path, src)?,
        other => other,
    };
    match format {
        InputFormat::Json => JsonParser.parse(src),
        InputFormat::Gexf | InputFormat::Auto => GexfParser.parse(src),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_registry.rs"]
mod tests;
