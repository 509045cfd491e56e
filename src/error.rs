//! Error taxonomy for loading, laying out and writing an import graph.
//!
//! Every variant names the offending node, edge or file so a failed run can
//! be traced back to its input. Nothing here is recoverable mid-run: the
//! pipeline aborts on the first error and writes no output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Error, Debug)]
pub enum LayoutError {
    // ─────────────────────────────────────────────────────────────
    // Graph shape
    // ─────────────────────────────────────────────────────────────
    #[error("dependency cycle detected through node '{node}'")]
    Cycle { node: String },

    // ─────────────────────────────────────────────────────────────
    // Layout passes
    // ─────────────────────────────────────────────────────────────
    #[error(
        "no free vertical slot for node '{node}' in bucket {bucket}: level {level} is outside the window [0, {window})"
    )]
    SlotOverflow {
        node: String,
        bucket: i64,
        level: i64,
        window: usize,
    },

    #[error("all {count} nodes share popularity weight {weight}; radius range is degenerate")]
    DegenerateRange { weight: f64, count: usize },

    // ─────────────────────────────────────────────────────────────
    // Malformed input
    // ─────────────────────────────────────────────────────────────
    #[error("node '{node}' is declared more than once")]
    DuplicateNode { node: String },

    #[error("node id '{node}' is empty or contains whitespace")]
    InvalidId { node: String },

    #[error("node '{node}' has invalid weight {weight} (expected a finite, non-negative number)")]
    InvalidWeight { node: String, weight: f64 },

    #[error("node '{node}' has no weight attribute")]
    MissingWeight { node: String },

    #[error("edge '{source_id}' -> '{target_id}' references unknown node '{missing}'")]
    DanglingEdge {
        source_id: String,
        target_id: String,
        missing: String,
    },

    #[error("{format} parse error: {details}")]
    Parse {
        format: &'static str,
        details: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration and I/O
    // ─────────────────────────────────────────────────────────────
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// True for the input-validation family (bad markup, weights or edges).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::DuplicateNode { .. }
                | Self::InvalidId { .. }
                | Self::InvalidWeight { .. }
                | Self::MissingWeight { .. }
                | Self::DanglingEdge { .. }
                | Self::Parse { .. }
        )
    }
}
