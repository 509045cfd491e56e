//! Parsed input model, independent of the markup it was read from.

pub mod types;

pub use types::{EdgeSpec, GraphInput, NodeSpec};
