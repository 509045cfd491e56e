//! Renderer trait and the positions-file renderer.

pub mod positions;

pub use positions::PositionsRenderer;

use crate::layout::types::LayoutResult;

/// Trait for layout serializers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, layout: &LayoutResult) -> String;
}
