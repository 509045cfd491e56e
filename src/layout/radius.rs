//! Radius normalization from popularity weights.

use tracing::warn;

use crate::config::{DegeneratePolicy, LayoutConfig};
use crate::error::{LayoutError, Result};

/// `(min, max)` of the weights, or `None` when there are none.
pub fn weight_range(weights: &[f64]) -> Option<(f64, f64)> {
    weights.iter().copied().fold(None, |range, w| match range {
        None => Some((w, w)),
        Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
    })
}

/// Linearly map every weight onto `[min_radius, min_radius + radius_span]`.
///
/// When all weights are equal the range is degenerate; the config's
/// `degenerate_policy` decides between the minimum radius and an error.
pub fn normalize_radii(weights: &[f64], config: &LayoutConfig) -> Result<Vec<f64>> {
    let Some((min, max)) = weight_range(weights) else {
        return Ok(Vec::new());
    };

    if max == min {
        return match config.degenerate_policy {
            DegeneratePolicy::Strict => Err(LayoutError::DegenerateRange {
                weight: min,
                count: weights.len(),
            }),
            DegeneratePolicy::Fallback => {
                warn!(
                    weight = min,
                    nodes = weights.len(),
                    "all weights are equal; using minimum radius for every node"
                );
                Ok(vec![config.min_radius; weights.len()])
            }
        };
    }

    let span = max - min;
    Ok(weights
        .iter()
        .map(|&w| config.min_radius + config.radius_span * ((w - min) / span))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_radius.rs"]
mod tests;
