//! Horizontal placement from ancestor counts.

use super::types::Horizontal;

/// Wrapping counter that fans zero-ancestor nodes over `0, -1, ..., -(window-1)`.
///
/// One counter serves one layout run; it advances only for zero-ancestor
/// nodes, in topological order.
#[derive(Debug, Clone)]
pub struct SpreadCounter {
    next: u32,
    window: u32,
}

impl SpreadCounter {
    pub fn new(window: u32) -> Self {
        Self {
            next: 0,
            window: window.max(1),
        }
    }

    /// Return the next spread coordinate and advance.
    pub fn advance(&mut self) -> i64 {
        let x = -i64::from(self.next);
        self.next = (self.next + 1) % self.window;
        x
    }
}

/// Horizontal coordinate for a single node.
pub fn horizontal_position(ancestors: usize, exponent: f64, spread: &mut SpreadCounter) -> Horizontal {
    if ancestors == 0 {
        Horizontal::Spread(spread.advance())
    } else {
        Horizontal::Scaled((ancestors as f64).powf(exponent))
    }
}

/// Horizontal coordinates for every node, by topological index.
pub fn place_horizontal(ancestor_counts: &[usize], exponent: f64, spread_window: u32) -> Vec<Horizontal> {
    let mut spread = SpreadCounter::new(spread_window);
    ancestor_counts
        .iter()
        .map(|&count| horizontal_position(count, exponent, &mut spread))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_horizontal.rs"]
mod tests;
