//! Layout configuration: the topic table and every numeric tunable.
//!
//! `LayoutConfig::default()` reproduces the Mathlib layout. A JSON file can
//! override any subset of fields; absent fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

// ─── Palette ─────────────────────────────────────────────────────────────────

const RED: &str = "#ff0000";
const ORANGE: &str = "#ff8000";
const BLUE: &str = "#6040ff";
const LIGHT_BLUE: &str = "#0080ff";
const GREEN: &str = "#00ff00";
const YELLOW: &str = "#ffff00";
const DARK_YELLOW: &str = "#bfff00";
const PURPLE: &str = "#8000ff";
const PINK: &str = "#ff00ff";
const BROWN: &str = "#804000";
const CYAN: &str = "#00ffff";
const DARK_GRAY: &str = "#404040";
const DARK_GREEN: &str = "#008040";
const LIGHT_RED: &str = "#ff8080";
const DARK_RED: &str = "#800000";
const LIGHT_PURPLE: &str = "#ff80ff";
const NAVY: &str = "#0000ff";

/// Mathlib top-level namespaces, their color and base vertical level.
///
/// Order is significant: the first matching prefix wins.
const MATHLIB_TOPICS: &[(&str, &str, f64)] = &[
    ("Tactic", "#404080", 90.0),
    ("InformationTheory", PURPLE, 132.0),
    ("Combinatorics", DARK_RED, 130.0),
    ("GroupTheory", "#ff2040", 120.0),
    ("FieldTheory", "#ffff80", 125.0),
    ("RingTheory", ORANGE, 115.0),
    ("RepresentationTheory", RED, 107.0),
    ("Algebra", YELLOW, 100.0),
    ("Init", DARK_GREEN, 90.0),
    ("NumberTheory", DARK_RED, 90.0),
    ("LinearAlgebra", GREEN, 82.0),
    ("Order", BROWN, 85.0),
    ("Logic", LIGHT_BLUE, 75.0),
    ("SetTheory", LIGHT_RED, 80.0),
    ("Data", DARK_GRAY, 80.0),
    ("AlgebraicGeometry", BLUE, 80.0),
    ("Computability", DARK_YELLOW, 75.0),
    ("ModelTheory", BLUE, 110.0),
    ("Geometry", LIGHT_PURPLE, 70.0),
    ("CategoryTheory", "#80a0ff", 62.0),
    ("Analysis", CYAN, 57.0),
    ("AlgebraicTopology", BLUE, 48.0),
    ("Condensed", RED, 48.0),
    ("Topology", PINK, 40.0),
    ("MeasureTheory", PURPLE, 30.0),
    ("Dynamics", DARK_GREEN, 25.0),
    ("Probability", NAVY, 20.0),
    ("Lean", "#202020", 80.0),
];

// ─── GroupRule ───────────────────────────────────────────────────────────────

/// One classification rule: ids under `<root>.<prefix>` get this color and level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRule {
    pub prefix: String,
    pub color: String,
    pub level: f64,
}

impl GroupRule {
    pub fn new(prefix: impl Into<String>, color: impl Into<String>, level: f64) -> Self {
        Self {
            prefix: prefix.into(),
            color: color.into(),
            level,
        }
    }
}

// ─── DegeneratePolicy ────────────────────────────────────────────────────────

/// What to do when every node has the same popularity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Give every node the minimum radius.
    #[default]
    Fallback,
    /// Abort with `LayoutError::DegenerateRange`.
    Strict,
}

// ─── LayoutConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// First id segment required for a rule to match (e.g. "Mathlib").
    pub root_token: String,
    /// Id segment separator.
    pub separator: String,
    /// Ordered classification rules.
    pub groups: Vec<GroupRule>,
    pub default_color: String,
    pub default_level: f64,
    /// Power applied to ancestor counts for the horizontal axis.
    pub horizontal_exponent: f64,
    /// Number of distinct horizontal positions zero-ancestor nodes cycle through.
    pub spread_window: u32,
    /// Number of vertical levels tracked per bucket.
    pub slot_window: usize,
    pub min_radius: f64,
    pub radius_span: f64,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_token: "Mathlib".to_string(),
            separator: ".".to_string(),
            groups: MATHLIB_TOPICS
                .iter()
                .map(|&(prefix, color, level)| GroupRule::new(prefix, color, level))
                .collect(),
            default_color: "#202020".to_string(),
            default_level: 140.0,
            horizontal_exponent: 0.72,
            spread_window: 10,
            slot_window: 300,
            min_radius: 0.2,
            radius_span: 3.0,
            degenerate_policy: DegeneratePolicy::Fallback,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject settings the layout passes cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(LayoutError::Config("separator must not be empty".into()));
        }
        if self.spread_window == 0 {
            return Err(LayoutError::Config("spreadWindow must be at least 1".into()));
        }
        if self.slot_window == 0 {
            return Err(LayoutError::Config("slotWindow must be at least 1".into()));
        }
        if !(self.horizontal_exponent.is_finite() && self.horizontal_exponent > 0.0) {
            return Err(LayoutError::Config(format!(
                "horizontalExponent must be positive, got {}",
                self.horizontal_exponent
            )));
        }
        if !(self.min_radius.is_finite() && self.radius_span.is_finite() && self.radius_span >= 0.0)
        {
            return Err(LayoutError::Config(format!(
                "radius range [{}, +{}] is invalid",
                self.min_radius, self.radius_span
            )));
        }
        let levels = self
            .groups
            .iter()
            .map(|g| (g.prefix.as_str(), g.level))
            .chain(std::iter::once(("<default>", self.default_level)));
        for (prefix, level) in levels {
            if !level.is_finite() || level < 0.0 || level >= self.slot_window as f64 {
                return Err(LayoutError::Config(format!(
                    "level {level} of group '{prefix}' lies outside the slot window [0, {})",
                    self.slot_window
                )));
            }
        }
        Ok(())
    }
}

/// Load a configuration file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: LayoutConfig = serde_json::from_str(&contents)
        .map_err(|e| LayoutError::Config(format!("{}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
