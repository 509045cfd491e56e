//! Topic classification of module ids.
//!
//! Rules are scanned in order and the first whose prefix equals the second
//! id segment wins; ids outside the root namespace fall to the default group.

use crate::config::{GroupRule, LayoutConfig};

/// Group label, color and base vertical level assigned to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<'a> {
    /// Rule prefix, or "" for the default group.
    pub label: &'a str,
    pub color: &'a str,
    pub level: f64,
}

impl<'a> From<&'a GroupRule> for Group<'a> {
    fn from(rule: &'a GroupRule) -> Self {
        Self {
            label: &rule.prefix,
            color: &rule.color,
            level: rule.level,
        }
    }
}

/// Classifies ids against a config's rule table.
pub struct Classifier<'a> {
    root: &'a str,
    separator: &'a str,
    rules: &'a [GroupRule],
    fallback: Group<'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            root: &config.root_token,
            separator: &config.separator,
            rules: &config.groups,
            fallback: Group {
                label: "",
                color: &config.default_color,
                level: config.default_level,
            },
        }
    }

    pub fn classify(&self, id: &str) -> Group<'a> {
        let mut segments = id.split(self.separator);
        let (Some(first), Some(second)) = (segments.next(), segments.next()) else {
            return self.fallback;
        };
        if first != self.root {
            return self.fallback;
        }
        self.rules
            .iter()
            .find(|rule| rule.prefix == second)
            .map(Group::from)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_classify.rs"]
mod tests;
