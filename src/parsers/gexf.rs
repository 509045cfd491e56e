//! GEXF graph descriptions.
//!
//! Only the parts the layout needs are read: every `<node id="...">` with the
//! value of its first nested `<attvalue>` as the weight, and every
//! `<edge source="..." target="...">`. Everything else (attribute
//! declarations, viz extensions, labels) is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Parser;
use crate::error::{LayoutError, Result};
use crate::syntax::types::{EdgeSpec, GraphInput, NodeSpec};

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static NODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<node\b([^>]*?)(?:/>|>(.*?)</node\s*>)").unwrap());
static EDGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<edge\b([^>]*?)/?>").unwrap());
static ATTVALUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<attvalue\b([^>]*?)/?>").unwrap());
static ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z_:][\w:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Value of attribute `name` in an element's attribute text, unescaped.
fn attribute(attrs: &str, name: &str) -> Option<String> {
    ATTR_RE.captures_iter(attrs).find_map(|cap| {
        (&cap[1] == name).then(|| {
            let raw = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
            unescape(raw)
        })
    })
}

/// Resolve the predefined XML entities and numeric character references.
fn unescape(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                .and_then(|code| code.ok())
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => out.push(c),
            None => out.push_str(&tail[..=semi]),
        }
        rest = &tail[semi + 1..];
    }
    out.push_str(rest);
    out
}

fn parse_error(details: String) -> LayoutError {
    LayoutError::Parse {
        format: "GEXF",
        details,
    }
}

pub struct GexfParser;

impl Parser for GexfParser {
    fn parse(&self, src: &str) -> Result<GraphInput> {
        let src = COMMENT_RE.replace_all(src, "");
        if !src.contains("<gexf") {
            return Err(parse_error("missing <gexf> root element".to_string()));
        }

        let mut input = GraphInput::new();
        for cap in NODE_RE.captures_iter(&src) {
            let attrs = &cap[1];
            let id = attribute(attrs, "id")
                .ok_or_else(|| parse_error(format!("<node{attrs}> has no id attribute")))?;
            let body = cap.get(2).map_or("", |m| m.as_str());
            let value = ATTVALUE_RE
                .captures(body)
                .and_then(|att| attribute(&att[1], "value"));
            let Some(value) = value else {
                return Err(LayoutError::MissingWeight { node: id });
            };
            let weight: f64 = value.trim().parse().map_err(|_| {
                parse_error(format!("node '{id}' has non-numeric weight '{value}'"))
            })?;
            input.nodes.push(NodeSpec::new(id, weight));
        }

        for cap in EDGE_RE.captures_iter(&src) {
            let attrs = &cap[1];
            let source = attribute(attrs, "source");
            let target = attribute(attrs, "target");
            let (Some(source), Some(target)) = (source, target) else {
                return Err(parse_error(format!(
                    "<edge{attrs}> needs both source and target"
                )));
            };
            input.edges.push(EdgeSpec::new(source, target));
        }

        Ok(input)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_gexf.rs"]
mod tests;
