// File: crates/tschart-core/src/svg.rs
// Summary: Minimal SVG element tree with builder helpers and XML serialization.

use std::fmt::{self, Write};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn child(mut self, el: SvgElement) -> Self {
        self.children.push(SvgNode::Element(el));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    pub fn push(&mut self, el: SvgElement) {
        self.children.push(SvgNode::Element(el));
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn children(&self) -> &[SvgNode] { &self.children }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Concatenated text of direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                SvgNode::Text(t) => Some(t.as_str()),
                SvgNode::Element(_) => None,
            })
            .collect()
    }

    /// Child elements (text nodes skipped).
    pub fn elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|c| match c {
            SvgNode::Element(e) => Some(e),
            SvgNode::Text(_) => None,
        })
    }

    /// All descendants named `name`, depth-first in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a SvgElement> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a SvgElement>) {
        for el in self.elements() {
            if el.name == name {
                out.push(el);
            }
            el.collect_named(name, out);
        }
    }

    fn write_into(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(out, " {}=\"{}\"", k, escape_xml(v))?;
        }
        if self.children.is_empty() {
            return out.write_str("/>");
        }
        out.write_char('>')?;
        for child in &self.children {
            match child {
                SvgNode::Element(e) => e.write_into(out)?,
                SvgNode::Text(t) => out.write_str(&escape_xml(t))?,
            }
        }
        write!(out, "</{}>", self.name)
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_into(&mut s)?;
        f.write_str(&s)
    }
}
