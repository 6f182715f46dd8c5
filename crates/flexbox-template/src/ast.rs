use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

// ── Value ─────────────────────────────────────────────────────────────────

/// A raw attribute value as authored in a template.
///
/// Strings may carry an expression (`"${user.name}"`); whether they do is
/// decided at transform time, not here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// `true` / `false`
    Bool(bool),
    /// Numeric literal: `16`, `1.5`, `-3`
    Number(f64),
    /// Any string, including expression text.
    Str(String),
}

impl Value {
    /// Returns the string content if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

// ── AttributeSet ──────────────────────────────────────────────────────────

/// Attribute name → raw value. Keys are unique; order carries no meaning.
pub type AttributeSet = HashMap<String, Value>;

// ── TemplateNode ──────────────────────────────────────────────────────────

/// One element of a compiled template.
///
/// ```json
/// { "type": "Image", "attrs": { "url": "${ctx.src}" }, "children": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateNode {
    /// Component kind tag: `"Flex"`, `"Text"`, `"Image"`, …
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attrs: AttributeSet,
    #[serde(default)]
    pub children: Vec<TemplateNode>,
}

impl TemplateNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), attrs: AttributeSet::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, node: TemplateNode) -> Self {
        self.children.push(node);
        self
    }

    /// Look up a raw attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TemplateNode::len).sum::<usize>()
    }
}
