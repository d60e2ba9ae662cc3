//! Intermediate schema tree and its JSON-like text rendering.

use apiref_core::Indent;
use serde_json::Value;

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A described payload shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A literal JSON value, usually a `"<type>"` placeholder string.
    Scalar(Value),
    /// An object with fields in declaration order.
    Object(Vec<(String, Schema)>),
    /// An array; described sequences hold a single element schema.
    Array(Vec<Schema>),
}

impl Schema {
    /// A `"<name>"` placeholder.
    pub fn placeholder(name: &str) -> Self {
        Self::Scalar(Value::String(format!("<{}>", name)))
    }

    /// A literal string.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Scalar(Value::String(s.into()))
    }

    /// Convert a fixed schema fragment, keeping object key order.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_value(v)))
                    .collect(),
            ),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_value).collect()),
            scalar => Self::Scalar(scalar.clone()),
        }
    }

    /// Render with one `indent` unit per nesting level.
    pub fn render(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build().trim_end_matches('\n').to_string()
    }

    fn fragment(&self, lead: &str, trailer: &str) -> CodeFragment {
        match self {
            Schema::Scalar(value) => CodeFragment::line(format!("{lead}{value}{trailer}")),
            Schema::Object(fields) if fields.is_empty() => {
                CodeFragment::line(format!("{lead}{{}}{trailer}"))
            }
            Schema::Array(items) if items.is_empty() => {
                CodeFragment::line(format!("{lead}[]{trailer}"))
            }
            Schema::Object(fields) => {
                let last = fields.len() - 1;
                let body = fields
                    .iter()
                    .enumerate()
                    .map(|(i, (key, value))| {
                        let key = Value::String(key.clone());
                        value.fragment(&format!("{key}: "), separator(i, last))
                    })
                    .collect();
                CodeFragment::block(format!("{lead}{{"), body, Some(format!("}}{trailer}")))
            }
            Schema::Array(items) => {
                let last = items.len() - 1;
                let body = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| item.fragment("", separator(i, last)))
                    .collect();
                CodeFragment::block(format!("{lead}["), body, Some(format!("]{trailer}")))
            }
        }
    }
}

fn separator(index: usize, last: usize) -> &'static str {
    if index == last { "" } else { "," }
}

impl Renderable for Schema {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.fragment("", "")]
    }
}
