//! `[types.*]` and `[glossary]` tables.

use apiref_core::{FieldDef, Override, RecordDef, TypeRef};
use serde::{Deserialize, Deserializer, de};

use crate::{Result, validate::ParseContext};

/// A record type declared under `[types.<Name>]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

/// One record field, in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type", deserialize_with = "deserialize_type")]
    pub ty: TypeRef,
}

fn deserialize_type<'de, D>(deserializer: D) -> std::result::Result<TypeRef, D::Error>
where
    D: Deserializer<'de>,
{
    let notation = String::deserialize(deserializer)?;
    notation.parse().map_err(de::Error::custom)
}

impl TypeDef {
    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for field in &self.fields {
            ctx.validate_name(&field.name, "field")?;
        }
        ctx.validate_unique(self.fields.iter().map(|f| f.name.as_str()), "field")
    }

    pub fn to_record(&self, name: &str) -> RecordDef {
        RecordDef {
            name: name.to_string(),
            fields: self
                .fields
                .iter()
                .map(|f| FieldDef {
                    name: f.name.clone(),
                    ty: f.ty.clone(),
                })
                .collect(),
        }
    }
}

/// A `[glossary]` entry: exactly one of `name` or `schema`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlossaryEntry {
    /// Render as the `"<name>"` placeholder.
    pub name: Option<String>,
    /// Render this fragment verbatim.
    pub schema: Option<toml::Value>,
}

impl GlossaryEntry {
    pub(crate) fn validate(&self, type_id: &str, ctx: &ParseContext<'_>) -> Result<()> {
        match (&self.name, &self.schema) {
            (Some(name), None) => ctx.validate_name(name, "glossary entry"),
            (None, Some(_)) => Ok(()),
            _ => Err(ctx.error(
                format!(
                    "glossary entry '{}' must set exactly one of 'name' or 'schema'",
                    type_id
                ),
                Some(type_id),
            )),
        }
    }

    /// The override this entry declares. Call after validation.
    pub fn to_override(&self) -> Override {
        match (&self.name, &self.schema) {
            (Some(name), _) => Override::Name(name.clone()),
            (None, Some(schema)) => Override::Schema(toml_to_json(schema)),
            (None, None) => Override::Schema(serde_json::Value::Null),
        }
    }
}

/// Convert a TOML value to JSON, keeping table key order.
fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Value::from(*f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => items.iter().map(toml_to_json).collect(),
        toml::Value::Table(table) => table
            .iter()
            .map(|(k, v)| (k.clone(), toml_to_json(v)))
            .collect::<serde_json::Map<_, _>>()
            .into(),
    }
}
