//! Response schema description.
//!
//! The [`Describer`] turns a [`TypeRef`] into the schema text shown for an
//! endpoint's response. Glossary overrides are consulted before records, so
//! an overridden type is never expanded field by field. Composite types at
//! the configured maximum depth render as [`TRUNCATED`], which bounds the
//! output for records that contain themselves.

use apiref_core::{Api, Glossary, Indent, Override, TypeRef, TypeTable};
use miette::Diagnostic;
use thiserror::Error;

use crate::{Config, Schema};

/// Description of an endpoint without a structured response type.
pub const PLAIN_TEXT_RESPONSE: &str = "This endpoint returns a plain-text response body.";

/// Placeholder emitted instead of descending past the maximum depth.
pub const TRUNCATED: &str = "...";

/// A payload type that cannot be described.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DescribeError {
    #[error("unknown type '{name}'")]
    #[diagnostic(
        code(apiref::unknown_type),
        help("define a record named '{name}' or add a glossary override for it")
    )]
    UnknownType { name: String },

    #[error("unsupported map key type '{key}' in '{map}'")]
    #[diagnostic(
        code(apiref::unsupported_map_key),
        help("map keys must be strings, integers or glossary names")
    )]
    UnsupportedMapKey { key: String, map: String },
}

/// Renders payload types as schema text.
#[derive(Debug, Clone)]
pub struct Describer<'a> {
    types: &'a TypeTable,
    glossary: &'a Glossary,
    indent: Indent,
    max_depth: usize,
}

impl<'a> Describer<'a> {
    pub fn new(types: &'a TypeTable, glossary: &'a Glossary) -> Self {
        Self {
            types,
            glossary,
            indent: Indent::SCHEMA,
            max_depth: Config::DEFAULT_MAX_DEPTH,
        }
    }

    /// A describer over `api`'s registries, using `config`'s layout settings.
    pub fn for_api(api: &'a Api, config: &Config) -> Self {
        Self::new(&api.types, &api.glossary)
            .indent(config.indent)
            .max_depth(config.max_depth)
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The description used when no response type is declared.
    pub fn describe_none(&self) -> &'static str {
        PLAIN_TEXT_RESPONSE
    }

    /// Describe an optional response type.
    pub fn describe_response(&self, ty: Option<&TypeRef>) -> Result<String, DescribeError> {
        match ty {
            Some(ty) => self.describe(ty),
            None => Ok(self.describe_none().to_string()),
        }
    }

    /// Describe a response type as rendered schema text.
    pub fn describe(&self, ty: &TypeRef) -> Result<String, DescribeError> {
        Ok(self.schema(ty)?.render(self.indent))
    }

    /// Describe a response type as a schema tree.
    pub fn schema(&self, ty: &TypeRef) -> Result<Schema, DescribeError> {
        self.schema_at(ty, 0)
    }

    fn schema_at(&self, ty: &TypeRef, depth: usize) -> Result<Schema, DescribeError> {
        match ty {
            TypeRef::Primitive(p) => Ok(Schema::placeholder(p.as_str())),
            TypeRef::Optional(inner) => self.schema_at(inner, depth),
            TypeRef::Named(name) => {
                if let Some(entry) = self.glossary.get(name) {
                    return Ok(override_schema(entry));
                }
                let record = self
                    .types
                    .get(name)
                    .ok_or_else(|| DescribeError::UnknownType { name: name.clone() })?;
                if depth >= self.max_depth {
                    return Ok(Schema::text(TRUNCATED));
                }
                let fields = record
                    .fields
                    .iter()
                    .map(|field| -> Result<(String, Schema), DescribeError> {
                        Ok((field.name.clone(), self.schema_at(&field.ty, depth + 1)?))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Schema::Object(fields))
            }
            TypeRef::Sequence(elem) => {
                if depth >= self.max_depth {
                    return Ok(Schema::text(TRUNCATED));
                }
                Ok(Schema::Array(vec![self.schema_at(elem, depth + 1)?]))
            }
            TypeRef::Map { key, value } => {
                let key_name = self.map_key_name(key).ok_or_else(|| {
                    DescribeError::UnsupportedMapKey {
                        key: key.to_string(),
                        map: ty.to_string(),
                    }
                })?;
                if depth >= self.max_depth {
                    return Ok(Schema::text(TRUNCATED));
                }
                let value = self.schema_at(value, depth + 1)?;
                Ok(Schema::Object(vec![(format!("<{}>", key_name), value)]))
            }
        }
    }

    /// Placeholder name for a map key, if the key type can key a JSON object.
    fn map_key_name<'t>(&'t self, key: &'t TypeRef) -> Option<&'t str> {
        match key {
            TypeRef::Primitive(p) if p.is_map_key() => Some(p.as_str()),
            TypeRef::Named(name) => match self.glossary.get(name) {
                Some(Override::Name(display)) => Some(display.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

fn override_schema(entry: &Override) -> Schema {
    match entry {
        Override::Name(name) => Schema::placeholder(name),
        Override::Schema(value) => Schema::from_value(value),
    }
}

/// Describe `ty` with the standard glossary and default layout.
pub fn describe(types: &TypeTable, ty: &TypeRef) -> Result<String, DescribeError> {
    let glossary = Glossary::standard();
    Describer::new(types, &glossary).describe(ty)
}

#[cfg(test)]
mod tests {
    use apiref_core::{Primitive, RecordDef};
    use serde_json::json;

    use super::*;

    fn standard() -> Glossary {
        Glossary::standard()
    }

    #[test]
    fn test_describe_none_is_plain_text_sentinel() {
        let types = TypeTable::new();
        let glossary = standard();
        let describer = Describer::new(&types, &glossary);
        assert_eq!(
            describer.describe_response(None).unwrap(),
            "This endpoint returns a plain-text response body."
        );
    }

    #[test]
    fn test_describe_primitive() {
        let types = TypeTable::new();
        assert_eq!(
            describe(&types, &TypeRef::Primitive(Primitive::Uint64)).unwrap(),
            "\"<uint64>\""
        );
    }

    #[test]
    fn test_describe_record_in_field_order() {
        let types = TypeTable::new().with(
            RecordDef::new("Object")
                .field("Hash", TypeRef::string())
                .field("Size", TypeRef::Primitive(Primitive::Uint64))
                .field("Links", TypeRef::sequence(TypeRef::named("Object"))),
        );
        let glossary = standard();
        let describer = Describer::new(&types, &glossary).max_depth(2);

        assert_eq!(
            describer.describe(&TypeRef::named("Object")).unwrap(),
            "{\n    \"Hash\": \"<string>\",\n    \"Size\": \"<uint64>\",\n    \"Links\": [\n        \"...\"\n    ]\n}"
        );
    }

    #[test]
    fn test_glossary_takes_precedence_over_records() {
        let types = TypeTable::new().with(
            RecordDef::new(Glossary::PEER_INFO)
                .field("Secret", TypeRef::string()),
        );
        let glossary = standard();
        let describer = Describer::new(&types, &glossary);

        assert_eq!(
            describer.schema(&TypeRef::named("PeerInfo")).unwrap(),
            Schema::from_value(&json!({ "ID": "peer-id", "Addrs": ["<multiaddr-string>"] }))
        );
    }

    #[test]
    fn test_named_override_is_opaque_token() {
        let types = TypeTable::new();
        let glossary = standard();
        let describer = Describer::new(&types, &glossary);

        assert_eq!(
            describer.describe(&TypeRef::named("Multiaddr")).unwrap(),
            "\"<multiaddr-string>\""
        );
        assert_eq!(
            describer.describe(&TypeRef::named("PeerId")).unwrap(),
            "\"<peer-id>\""
        );
    }

    #[test]
    fn test_sequence_of_cid() {
        let types = TypeTable::new();
        assert_eq!(
            describe(&types, &TypeRef::sequence(TypeRef::named("Cid"))).unwrap(),
            "[\n    {\n        \"/\": \"<cid-string>\"\n    }\n]"
        );
    }

    #[test]
    fn test_optional_describes_inner_type() {
        let types = TypeTable::new();
        assert_eq!(
            describe(&types, &TypeRef::optional(TypeRef::string())).unwrap(),
            describe(&types, &TypeRef::string()).unwrap()
        );
    }

    #[test]
    fn test_map_keys() {
        let types = TypeTable::new();
        let glossary = standard();
        let describer = Describer::new(&types, &glossary);

        let by_peer = TypeRef::map(TypeRef::named("PeerId"), TypeRef::Primitive(Primitive::Int64));
        assert_eq!(
            describer.describe(&by_peer).unwrap(),
            "{\n    \"<peer-id>\": \"<int64>\"\n}"
        );

        let by_bool = TypeRef::map(TypeRef::Primitive(Primitive::Bool), TypeRef::string());
        assert_eq!(
            describer.describe(&by_bool),
            Err(DescribeError::UnsupportedMapKey {
                key: "bool".into(),
                map: "map[bool]string".into(),
            })
        );
    }

    #[test]
    fn test_unknown_type_fails() {
        let types = TypeTable::new().with(
            RecordDef::new("Wrapper").field("Inner", TypeRef::named("Missing")),
        );
        assert_eq!(
            describe(&types, &TypeRef::named("Wrapper")),
            Err(DescribeError::UnknownType {
                name: "Missing".into()
            })
        );
    }

    #[test]
    fn test_self_reference_truncates_at_max_depth() {
        let types =
            TypeTable::new().with(RecordDef::new("Node").field("Next", TypeRef::named("Node")));
        let glossary = standard();

        for max_depth in [0, 1, 3, 20] {
            let schema = Describer::new(&types, &glossary)
                .max_depth(max_depth)
                .schema(&TypeRef::named("Node"))
                .unwrap();

            let mut levels = 0;
            let mut current = &schema;
            while let Schema::Object(fields) = current {
                levels += 1;
                current = &fields[0].1;
            }
            assert_eq!(levels, max_depth, "max depth {max_depth}");
            assert_eq!(current, &Schema::text(TRUNCATED));
        }
    }

    #[test]
    fn test_mutual_recursion_terminates() {
        let types = TypeTable::new()
            .with(RecordDef::new("A").field("B", TypeRef::named("B")))
            .with(RecordDef::new("B").field("A", TypeRef::sequence(TypeRef::named("A"))));
        let glossary = standard();
        let text = Describer::new(&types, &glossary)
            .max_depth(4)
            .describe(&TypeRef::named("A"))
            .unwrap();

        assert!(text.contains("\"...\""));
    }
}
