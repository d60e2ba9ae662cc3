//! Explicit descriptions of response payload types.
//!
//! A payload is described by a [`TypeRef`]. Records are not inlined into
//! the reference; they live in a [`TypeTable`] and are referenced by name,
//! which lets a record contain itself (directly or through other records).

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

/// Scalar payload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    String,
    Bytes,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Any,
}

impl Primitive {
    const ALL: [Primitive; 16] = [
        Primitive::Bool,
        Primitive::String,
        Primitive::Bytes,
        Primitive::Int,
        Primitive::Int8,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::Uint,
        Primitive::Uint8,
        Primitive::Uint16,
        Primitive::Uint32,
        Primitive::Uint64,
        Primitive::Float32,
        Primitive::Float64,
        Primitive::Any,
    ];

    /// Get the type name used in schemas and manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::String => "string",
            Primitive::Bytes => "bytes",
            Primitive::Int => "int",
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Uint => "uint",
            Primitive::Uint8 => "uint8",
            Primitive::Uint16 => "uint16",
            Primitive::Uint32 => "uint32",
            Primitive::Uint64 => "uint64",
            Primitive::Float32 => "float32",
            Primitive::Float64 => "float64",
            Primitive::Any => "any",
        }
    }

    /// Look up a primitive by its type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Returns true if values of this type can key a JSON object.
    pub fn is_map_key(&self) -> bool {
        matches!(
            self,
            Primitive::String
                | Primitive::Int
                | Primitive::Int8
                | Primitive::Int16
                | Primitive::Int32
                | Primitive::Int64
                | Primitive::Uint
                | Primitive::Uint8
                | Primitive::Uint16
                | Primitive::Uint32
                | Primitive::Uint64
        )
    }
}

/// A reference to a payload type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A scalar.
    Primitive(Primitive),
    /// A type identified by a stable name (a glossary entry or a record).
    Named(String),
    /// A sequence of elements.
    Sequence(Box<TypeRef>),
    /// A JSON object keyed by `key` values.
    Map { key: Box<TypeRef>, value: Box<TypeRef> },
    /// A nullable indirection to the inner type.
    Optional(Box<TypeRef>),
}

impl TypeRef {
    pub fn primitive(p: Primitive) -> Self {
        Self::Primitive(p)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn sequence(elem: TypeRef) -> Self {
        Self::Sequence(Box::new(elem))
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Shorthand for `TypeRef::Primitive(Primitive::String)`.
    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.as_str()),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Sequence(elem) => write!(f, "[{}]", elem),
            TypeRef::Map { key, value } => write!(f, "map[{}]{}", key, value),
            TypeRef::Optional(inner) => write!(f, "*{}", inner),
        }
    }
}

/// Error returned when a type notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTypeError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for ParseTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseTypeError {}

/// Parses the compact notation used in manifests:
///
/// ```text
/// string          primitive
/// Cid             named type
/// [T]  or  []T    sequence
/// map[K]V         map
/// *T   or  T?     optional
/// ```
impl FromStr for TypeRef {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseTypeError {
            input: s.to_string(),
            reason,
        };
        let s = s.trim();

        if s.is_empty() {
            return Err(err("empty type"));
        }
        if let Some(inner) = s.strip_suffix('?') {
            return Ok(TypeRef::optional(inner.parse()?));
        }
        if let Some(inner) = s.strip_prefix('*') {
            return Ok(TypeRef::optional(inner.parse()?));
        }
        if let Some(elem) = s.strip_prefix("[]") {
            return Ok(TypeRef::sequence(elem.parse()?));
        }
        if let Some(rest) = s.strip_prefix("map[") {
            let close = matching_bracket(rest).ok_or_else(|| err("unclosed map key"))?;
            let key = rest[..close].parse()?;
            let value = rest[close + 1..].parse()?;
            return Ok(TypeRef::map(key, value));
        }
        if let Some(rest) = s.strip_prefix('[') {
            let close = matching_bracket(rest).ok_or_else(|| err("unclosed sequence"))?;
            if close != rest.len() - 1 {
                return Err(err("trailing characters after sequence"));
            }
            return Ok(TypeRef::sequence(rest[..close].parse()?));
        }
        if let Some(p) = Primitive::from_name(s) {
            return Ok(TypeRef::Primitive(p));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
        {
            return Err(err("type names may only contain letters, digits, '_', '.', ':' and '-'"));
        }
        Ok(TypeRef::Named(s.to_string()))
    }
}

/// Index of the `]` closing a bracket that was opened just before `s`.
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// A named field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
}

/// A record type with fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
        });
        self
    }
}

/// Registry of record definitions keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    records: IndexMap<String, RecordDef>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record, returning the definition it replaced.
    pub fn insert(&mut self, record: RecordDef) -> Option<RecordDef> {
        self.records.insert(record.name.clone(), record)
    }

    /// Builder form of [`TypeTable::insert`].
    pub fn with(mut self, record: RecordDef) -> Self {
        self.insert(record);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RecordDef> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterate records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordDef> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
