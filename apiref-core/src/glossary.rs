//! Type-override registry.
//!
//! Well-known domain value types (content identifiers, multiaddrs, peer
//! identifiers) serialize as opaque strings or small fixed objects. The
//! [`Glossary`] maps their stable type identifiers to a fixed rendering so
//! they are never expanded field by field.

use indexmap::IndexMap;
use serde_json::{Value, json};

/// Fixed rendering for an overridden type.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    /// Render as a single `"<name>"` placeholder.
    Name(String),
    /// Render this schema fragment verbatim.
    Schema(Value),
}

/// Registry of type overrides keyed by type identifier.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: IndexMap<String, Override>,
}

impl Glossary {
    /// Content identifier.
    pub const CID: &'static str = "Cid";
    /// Network multi-address.
    pub const MULTIADDR: &'static str = "Multiaddr";
    /// Network peer identifier.
    pub const PEER_ID: &'static str = "PeerId";
    /// Peer identifier plus its known addresses.
    pub const PEER_INFO: &'static str = "PeerInfo";

    /// An empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The overrides every node catalog needs.
    pub fn standard() -> Self {
        Self::new()
            .with_schema(Self::CID, json!({ "/": "<cid-string>" }))
            .with_name(Self::MULTIADDR, "multiaddr-string")
            .with_name(Self::PEER_ID, "peer-id")
            .with_schema(
                Self::PEER_INFO,
                json!({ "ID": "peer-id", "Addrs": ["<multiaddr-string>"] }),
            )
    }

    /// Render `type_id` as the `"<name>"` placeholder.
    pub fn with_name(mut self, type_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(type_id, Override::Name(name.into()));
        self
    }

    /// Render `type_id` as the given schema fragment.
    pub fn with_schema(mut self, type_id: impl Into<String>, schema: Value) -> Self {
        self.insert(type_id, Override::Schema(schema));
        self
    }

    /// Register an override, returning the one it replaced.
    pub fn insert(&mut self, type_id: impl Into<String>, entry: Override) -> Option<Override> {
        self.entries.insert(type_id.into(), entry)
    }

    pub fn get(&self, type_id: &str) -> Option<&Override> {
        self.entries.get(type_id)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.entries.contains_key(type_id)
    }

    /// Iterate overrides in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Override)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
