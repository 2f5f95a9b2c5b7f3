//! Metadata types
//!
//! Breadcrumbs, list-form entries, and the breadcrumb-keyed map.

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Table-level metadata key holding the stream's key properties
pub const TABLE_KEY_PROPERTIES: &str = "table-key-properties";
/// Table-level metadata key holding the forced replication method
pub const FORCED_REPLICATION_METHOD: &str = "forced-replication-method";
/// Table-level metadata key listing fields usable as replication keys
pub const VALID_REPLICATION_KEYS: &str = "valid-replication-keys";
/// Table-level metadata key naming the parent stream of a substream
pub const PARENT_TAP_STREAM_ID: &str = "parent-tap-stream-id";
/// Table-level metadata key naming the schema
pub const SCHEMA_NAME: &str = "schema-name";
/// Inclusion of a table or field
pub const INCLUSION: &str = "inclusion";
/// Whether the table or field was selected by the user
pub const SELECTED: &str = "selected";

// ============================================================================
// Breadcrumb
// ============================================================================

/// Path identifying what a metadata map describes
///
/// Empty for the stream itself, `["properties", <field>]` for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breadcrumb(Vec<String>);

impl Breadcrumb {
    /// Breadcrumb of the table-level entry
    pub fn table() -> Self {
        Self(Vec::new())
    }

    /// Breadcrumb of a top-level schema property
    pub fn property(name: impl Into<String>) -> Self {
        Self(vec!["properties".to_string(), name.into()])
    }

    /// Whether this addresses the whole stream
    pub fn is_table(&self) -> bool {
        self.0.is_empty()
    }

    /// Field name for a top-level property breadcrumb
    pub fn field_name(&self) -> Option<&str> {
        match self.0.as_slice() {
            [kind, name] if kind == "properties" => Some(name.as_str()),
            _ => None,
        }
    }

    /// Path segments
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Breadcrumb {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

// ============================================================================
// Metadata Entry
// ============================================================================

/// A `(breadcrumb, metadata)` pair, the list form used in catalogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// What this entry describes
    pub breadcrumb: Breadcrumb,
    /// Metadata values
    pub metadata: JsonObject,
}

impl MetadataEntry {
    /// Create an entry
    pub fn new(breadcrumb: Breadcrumb, metadata: JsonObject) -> Self {
        Self {
            breadcrumb,
            metadata,
        }
    }
}

// ============================================================================
// Metadata Map
// ============================================================================

/// Metadata keyed by breadcrumb
///
/// Remembers the order breadcrumbs were first seen so that converting back to
/// a list is stable. The table-level entry is always listed first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataMap {
    order: Vec<Breadcrumb>,
    entries: HashMap<Breadcrumb, JsonObject>,
}

impl MetadataMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from list-form entries
    ///
    /// Repeated breadcrumbs are merged; later values win.
    pub fn from_entries(entries: impl IntoIterator<Item = MetadataEntry>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.entry_mut(entry.breadcrumb).extend(entry.metadata);
        }
        map
    }

    /// Convert back to list form, table-level entry first
    pub fn into_entries(mut self) -> Vec<MetadataEntry> {
        let mut list = Vec::with_capacity(self.order.len());

        if let Some(table) = self.entries.remove(&Breadcrumb::table()) {
            list.push(MetadataEntry::new(Breadcrumb::table(), table));
        }

        for breadcrumb in self.order {
            if let Some(metadata) = self.entries.remove(&breadcrumb) {
                list.push(MetadataEntry::new(breadcrumb, metadata));
            }
        }

        list
    }

    /// Write a value, creating the breadcrumb's entry if needed
    pub fn write(&mut self, breadcrumb: &Breadcrumb, key: &str, value: impl Into<JsonValue>) {
        self.entry_mut(breadcrumb.clone())
            .insert(key.to_string(), value.into());
    }

    /// Read a value
    pub fn get(&self, breadcrumb: &Breadcrumb, key: &str) -> Option<&JsonValue> {
        self.entries.get(breadcrumb)?.get(key)
    }

    /// All metadata for a breadcrumb
    pub fn metadata(&self, breadcrumb: &Breadcrumb) -> Option<&JsonObject> {
        self.entries.get(breadcrumb)
    }

    /// Number of breadcrumbs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map has no breadcrumbs
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entry_mut(&mut self, breadcrumb: Breadcrumb) -> &mut JsonObject {
        if !self.entries.contains_key(&breadcrumb) {
            self.order.push(breadcrumb.clone());
        }
        self.entries.entry(breadcrumb).or_default()
    }
}

/// Convert list-form entries to the keyed form
pub fn to_map(entries: impl IntoIterator<Item = MetadataEntry>) -> MetadataMap {
    MetadataMap::from_entries(entries)
}

/// Convert the keyed form back to list-form entries
pub fn to_list(map: MetadataMap) -> Vec<MetadataEntry> {
    map.into_entries()
}
