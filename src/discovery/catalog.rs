//! Discovery catalog
//!
//! Assembles catalog entries for a set of stream schemas.

use super::builder::MetadataBuilder;
use crate::error::{Error, Result, ResultExt};
use crate::metadata::{to_map, Breadcrumb, MetadataEntry, SELECTED};
use crate::registry::StreamRegistry;
use crate::types::{JsonValue, ReplicationMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

// ============================================================================
// Catalog Types
// ============================================================================

/// Discovered catalog (available streams)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Available streams
    pub streams: Vec<CatalogEntry>,
}

/// Stream in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stream identifier
    pub tap_stream_id: String,

    /// Stream name
    pub stream: String,

    /// JSON schema for the stream
    pub schema: JsonValue,

    /// Key properties, absent when the stream declares none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_properties: Option<Vec<String>>,

    /// Stream metadata
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,

    /// Default replication key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key: Option<String>,

    /// Default replication method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_method: Option<ReplicationMethod>,
}

impl CatalogEntry {
    /// Whether the table-level metadata marks the stream as selected
    pub fn is_selected(&self) -> bool {
        to_map(self.metadata.iter().cloned())
            .get(&Breadcrumb::table(), SELECTED)
            .and_then(JsonValue::as_bool)
            .unwrap_or(false)
    }
}

impl Catalog {
    /// Build a catalog entry for every schema
    ///
    /// Entries follow the order of `schemas`. A schema for a stream the
    /// registry does not know fails the whole discovery.
    pub fn discover(
        builder: &MetadataBuilder<'_>,
        schemas: &BTreeMap<String, JsonValue>,
    ) -> Result<Self> {
        let mut streams = Vec::with_capacity(schemas.len());

        for (stream_id, schema) in schemas {
            streams.push(CatalogEntry {
                tap_stream_id: stream_id.clone(),
                stream: stream_id.clone(),
                schema: schema.clone(),
                key_properties: builder.get_key_properties(stream_id)?.map(<[String]>::to_vec),
                metadata: builder.get_stream_metadata(stream_id, schema)?,
                replication_key: builder.get_replication_key(stream_id)?.map(str::to_string),
                replication_method: builder.get_replication_method(stream_id)?,
            });
        }

        info!(
            registry = %builder.registry().name(),
            streams = streams.len(),
            "Discovered catalog"
        );
        Ok(Self { streams })
    }

    /// Find a stream by identifier
    pub fn get_stream(&self, tap_stream_id: &str) -> Option<&CatalogEntry> {
        self.streams
            .iter()
            .find(|entry| entry.tap_stream_id == tap_stream_id)
    }

    /// Streams marked as selected
    pub fn selected_streams(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.streams.iter().filter(|entry| entry.is_selected())
    }

    /// Reject selected substreams whose parent stream is not selected
    ///
    /// Substream records are only produced while syncing the parent.
    pub fn check_dependency_conflicts(&self, registry: &StreamRegistry) -> Result<()> {
        for entry in self.selected_streams() {
            let def = registry.get(&entry.tap_stream_id)?;
            let Some(parent) = def.parent() else {
                continue;
            };

            let parent_selected = self
                .get_stream(parent)
                .is_some_and(CatalogEntry::is_selected);
            if !parent_selected {
                return Err(Error::dependency_conflict(&entry.tap_stream_id, parent));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Schema Loading
// ============================================================================

/// Load stream schemas from a directory of `<stream>.json` files
///
/// Keys are the file stems. Files with other extensions are skipped.
pub fn load_schemas(dir: impl AsRef<Path>) -> Result<BTreeMap<String, JsonValue>> {
    let dir = dir.as_ref();
    let mut schemas = BTreeMap::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read schema directory '{}'", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let stem = path.file_stem().and_then(|s| s.to_str());
        let (true, Some(stream_id)) = (is_json, stem) else {
            warn!(path = %path.display(), "Skipping non-schema file");
            continue;
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read schema '{}'", path.display()))?;
        let schema: JsonValue = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse schema '{}'", path.display()))?;

        schemas.insert(stream_id.to_string(), schema);
    }

    Ok(schemas)
}
