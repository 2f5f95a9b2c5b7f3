//! Stream metadata builder
//!
//! Derives the catalog metadata of a stream from its registry definition and
//! its JSON schema.

use crate::error::Result;
use crate::metadata::{
    get_standard_metadata, to_list, to_map, Breadcrumb, MetadataEntry, StandardMetadataOptions,
    PARENT_TAP_STREAM_ID,
};
use crate::registry::StreamRegistry;
use crate::types::{JsonValue, ReplicationMethod};
use tracing::debug;

/// Generates metadata for streams of one registry
///
/// Holds only a shared borrow of the registry, so a builder can be copied
/// freely and used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct MetadataBuilder<'r> {
    registry: &'r StreamRegistry,
}

impl<'r> MetadataBuilder<'r> {
    /// Create a builder over a registry
    pub fn new(registry: &'r StreamRegistry) -> Self {
        Self { registry }
    }

    /// The registry this builder reads from
    pub fn registry(&self) -> &'r StreamRegistry {
        self.registry
    }

    /// Key properties of a stream
    ///
    /// Returns `None` rather than an empty slice when the stream declares no
    /// key properties, so that `table-key-properties` is left out entirely.
    pub fn get_key_properties(&self, stream_id: &str) -> Result<Option<&'r [String]>> {
        let def = self.registry.get(stream_id)?;

        if def.key_properties.is_empty() {
            return Ok(None);
        }
        Ok(Some(def.key_properties.as_slice()))
    }

    /// Default replication method of a stream
    pub fn get_replication_method(&self, stream_id: &str) -> Result<Option<ReplicationMethod>> {
        Ok(self.registry.get(stream_id)?.replication_method)
    }

    /// Default replication key of a stream
    pub fn get_replication_key(&self, stream_id: &str) -> Result<Option<&'r str>> {
        Ok(self.registry.get(stream_id)?.replication_key.as_deref())
    }

    /// Generate a stream's default metadata
    ///
    /// Standard metadata for the schema, plus `parent-tap-stream-id` on the
    /// table-level entry of substreams.
    pub fn get_stream_metadata(
        &self,
        stream_id: &str,
        schema: &JsonValue,
    ) -> Result<Vec<MetadataEntry>> {
        let def = self.registry.get(stream_id)?;

        let entries = get_standard_metadata(
            stream_id,
            schema,
            &StandardMetadataOptions {
                schema_name: None,
                key_properties: self.get_key_properties(stream_id)?,
                valid_replication_keys: &def.valid_replication_keys,
                replication_method: self.get_replication_method(stream_id)?,
            },
        )?;

        let mut mdata = to_map(entries);
        if let Some(parent) = def.parent() {
            debug!(stream = %stream_id, parent = %parent, "Writing parent stream metadata");
            mdata.write(&Breadcrumb::table(), PARENT_TAP_STREAM_ID, parent);
        }
        let entries = to_list(mdata);

        debug!(
            stream = %stream_id,
            entries = entries.len(),
            "Generated stream metadata"
        );
        Ok(entries)
    }
}
