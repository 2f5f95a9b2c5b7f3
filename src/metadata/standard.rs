//! Standard catalog metadata
//!
//! Generates the baseline table-level and field-level entries every stream
//! gets before stream-specific metadata is layered on top.

use super::types::{
    to_list, Breadcrumb, MetadataEntry, MetadataMap, FORCED_REPLICATION_METHOD, INCLUSION,
    SCHEMA_NAME, TABLE_KEY_PROPERTIES, VALID_REPLICATION_KEYS,
};
use crate::error::{Error, Result};
use crate::types::{Inclusion, JsonObject, JsonValue, ReplicationMethod};

/// Inputs for [`get_standard_metadata`] besides the schema
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetadataOptions<'a> {
    /// Written as `schema-name` when set
    pub schema_name: Option<&'a str>,
    /// Written as `table-key-properties` when set, even if empty
    pub key_properties: Option<&'a [String]>,
    /// Written as `valid-replication-keys` when non-empty
    pub valid_replication_keys: &'a [String],
    /// Written as `forced-replication-method` when set
    pub replication_method: Option<ReplicationMethod>,
}

/// Extract the top-level `properties` object of a stream schema
pub fn schema_properties<'s>(stream: &str, schema: &'s JsonValue) -> Result<&'s JsonObject> {
    let object = schema
        .as_object()
        .ok_or_else(|| Error::malformed_schema(stream, "schema must be a JSON object"))?;

    object
        .get("properties")
        .ok_or_else(|| Error::malformed_schema(stream, "schema has no 'properties'"))?
        .as_object()
        .ok_or_else(|| Error::malformed_schema(stream, "'properties' must be a JSON object"))
}

/// Generate standard metadata for a stream schema
///
/// Fields that are key properties or valid replication keys are `automatic`,
/// every other top-level property is `available`. The table-level entry is
/// always present and always first.
pub fn get_standard_metadata(
    stream: &str,
    schema: &JsonValue,
    options: &StandardMetadataOptions<'_>,
) -> Result<Vec<MetadataEntry>> {
    let properties = schema_properties(stream, schema)?;
    let table = Breadcrumb::table();
    let mut mdata = MetadataMap::new();

    if let Some(key_properties) = options.key_properties {
        mdata.write(&table, TABLE_KEY_PROPERTIES, key_properties.to_vec());
    }
    if let Some(method) = options.replication_method {
        mdata.write(&table, FORCED_REPLICATION_METHOD, method);
    }
    if !options.valid_replication_keys.is_empty() {
        mdata.write(
            &table,
            VALID_REPLICATION_KEYS,
            options.valid_replication_keys.to_vec(),
        );
    }
    mdata.write(&table, INCLUSION, Inclusion::Available);
    if let Some(name) = options.schema_name {
        mdata.write(&table, SCHEMA_NAME, name);
    }

    for field_name in properties.keys() {
        let inclusion = if is_automatic(field_name, options) {
            Inclusion::Automatic
        } else {
            Inclusion::Available
        };
        mdata.write(&Breadcrumb::property(field_name.as_str()), INCLUSION, inclusion);
    }

    Ok(to_list(mdata))
}

fn is_automatic(field_name: &str, options: &StandardMetadataOptions<'_>) -> bool {
    let is_key = options
        .key_properties
        .is_some_and(|keys| keys.iter().any(|k| k == field_name));
    let is_replication_key = options
        .valid_replication_keys
        .iter()
        .any(|k| k == field_name);

    is_key || is_replication_key
}
