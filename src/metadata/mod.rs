//! Catalog metadata module
//!
//! Building blocks for the `metadata` section of a discovery catalog.
//!
//! # Overview
//!
//! The metadata module provides:
//! - `Breadcrumb` - Path addressing the stream (empty) or one of its fields
//! - `MetadataEntry` - List form, as serialized in catalogs
//! - `MetadataMap` - Keyed form, for reading and writing single values
//! - `get_standard_metadata` - Baseline table and field metadata for a schema

mod standard;
mod types;

pub use standard::{get_standard_metadata, schema_properties, StandardMetadataOptions};
pub use types::{
    to_list, to_map, Breadcrumb, MetadataEntry, MetadataMap, FORCED_REPLICATION_METHOD,
    INCLUSION, PARENT_TAP_STREAM_ID, SCHEMA_NAME, SELECTED, TABLE_KEY_PROPERTIES,
    VALID_REPLICATION_KEYS,
};
