//! Discovery module
//!
//! Turns registry definitions and stream schemas into catalog metadata.
//!
//! # Overview
//!
//! The discovery module provides:
//! - `MetadataBuilder` - Per-stream key properties, replication settings and metadata
//! - `Catalog` - Catalog entries for a set of schemas, selection and dependency checks
//! - `load_schemas` - Read `<stream>.json` schema files from a directory

mod builder;
mod catalog;

pub use builder::MetadataBuilder;
pub use catalog::{load_schemas, Catalog, CatalogEntry};
