//! # Solidafy Ordway Tap Metadata
//!
//! Catalog metadata generation for the Ordway tap.
//!
//! Given a stream identifier and its JSON schema, produces the `metadata`
//! section of a discovery catalog: key properties, forced replication method,
//! valid replication keys, field inclusion, and the parent of substreams.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_tap_ordway::{load_registry, MetadataBuilder, Result};
//!
//! fn main() -> Result<()> {
//!     // Load the built-in Ordway stream registry
//!     let registry = load_registry("ordway")?;
//!     let builder = MetadataBuilder::new(&registry);
//!
//!     let schema = serde_json::json!({ "properties": { "id": { "type": "string" } } });
//!     let metadata = builder.get_stream_metadata("contacts", &schema)?;
//!
//!     println!("{}", serde_json::to_string_pretty(&metadata)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Discovery                              │
//! │  MetadataBuilder::get_stream_metadata()   Catalog::discover()│
//! └──────────────────────────────────────────────────────────────┘
//!                 │                                │
//! ┌───────────────┴───────────────┬────────────────┴─────────────┐
//! │            Registry           │            Metadata          │
//! ├───────────────────────────────┼──────────────────────────────┤
//! │ StreamDefinition              │ Breadcrumb / MetadataEntry   │
//! │ StreamRegistry (read-only)    │ MetadataMap                  │
//! │ YAML loader, built-ins        │ Standard metadata            │
//! └───────────────────────────────┴──────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Catalog metadata primitives
pub mod metadata;

/// Stream registry and YAML loader
pub mod registry;

/// Built-in stream registries
pub mod streams;

/// Metadata builder and discovery catalog
pub mod discovery;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use discovery::{load_schemas, Catalog, CatalogEntry, MetadataBuilder};
pub use metadata::{Breadcrumb, MetadataEntry, MetadataMap};
pub use registry::{load_registry, load_registry_from_str, StreamDefinition, StreamRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
