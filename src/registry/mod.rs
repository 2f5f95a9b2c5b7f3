//! Stream registry module
//!
//! Maps stream identifiers to their replication semantics.
//!
//! # Overview
//!
//! The registry module provides:
//! - `StreamDefinition` - Keys, replication method and parent of one stream
//! - `StreamRegistry` - Validated, read-only lookup table of definitions
//! - YAML loading for built-in and custom registries

mod lookup;
mod parser;
mod types;

pub use lookup::StreamRegistry;
pub use parser::{load_registry, load_registry_from_str, parse_registry_definition};
pub use types::{RegistryDefinition, StreamDefinition};

#[cfg(test)]
mod tests;
