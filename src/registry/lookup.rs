//! Immutable stream registry
//!
//! Built once from a set of stream definitions and then only read. Callers
//! hand it to [`crate::discovery::MetadataBuilder`] explicitly.

use super::types::{RegistryDefinition, StreamDefinition};
use crate::error::{Error, Result};
use crate::types::{OptionStringExt, ReplicationMethod};
use std::collections::{HashMap, HashSet};

/// Stream definitions looked up by stream identifier
#[derive(Debug, Clone)]
pub struct StreamRegistry {
    name: String,
    streams: HashMap<String, StreamDefinition>,
}

impl StreamRegistry {
    /// Validate definitions and build a registry
    ///
    /// Empty parent identifiers are treated as "no parent".
    pub fn new(
        name: impl Into<String>,
        definitions: impl IntoIterator<Item = StreamDefinition>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::config("Registry name cannot be empty"));
        }

        let mut streams = HashMap::new();
        for mut def in definitions {
            def.parent = def.parent.none_if_empty();
            validate_stream(&def)?;

            if streams.contains_key(&def.name) {
                return Err(Error::config(format!(
                    "Duplicate stream name found: '{}'",
                    def.name
                )));
            }
            streams.insert(def.name.clone(), def);
        }

        if streams.is_empty() {
            return Err(Error::config("Registry must have at least one stream"));
        }

        let registry = Self { name, streams };
        registry.validate_parents()?;
        Ok(registry)
    }

    /// Build a registry from a parsed definition
    pub fn from_definition(def: RegistryDefinition) -> Result<Self> {
        Self::new(def.name, def.streams)
    }

    /// Registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a stream definition
    pub fn get(&self, stream_id: &str) -> Result<&StreamDefinition> {
        self.streams
            .get(stream_id)
            .ok_or_else(|| Error::stream_not_found(stream_id))
    }

    /// Check if a stream is registered
    pub fn contains(&self, stream_id: &str) -> bool {
        self.streams.contains_key(stream_id)
    }

    /// All stream identifiers, sorted
    pub fn stream_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.streams.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Streams whose parent is `parent_id`, sorted by identifier
    pub fn substreams_of(&self, parent_id: &str) -> Vec<&StreamDefinition> {
        let mut children: Vec<&StreamDefinition> = self
            .streams
            .values()
            .filter(|def| def.parent() == Some(parent_id))
            .collect();
        children.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Iterate over all definitions in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &StreamDefinition> {
        self.streams.values()
    }

    /// Number of registered streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Whether the registry is empty (never true for a validated registry)
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    fn validate_parents(&self) -> Result<()> {
        for def in self.streams.values() {
            let Some(parent) = def.parent() else {
                continue;
            };

            if parent == def.name {
                return Err(Error::config(format!(
                    "Stream '{}' cannot be its own parent",
                    def.name
                )));
            }
            if !self.contains(parent) {
                return Err(Error::config(format!(
                    "Stream '{}' references unknown parent stream '{}'",
                    def.name, parent
                )));
            }

            // Walk up the chain; revisiting a stream means the chain loops
            let mut seen = HashSet::from([def.name.as_str()]);
            let mut current = self.streams.get(parent);
            while let Some(ancestor) = current {
                if !seen.insert(ancestor.name.as_str()) {
                    return Err(Error::config(format!(
                        "Parent chain of stream '{}' contains a cycle",
                        def.name
                    )));
                }
                current = ancestor.parent().and_then(|p| self.streams.get(p));
            }
        }

        Ok(())
    }
}

/// Validate a single stream definition
fn validate_stream(def: &StreamDefinition) -> Result<()> {
    if def.name.is_empty() {
        return Err(Error::config("Stream name cannot be empty"));
    }

    if let Some(key) = &def.replication_key {
        if !def.valid_replication_keys.contains(key) {
            return Err(Error::config(format!(
                "Stream '{}' replication key '{}' is not one of its valid replication keys",
                def.name, key
            )));
        }
    }

    if def.replication_method == Some(ReplicationMethod::Incremental)
        && def.replication_key.is_none()
    {
        return Err(Error::config(format!(
            "Stream '{}' uses INCREMENTAL replication but has no replication key",
            def.name
        )));
    }

    Ok(())
}
