//! Registry types
//!
//! Declarative stream definitions for YAML parsing.

use crate::types::ReplicationMethod;
use serde::{Deserialize, Serialize};

// ============================================================================
// Registry Definition
// ============================================================================

/// Top-level registry definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistryDefinition {
    /// Registry name (usually the tap's source, e.g. "ordway")
    pub name: String,
    /// Registry version
    #[serde(default = "default_version")]
    pub version: String,
    /// Stream definitions
    pub streams: Vec<StreamDefinition>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

// ============================================================================
// Stream Definition
// ============================================================================

/// Replication semantics of a single stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StreamDefinition {
    /// Stream identifier (`tap_stream_id`)
    pub name: String,
    /// Fields uniquely identifying a record
    #[serde(default)]
    pub key_properties: Vec<String>,
    /// Fields eligible as incremental replication keys
    #[serde(default)]
    pub valid_replication_keys: Vec<String>,
    /// Default replication method
    #[serde(default)]
    pub replication_method: Option<ReplicationMethod>,
    /// Default replication key
    #[serde(default)]
    pub replication_key: Option<String>,
    /// Identifier of the stream producing this stream's records
    #[serde(default)]
    pub parent: Option<String>,
}

impl StreamDefinition {
    /// Create a definition with no keys, method, or parent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_properties: Vec::new(),
            valid_replication_keys: Vec::new(),
            replication_method: None,
            replication_key: None,
            parent: None,
        }
    }

    /// Set the key properties
    pub fn with_key_properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_properties = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the valid replication keys
    pub fn with_valid_replication_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_replication_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the replication method
    pub fn with_replication_method(mut self, method: ReplicationMethod) -> Self {
        self.replication_method = Some(method);
        self
    }

    /// Set the replication key
    pub fn with_replication_key(mut self, key: impl Into<String>) -> Self {
        self.replication_key = Some(key.into());
        self
    }

    /// Set the parent stream
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Parent stream identifier, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether records of this stream are produced by a parent stream
    pub fn is_substream(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether the stream can be synced incrementally
    pub fn is_valid_incremental(&self) -> bool {
        self.replication_method == Some(ReplicationMethod::Incremental)
            && self.replication_key.is_some()
    }
}
