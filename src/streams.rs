//! Built-in stream registries embedded in the library
//!
//! Registry YAML files are embedded at compile time so callers can use
//! `load_registry("ordway")` instead of shipping a file.

use crate::error::Result;
use crate::registry::{load_registry_from_str, StreamRegistry};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Ordway stream definitions
const ORDWAY_YAML: &str = include_str!("../streams/ordway.yaml");

/// Built-in registry YAML definitions
pub static BUILTIN_REGISTRIES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        // Billing & Revenue
        m.insert("ordway", ORDWAY_YAML);

        m
    });

/// Get a built-in registry by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_REGISTRIES.get(name).copied()
}

/// Check if a name refers to a built-in registry
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_REGISTRIES.contains_key(name)
}

/// List all built-in registry names
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_REGISTRIES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Load the Ordway stream registry
pub fn ordway() -> Result<StreamRegistry> {
    load_registry_from_str(ORDWAY_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReplicationMethod;

    #[test]
    fn test_builtin_registries() {
        assert!(is_builtin("ordway"));
        assert!(!is_builtin("stripe"));
        assert_eq!(list_builtin(), vec!["ordway"]);
        assert!(get_builtin("ordway").unwrap().contains("name: ordway"));
    }

    #[test]
    fn test_ordway_registry_loads() {
        let registry = ordway().unwrap();
        assert_eq!(registry.name(), "ordway");
        assert_eq!(registry.len(), 25);
    }

    #[test]
    fn test_ordway_parent_relationships() {
        let registry = ordway().unwrap();

        let customer_children: Vec<&str> = registry
            .substreams_of("customers")
            .iter()
            .map(|def| def.name.as_str())
            .collect();
        assert_eq!(
            customer_children,
            vec!["contacts", "customer_notes", "payment_methods"]
        );

        let plan_children: Vec<&str> = registry
            .substreams_of("plans")
            .iter()
            .map(|def| def.name.as_str())
            .collect();
        assert_eq!(plan_children, vec!["charges"]);
    }

    #[test]
    fn test_ordway_substreams_are_full_table() {
        let registry = ordway().unwrap();
        for def in registry.iter().filter(|def| def.is_substream()) {
            assert_eq!(
                def.replication_method,
                Some(ReplicationMethod::FullTable),
                "substream '{}' should be FULL_TABLE",
                def.name
            );
        }
    }

    #[test]
    fn test_ordway_every_stream_declares_method() {
        let registry = ordway().unwrap();
        for def in registry.iter() {
            assert!(
                def.replication_method.is_some(),
                "stream '{}' should declare a replication method",
                def.name
            );
        }
    }
}
