//! Tests for the stream registry module

use super::*;
use crate::error::Error;
use crate::types::ReplicationMethod;
use std::io::Write;
use test_case::test_case;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_registry() {
    let yaml = r#"
name: test-registry
streams:
  - name: users
"#;

    let registry = load_registry_from_str(yaml).unwrap();
    assert_eq!(registry.name(), "test-registry");
    assert_eq!(registry.len(), 1);

    let users = registry.get("users").unwrap();
    assert_eq!(users.name, "users");
    assert!(users.key_properties.is_empty());
    assert!(users.valid_replication_keys.is_empty());
    assert_eq!(users.replication_method, None);
    assert_eq!(users.replication_key, None);
    assert_eq!(users.parent(), None);
}

#[test]
fn test_parse_registry_default_version() {
    let yaml = r#"
name: test-registry
streams:
  - name: users
"#;

    let def = parse_registry_definition(yaml).unwrap();
    assert_eq!(def.version, "0.1.0");
}

#[test]
fn test_load_full_stream_definition() {
    let yaml = r#"
name: billing
version: "2.0.0"
streams:
  - name: customers
    key_properties: [id]
    replication_method: FULL_TABLE
  - name: invoices
    key_properties: [customer_id, id]
    valid_replication_keys: [updated_date, created_date]
    replication_key: updated_date
    replication_method: INCREMENTAL
    parent: customers
"#;

    let registry = load_registry_from_str(yaml).unwrap();
    let invoices = registry.get("invoices").unwrap();

    assert_eq!(invoices.key_properties, vec!["customer_id", "id"]);
    assert_eq!(
        invoices.valid_replication_keys,
        vec!["updated_date", "created_date"]
    );
    assert_eq!(invoices.replication_key.as_deref(), Some("updated_date"));
    assert_eq!(
        invoices.replication_method,
        Some(ReplicationMethod::Incremental)
    );
    assert_eq!(invoices.parent(), Some("customers"));
    assert!(invoices.is_substream());
    assert!(invoices.is_valid_incremental());

    let customers = registry.get("customers").unwrap();
    assert!(!customers.is_substream());
    assert!(!customers.is_valid_incremental());
}

#[test]
fn test_empty_parent_means_no_parent() {
    let yaml = r#"
name: test
streams:
  - name: customers
    parent: ""
"#;

    let registry = load_registry_from_str(yaml).unwrap();
    let customers = registry.get("customers").unwrap();
    assert_eq!(customers.parent(), None);
    assert!(!customers.is_substream());
}

#[test]
fn test_invalid_replication_method() {
    let yaml = r#"
name: test
streams:
  - name: customers
    replication_method: LOG_BASED
"#;

    let err = load_registry_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("Failed to parse registry YAML"));
}

// ============================================================================
// Lookup Tests
// ============================================================================

fn sample_registry() -> StreamRegistry {
    StreamRegistry::new(
        "sample",
        [
            StreamDefinition::new("plans").with_key_properties(["id"]),
            StreamDefinition::new("charges")
                .with_key_properties(["id"])
                .with_parent("plans"),
            StreamDefinition::new("customers").with_key_properties(["id"]),
            StreamDefinition::new("contacts").with_parent("customers"),
            StreamDefinition::new("customer_notes").with_parent("customers"),
        ],
    )
    .unwrap()
}

#[test]
fn test_get_unknown_stream() {
    let registry = sample_registry();
    let err = registry.get("invoices").unwrap_err();

    assert!(err.is_lookup_error());
    match err {
        Error::StreamNotFound { stream } => assert_eq!(stream, "invoices"),
        other => panic!("Expected StreamNotFound, got {other:?}"),
    }
}

#[test]
fn test_stream_ids_sorted() {
    let registry = sample_registry();
    assert_eq!(
        registry.stream_ids(),
        vec!["charges", "contacts", "customer_notes", "customers", "plans"]
    );
    assert!(registry.contains("plans"));
    assert!(!registry.contains("refunds"));
}

#[test]
fn test_substreams_of() {
    let registry = sample_registry();

    let names: Vec<&str> = registry
        .substreams_of("customers")
        .into_iter()
        .map(|def| def.name.as_str())
        .collect();
    assert_eq!(names, vec!["contacts", "customer_notes"]);

    assert!(registry.substreams_of("charges").is_empty());
}

#[test]
fn test_multi_level_parents_allowed() {
    let registry = StreamRegistry::new(
        "nested",
        [
            StreamDefinition::new("a"),
            StreamDefinition::new("b").with_parent("a"),
            StreamDefinition::new("c").with_parent("b"),
        ],
    )
    .unwrap();

    assert_eq!(registry.get("c").unwrap().parent(), Some("b"));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test_case(
    "name: ''\nstreams:\n  - name: users\n",
    "Registry name cannot be empty";
    "empty registry name"
)]
#[test_case(
    "name: test\nstreams: []\n",
    "at least one stream";
    "no streams"
)]
#[test_case(
    "name: test\nstreams:\n  - name: ''\n",
    "Stream name cannot be empty";
    "empty stream name"
)]
#[test_case(
    "name: test\nstreams:\n  - name: users\n  - name: users\n",
    "Duplicate stream name";
    "duplicate stream"
)]
#[test_case(
    "name: test\nstreams:\n  - name: users\n    parent: accounts\n",
    "unknown parent stream 'accounts'";
    "unknown parent"
)]
#[test_case(
    "name: test\nstreams:\n  - name: users\n    parent: users\n",
    "cannot be its own parent";
    "self parent"
)]
#[test_case(
    "name: test\nstreams:\n  - name: a\n    parent: b\n  - name: b\n    parent: a\n",
    "contains a cycle";
    "parent cycle"
)]
#[test_case(
    "name: test\nstreams:\n  - name: users\n    replication_key: updated_date\n",
    "is not one of its valid replication keys";
    "replication key not valid"
)]
#[test_case(
    "name: test\nstreams:\n  - name: users\n    replication_method: INCREMENTAL\n",
    "has no replication key";
    "incremental without key"
)]
fn test_validation_errors(yaml: &str, expected: &str) {
    let err = load_registry_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "got {err:?}");
    assert!(
        err.to_string().contains(expected),
        "'{err}' should contain '{expected}'"
    );
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_builtin_by_name() {
    let registry = load_registry("ordway").unwrap();
    assert_eq!(registry.name(), "ordway");
    assert!(registry.contains("customers"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "name: from-file\nstreams:\n  - name: users\n    key_properties: [id]"
    )
    .unwrap();

    let registry = load_registry(file.path()).unwrap();
    assert_eq!(registry.name(), "from-file");
    assert_eq!(registry.get("users").unwrap().key_properties, vec!["id"]);
}

#[test]
fn test_load_missing_registry_lists_builtins() {
    let err = load_registry("no-such-registry").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("not found"));
    assert!(message.contains("ordway"));
}
