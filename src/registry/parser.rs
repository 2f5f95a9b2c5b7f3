//! YAML parser for registry definitions
//!
//! Supports both built-in registries (by name) and custom YAML files (by path).

use super::lookup::StreamRegistry;
use super::types::RegistryDefinition;
use crate::error::{Error, Result};
use crate::streams;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a stream registry from a name or file path
///
/// This function first checks if the input is a built-in registry name
/// (e.g., "ordway"), then falls back to loading from a file path.
///
/// # Examples
///
/// ```ignore
/// // Load built-in registry by name
/// let registry = load_registry("ordway")?;
///
/// // Load custom registry from file
/// let registry = load_registry("./streams.yaml")?;
/// ```
pub fn load_registry(path: impl AsRef<Path>) -> Result<StreamRegistry> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = streams::get_builtin(&path_str) {
            return load_registry_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            let builtin_list = streams::list_builtin().join(", ");
            Error::config(format!(
                "Registry '{}' not found. Built-in registries: {}. Or provide a path to a YAML file.",
                path.display(),
                builtin_list
            ))
        } else {
            Error::config(format!(
                "Failed to read registry file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_registry_from_str(&content)
}

/// Load a stream registry from a YAML string
pub fn load_registry_from_str(yaml: &str) -> Result<StreamRegistry> {
    let def = parse_registry_definition(yaml)?;
    let (name, version) = (def.name.clone(), def.version.clone());

    let registry = StreamRegistry::from_definition(def)?;
    info!(
        registry = %name,
        version = %version,
        streams = registry.len(),
        "Loaded stream registry"
    );
    Ok(registry)
}

/// Parse a registry definition without validating it
pub fn parse_registry_definition(yaml: &str) -> Result<RegistryDefinition> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse registry YAML: {e}")))
}
