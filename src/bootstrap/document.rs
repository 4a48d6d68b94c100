//! Environment-specific YAML documents
//!
//! Each environment has a `configs/config.<env>.yaml` file:
//!
//! ```yaml
//! configurations:
//!   batch_size: 32
//! directories:
//!   data: /data/raw
//! secrets:
//!   keys: [HF_TOKEN, WANDB_API_KEY]
//! ```
//!
//! `configurations` and `directories` are required; `secrets` is optional.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::ProjectLayout;
use crate::errors::{BootconfError, Result};

pub const CONFIGURATIONS_SECTION: &str = "configurations";
pub const DIRECTORIES_SECTION: &str = "directories";
pub const SECRETS_SECTION: &str = "secrets";
pub const SECRET_KEYS_FIELD: &str = "keys";

/// Locate and parse the YAML document for `env_name`
///
/// Only plain scalars, sequences, and mappings are accepted. Explicitly tagged
/// nodes are rejected so that a document cannot smuggle in typed values.
pub fn load_yaml_config(layout: &ProjectLayout, env_name: &str) -> Result<Value> {
    let path = layout.config_file(env_name);
    if !path.exists() {
        return Err(BootconfError::not_found(
            format!("YAML config file for environment '{}'", env_name),
            &path,
        ));
    }

    let contents = fs::read_to_string(&path)
        .map_err(|e| BootconfError::io(format!("Failed to read '{}'", path.display()), e))?;
    let document: Value = serde_yaml::from_str(&contents)
        .map_err(|source| BootconfError::Yaml { path: path.clone(), source })?;

    reject_tagged(&document, &path)?;

    debug!(path = %path.display(), env_name, "Loaded YAML config");
    Ok(document)
}

fn reject_tagged(value: &Value, path: &Path) -> Result<()> {
    match value {
        Value::Tagged(tagged) => Err(BootconfError::invalid_document(
            path,
            format!("tagged YAML node '{}' is not allowed", tagged.tag),
        )),
        Value::Sequence(items) => items.iter().try_for_each(|item| reject_tagged(item, path)),
        Value::Mapping(mapping) => mapping.iter().try_for_each(|(key, item)| {
            reject_tagged(key, path)?;
            reject_tagged(item, path)
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}

/// The sections of a configuration document, extracted and validated
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    pub configurations: Mapping,
    pub directories: Mapping,
    /// Secret names requested under `secrets.keys`, in document order
    pub secret_keys: Vec<String>,
}

impl ConfigDocument {
    /// Extract the sections from a parsed document
    ///
    /// `path` is only used for error reporting.
    pub fn from_value(document: Value, path: &Path) -> Result<Self> {
        let root = match document {
            Value::Mapping(root) => root,
            Value::Null => return Err(BootconfError::missing_section(CONFIGURATIONS_SECTION)),
            _ => {
                return Err(BootconfError::invalid_document(
                    path,
                    "top level must be a mapping",
                ))
            }
        };

        let configurations = mapping_section(&root, CONFIGURATIONS_SECTION)?;
        let directories = mapping_section(&root, DIRECTORIES_SECTION)?;
        let secret_keys = secret_keys(&root)?;

        Ok(Self { configurations, directories, secret_keys })
    }
}

fn mapping_section(root: &Mapping, section: &str) -> Result<Mapping> {
    match root.get(section) {
        None => Err(BootconfError::missing_section(section)),
        // `section:` with nothing under it
        Some(Value::Null) => Ok(Mapping::new()),
        Some(Value::Mapping(mapping)) => Ok(mapping.clone()),
        Some(_) => Err(BootconfError::invalid_section(section, "a mapping")),
    }
}

fn secret_keys(root: &Mapping) -> Result<Vec<String>> {
    let secrets = match root.get(SECRETS_SECTION) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(secrets)) => secrets,
        Some(_) => {
            return Err(BootconfError::invalid_argument(
                "Expected 'secrets' to be a mapping with a 'keys' list",
            ))
        }
    };

    let items = match secrets.get(SECRET_KEYS_FIELD) {
        None => return Ok(Vec::new()),
        Some(Value::Sequence(items)) => items,
        Some(_) => {
            return Err(BootconfError::invalid_argument(
                "Expected 'keys' under 'secrets' to be a list",
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(key) => Ok(key.clone()),
            _ => Err(BootconfError::invalid_argument(format!(
                "Expected 'keys' under 'secrets' to be a list of strings, item {} is not a string",
                index
            ))),
        })
        .collect()
}
