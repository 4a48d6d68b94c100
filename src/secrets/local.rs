//! Developer-local secrets backend.
//!
//! Reads secrets from a YAML mapping of secret name to value that lives next
//! to the configuration files and is kept out of version control:
//!
//! ```yaml
//! # configs/secrets/.secrets.local.yaml
//! HF_TOKEN: hf_xxxxxxxx
//! WANDB_API_KEY: 0123456789abcdef
//! ```
//!
//! Local development may run with no secrets at all, so a missing file or a
//! missing key is a diagnostic, not an error. Callers can receive fewer keys
//! than they asked for.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::{Result, SecretsError};
use super::manager::{SecretBackendType, SecretManager};
use super::types::{SecretSet, SecretString};

/// Secret manager backed by a local YAML file.
#[derive(Debug, Clone)]
pub struct LocalSecretManager {
    secret_file: PathBuf,
}

impl LocalSecretManager {
    /// Creates a manager reading from `secret_file`. The file is not touched
    /// until secrets are requested.
    pub fn new(secret_file: impl Into<PathBuf>) -> Self {
        Self { secret_file: secret_file.into() }
    }

    /// Location of the backing file.
    pub fn secret_file(&self) -> &Path {
        &self.secret_file
    }

    fn load_file(&self) -> Result<Mapping> {
        let contents = fs::read_to_string(&self.secret_file)?;
        match serde_yaml::from_str::<Value>(&contents)? {
            Value::Mapping(mapping) => Ok(mapping),
            // Empty or comment-only file
            Value::Null => Ok(Mapping::new()),
            _ => Err(SecretsError::invalid_value(format!(
                "secrets file '{}' must contain a mapping of secret names to values",
                self.secret_file.display()
            ))),
        }
    }
}

impl SecretManager for LocalSecretManager {
    fn get_secrets(&self, keys: &[String]) -> Result<SecretSet> {
        if !self.secret_file.exists() {
            info!(
                path = %self.secret_file.display(),
                "Secrets file not found. Skipping secret loading"
            );
            return Ok(SecretSet::new());
        }

        let loaded = self.load_file()?;

        let mut found = SecretSet::new();
        let mut missing: Vec<&str> = Vec::new();
        for key in keys {
            match loaded.get(key.as_str()).and_then(SecretString::from_yaml_scalar) {
                Some(value) => {
                    found.insert(key.clone(), value);
                }
                None => missing.push(key.as_str()),
            }
        }

        if !missing.is_empty() {
            warn!(
                path = %self.secret_file.display(),
                missing_keys = ?missing,
                "Requested secret keys were not found in the local secrets file"
            );
        }

        debug!(requested = keys.len(), resolved = found.len(), "Loaded local secrets");
        Ok(found)
    }

    fn backend_type(&self) -> SecretBackendType {
        SecretBackendType::Local
    }
}
