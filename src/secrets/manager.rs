//! Secret manager trait and backend types
//!
//! Defines the capability every secret backend provides and the tagged
//! alternative the factory hands back to callers.

use super::error::Result;
use super::local::LocalSecretManager;
use super::remote::RemoteUserSecretManager;
use super::types::SecretSet;
use crate::errors::BootconfError;
use std::fmt;
use std::str::FromStr;

/// Type of secret backend, keyed by environment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretBackendType {
    /// Developer-local YAML file
    Local,
    /// Hosted notebook platform user-secrets service
    Kaggle,
}

impl SecretBackendType {
    /// Get the environment identifier that selects this backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Kaggle => "kaggle",
        }
    }
}

impl FromStr for SecretBackendType {
    type Err = BootconfError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "kaggle" => Ok(Self::Kaggle),
            _ => Err(BootconfError::unsupported_environment(s)),
        }
    }
}

impl fmt::Display for SecretBackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability shared by all secret backends
pub trait SecretManager: Send + Sync + fmt::Debug {
    /// Fetch values for the named secrets
    ///
    /// Backends decide how unresolvable keys are handled: the local backend
    /// omits them with a warning, the hosted backend fails.
    fn get_secrets(&self, keys: &[String]) -> Result<SecretSet>;

    /// Get the backend type identifier
    fn backend_type(&self) -> SecretBackendType;
}

/// The secret manager selected for an environment
#[derive(Debug)]
pub enum SecretManagerKind {
    Local(LocalSecretManager),
    RemoteUser(RemoteUserSecretManager),
}

impl SecretManager for SecretManagerKind {
    fn get_secrets(&self, keys: &[String]) -> Result<SecretSet> {
        match self {
            Self::Local(manager) => manager.get_secrets(keys),
            Self::RemoteUser(manager) => manager.get_secrets(keys),
        }
    }

    fn backend_type(&self) -> SecretBackendType {
        match self {
            Self::Local(manager) => manager.backend_type(),
            Self::RemoteUser(manager) => manager.backend_type(),
        }
    }
}
