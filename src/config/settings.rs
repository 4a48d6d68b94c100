//! # Configuration Settings
//!
//! Ambient settings for the bootstrap itself: where the project lives on disk
//! and how diagnostics are logged.

use crate::errors::{BootconfError, Result};
use std::path::PathBuf;

/// Environment variable that overrides the project root
pub const PROJECT_ROOT_VAR: &str = "BOOTCONF_PROJECT_ROOT";

/// Name of the env file at the project root
pub const ENV_FILE_NAME: &str = ".env";

/// Directory under the project root holding `config.<env>.yaml` files
pub const CONFIGS_DIR_NAME: &str = "configs";

/// Developer-local secrets file, relative to the configs directory
pub const LOCAL_SECRETS_FILE: &str = "secrets/.secrets.local.yaml";

/// Input mount that only exists inside the hosted notebook platform
pub const HOSTED_PLATFORM_SENTINEL: &str = "/kaggle/input";

/// Filesystem locations the bootstrap reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root
    pub root: PathBuf,

    /// `.env` file defining `ENV_NAME`
    pub env_file: PathBuf,

    /// Directory containing `config.<env>.yaml`
    pub configs_dir: PathBuf,

    /// YAML mapping of secret name to value for local development
    pub local_secrets_file: PathBuf,

    /// Path whose existence marks the hosted platform
    pub hosted_sentinel: PathBuf,
}

impl ProjectLayout {
    /// Derive the standard layout below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let configs_dir = root.join(CONFIGS_DIR_NAME);
        Self {
            env_file: root.join(ENV_FILE_NAME),
            local_secrets_file: configs_dir.join(LOCAL_SECRETS_FILE),
            configs_dir,
            hosted_sentinel: PathBuf::from(HOSTED_PLATFORM_SENTINEL),
            root,
        }
    }

    /// Create the layout from `BOOTCONF_PROJECT_ROOT`, falling back to the
    /// current working directory
    pub fn from_env() -> Result<Self> {
        let root = match std::env::var(PROJECT_ROOT_VAR) {
            Ok(root) if !root.trim().is_empty() => PathBuf::from(root.trim()),
            _ => std::env::current_dir()
                .map_err(|e| BootconfError::io("Failed to resolve current directory", e))?,
        };
        Ok(Self::new(root))
    }

    /// Override the env file location
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Override the configs directory
    pub fn with_configs_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.configs_dir = path.into();
        self
    }

    /// Override the local secrets file location
    pub fn with_local_secrets_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_secrets_file = path.into();
        self
    }

    /// Override the hosted-platform sentinel path
    pub fn with_hosted_sentinel(mut self, path: impl Into<PathBuf>) -> Self {
        self.hosted_sentinel = path.into();
        self
    }

    /// Path of the YAML document for an environment
    pub fn config_file(&self, env_name: &str) -> PathBuf {
        self.configs_dir.join(format!("config.{}.yaml", env_name))
    }

    /// Whether the process runs inside the hosted platform
    pub fn is_hosted_platform(&self) -> bool {
        self.hosted_sentinel.exists()
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        let level = std::env::var("BOOTCONF_LOG_LEVEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        let json = std::env::var("BOOTCONF_LOG_JSON")
            .map(|s| s.to_lowercase() == "true" || s == "1")
            .unwrap_or(false);

        Self { level, json }
    }
}
