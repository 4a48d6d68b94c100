//! Configuration loader
//!
//! Single entry point that turns a project on disk into a
//! [`ResolvedConfig`]: detect the environment, read its YAML document, and
//! resolve the secrets it asks for. Every step either succeeds or surfaces its
//! error immediately; nothing is retried and no partial result is returned.

use serde::Serialize;
use serde_yaml::Mapping;
use tracing::{info, info_span};

use super::document::{load_yaml_config, ConfigDocument};
use super::environment::detect;
use crate::config::ProjectLayout;
use crate::errors::Result;
use crate::secrets::{get_secret_manager, SecretManager, SecretManagerKind, SecretSet};

/// Selects the secret manager for an environment
pub type ManagerFactory = fn(&str, &ProjectLayout) -> Result<SecretManagerKind>;

/// Fully resolved configuration for one run
///
/// Serializing redacts secret values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub env_name: String,
    pub configurations: Mapping,
    pub directories: Mapping,
    pub secrets: SecretSet,
}

/// Loads environment-specific configuration and secrets
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    layout: ProjectLayout,
    export_env_file: bool,
    manager_factory: ManagerFactory,
}

impl ConfigLoader {
    /// Create a loader for the given project layout
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout, export_env_file: false, manager_factory: get_secret_manager }
    }

    /// Create a loader rooted at `BOOTCONF_PROJECT_ROOT` or the current directory
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ProjectLayout::from_env()?))
    }

    /// Also copy the `.env` variables into the process environment
    ///
    /// Off by default. Existing process variables are never overridden.
    pub fn export_env_file(mut self, export: bool) -> Self {
        self.export_env_file = export;
        self
    }

    /// Replace the secret manager selection
    pub fn secret_manager_factory(mut self, factory: ManagerFactory) -> Self {
        self.manager_factory = factory;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Determine the environment identifier
    pub fn detect_environment(&self) -> Result<String> {
        let detection = detect(&self.layout)?;
        if self.export_env_file {
            if let Some(env_file) = &detection.env_file {
                env_file.export();
            }
        }
        Ok(detection.env_name)
    }

    /// Load the configuration
    pub fn load(&self) -> Result<ResolvedConfig> {
        let span = info_span!("load_config", root = %self.layout.root.display());
        let _enter = span.enter();

        let env_name = self.detect_environment()?;
        let document = load_yaml_config(&self.layout, &env_name)?;
        let ConfigDocument { configurations, directories, secret_keys } =
            ConfigDocument::from_value(document, &self.layout.config_file(&env_name))?;

        let manager = (self.manager_factory)(&env_name, &self.layout)?;
        let secrets = manager.get_secrets(&secret_keys)?;

        info!(
            env_name = %env_name,
            backend = %manager.backend_type(),
            requested_secrets = secret_keys.len(),
            resolved_secrets = secrets.len(),
            "Configuration loaded"
        );

        Ok(ResolvedConfig { env_name, configurations, directories, secrets })
    }
}
