//! Secret manager selection
//!
//! Maps an environment identifier to exactly one secret manager. Every call
//! constructs a fresh manager; nothing is shared between environments or
//! between calls.

use tracing::debug;

use super::hosted::HostedSecretsClient;
use super::local::LocalSecretManager;
use super::manager::{SecretBackendType, SecretManagerKind};
use super::remote::RemoteUserSecretManager;
use crate::config::ProjectLayout;
use crate::errors::Result;

/// Select the secret manager for `env_name`
///
/// - `"local"` reads `layout.local_secrets_file`
/// - `"kaggle"` talks to the hosted platform's user-secrets service, configured
///   from the platform's environment variables
///
/// Any other identifier fails with
/// [`BootconfError::UnsupportedEnvironment`](crate::errors::BootconfError::UnsupportedEnvironment).
pub fn get_secret_manager(env_name: &str, layout: &ProjectLayout) -> Result<SecretManagerKind> {
    let backend_type: SecretBackendType = env_name.parse()?;
    debug!(env_name, backend_type = %backend_type, "Selecting secret manager");

    let manager = match backend_type {
        SecretBackendType::Local => {
            SecretManagerKind::Local(LocalSecretManager::new(&layout.local_secrets_file))
        }
        SecretBackendType::Kaggle => SecretManagerKind::RemoteUser(RemoteUserSecretManager::new(
            HostedSecretsClient::from_env()?,
        )),
    };
    Ok(manager)
}
