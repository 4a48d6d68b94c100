//! Secret resolution for environment-specific configuration.
//!
//! The configuration document names the secrets a run needs (`secrets.keys`);
//! this module fetches their values from whichever backend fits the detected
//! environment.
//!
//! # Architecture
//!
//! Every backend implements the [`SecretManager`] trait, which has a single
//! operation, `get_secrets(keys)`. [`get_secret_manager`] maps an environment
//! identifier to one backend and returns it as the tagged
//! [`SecretManagerKind`]:
//!
//! - **local** → [`LocalSecretManager`]: a git-ignored YAML file next to the
//!   configs. Missing files and missing keys are logged, never fatal.
//! - **kaggle** → [`RemoteUserSecretManager`] over [`HostedSecretsClient`]:
//!   the hosted notebook platform's user-secrets service. Any key that cannot
//!   be fetched fails the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use bootconf::config::ProjectLayout;
//! use bootconf::secrets::{get_secret_manager, SecretManager};
//!
//! let layout = ProjectLayout::from_env()?;
//! let manager = get_secret_manager("local", &layout)?;
//! let secrets = manager.get_secrets(&["HF_TOKEN".to_string()])?;
//! ```
//!
//! # Security Considerations
//!
//! - Values are wrapped in [`SecretString`], which redacts itself in logs,
//!   `Debug` output, and serialization
//! - Log events name keys, never values

pub mod error;
pub mod factory;
pub mod hosted;
pub mod local;
pub mod manager;
pub mod remote;
pub mod types;

pub use error::{Result, SecretsError};
pub use factory::get_secret_manager;
pub use hosted::{HostedClientConfig, HostedSecretsClient};
pub use local::LocalSecretManager;
pub use manager::{SecretBackendType, SecretManager, SecretManagerKind};
pub use remote::{RemoteUserSecretManager, UserSecretsClient};
pub use types::{SecretSet, SecretString};
