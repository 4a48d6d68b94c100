//! # Bootconf
//!
//! Environment-aware configuration loading for machine-learning projects.
//! A project carries one YAML document per deployment environment plus a
//! list of secret names; bootconf works out which environment it is running
//! in, reads that document, and resolves the secrets from the backend that
//! fits the environment.
//!
//! ## Architecture
//!
//! ```text
//! .env / hosted sentinel → environment → configs/config.<env>.yaml → secret manager
//!                                                                        ↓
//!                                  local YAML file | hosted user-secrets service
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! fn main() -> bootconf::Result<()> {
//!     let config = bootconf::load_config()?;
//!     println!("running in {}", config.env_name);
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types and traits
pub use bootstrap::{ConfigLoader, ResolvedConfig};
pub use config::{LoggingConfig, ProjectLayout};
pub use errors::{BootconfError, Result};
pub use observability::init_logging;
pub use secrets::{SecretManager, SecretSet, SecretString};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Load the configuration for the project rooted at `BOOTCONF_PROJECT_ROOT`
/// (or the current directory)
pub fn load_config() -> Result<ResolvedConfig> {
    ConfigLoader::from_env()?.load()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    // Serializes tests that modify environment variables, crate-wide
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Hold the environment lock; a panicked holder does not poison later tests
    pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
        ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
