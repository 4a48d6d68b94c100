//! # Configuration Bootstrap
//!
//! Environment detection, YAML document loading, and the [`ConfigLoader`]
//! that ties them to secret resolution.
//!
//! ```text
//! detect_environment → load_yaml_config → ConfigDocument → get_secret_manager → get_secrets
//!        ↓                                                                          ↓
//!   .env / sentinel                                                          ResolvedConfig
//! ```

pub mod document;
pub mod environment;
pub mod loader;

pub use document::{load_yaml_config, ConfigDocument};
pub use environment::{detect, detect_environment, Detection, EnvFile, ENV_NAME_VAR, HOSTED_ENV_NAME};
pub use loader::{ConfigLoader, ManagerFactory, ResolvedConfig};
