//! # Configuration Management
//!
//! Settings that locate the project on disk and control logging. The
//! environment-specific configuration itself is produced by
//! [`crate::bootstrap::ConfigLoader`].

pub mod settings;

pub use settings::{
    LoggingConfig, ProjectLayout, CONFIGS_DIR_NAME, ENV_FILE_NAME, HOSTED_PLATFORM_SENTINEL,
    LOCAL_SECRETS_FILE, PROJECT_ROOT_VAR,
};
