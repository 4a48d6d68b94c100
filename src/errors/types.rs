//! # Error Types
//!
//! Error types for the bootconf configuration bootstrap using `thiserror`.

use std::path::{Path, PathBuf};

use crate::secrets::SecretsError;

/// Custom result type for bootconf operations
pub type Result<T> = std::result::Result<T, BootconfError>;

/// Main error type for configuration bootstrapping
#[derive(thiserror::Error, Debug)]
pub enum BootconfError {
    /// A required file (env file, YAML config) does not exist
    #[error("{what} not found at '{}'", path.display())]
    NotFound { what: String, path: PathBuf },

    /// A required variable is unset or blank
    #[error("{variable} is not set in '{}'", path.display())]
    MissingConfig { variable: String, path: PathBuf },

    /// A required top-level YAML section is absent
    #[error("Missing expected section in YAML: '{section}'")]
    MissingSection { section: String },

    /// A YAML section exists but has the wrong shape
    #[error("Section '{section}' must be {expected}")]
    InvalidSection { section: String, expected: String },

    /// Caller contract violation, e.g. a malformed `secrets.keys` list
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The YAML document is structurally unusable
    #[error("Invalid configuration document '{}': {message}", path.display())]
    InvalidDocument { path: PathBuf, message: String },

    /// No secret backend exists for the environment identifier
    #[error("Secret manager not implemented for environment: '{env_name}'")]
    UnsupportedEnvironment { env_name: String },

    /// The env file could not be read or parsed
    #[error("Failed to read env file '{}'", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// The YAML document could not be parsed
    #[error("Failed to parse YAML '{}'", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// I/O errors with additional context
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors raised by a secret backend, propagated unmodified
    #[error(transparent)]
    Secrets(#[from] SecretsError),
}

impl BootconfError {
    /// Create a not found error for a required file
    pub fn not_found<S: Into<String>, P: AsRef<Path>>(what: S, path: P) -> Self {
        Self::NotFound { what: what.into(), path: path.as_ref().to_path_buf() }
    }

    /// Create a missing variable error
    pub fn missing_config<S: Into<String>, P: AsRef<Path>>(variable: S, path: P) -> Self {
        Self::MissingConfig { variable: variable.into(), path: path.as_ref().to_path_buf() }
    }

    /// Create a missing section error
    pub fn missing_section<S: Into<String>>(section: S) -> Self {
        Self::MissingSection { section: section.into() }
    }

    /// Create an invalid section error
    pub fn invalid_section<S: Into<String>, E: Into<String>>(section: S, expected: E) -> Self {
        Self::InvalidSection { section: section.into(), expected: expected.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create an invalid document error
    pub fn invalid_document<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidDocument { path: path.as_ref().to_path_buf(), message: message.into() }
    }

    /// Create an unsupported environment error
    pub fn unsupported_environment<S: Into<String>>(env_name: S) -> Self {
        Self::UnsupportedEnvironment { env_name: env_name.into() }
    }

    /// Create an I/O error with context
    pub fn io<S: Into<String>>(context: S, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = BootconfError::missing_section("directories");
        assert!(matches!(error, BootconfError::MissingSection { .. }));
        assert_eq!(error.to_string(), "Missing expected section in YAML: 'directories'");

        let error = BootconfError::unsupported_environment("staging");
        assert!(error.to_string().contains("staging"));

        let error = BootconfError::not_found("YAML config file", "/tmp/configs/config.local.yaml");
        assert_eq!(
            error.to_string(),
            "YAML config file not found at '/tmp/configs/config.local.yaml'"
        );
    }

    #[test]
    fn test_missing_config_names_variable() {
        let error = BootconfError::missing_config("ENV_NAME", "/srv/app/.env");
        assert_eq!(error.to_string(), "ENV_NAME is not set in '/srv/app/.env'");
    }

    #[test]
    fn test_secrets_error_is_transparent() {
        let error: BootconfError = SecretsError::not_found("API_KEY").into();
        assert_eq!(error.to_string(), "Secret not found: API_KEY");
    }
}
