//! Environment detection
//!
//! Decides which deployment environment the process runs in. Inside the
//! hosted notebook platform the answer is fixed; everywhere else it comes from
//! `ENV_NAME` in the project's `.env` file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ProjectLayout;
use crate::errors::{BootconfError, Result};

/// Environment identifier reported inside the hosted notebook platform
pub const HOSTED_ENV_NAME: &str = "kaggle";

/// Variable in the env file naming the environment
pub const ENV_NAME_VAR: &str = "ENV_NAME";

/// Parsed contents of a `.env` file
///
/// Values are returned to the caller instead of being written into the
/// process environment; [`EnvFile::export`] does that explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
    vars: BTreeMap<String, String>,
}

impl EnvFile {
    /// Parse the env file at `path`
    ///
    /// Later definitions of the same key replace earlier ones.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BootconfError::not_found(".env file", path));
        }

        let env_file_error =
            |source| BootconfError::EnvFile { path: path.to_path_buf(), source };

        let mut vars = BTreeMap::new();
        for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            vars.insert(key, value);
        }

        debug!(path = %path.display(), variables = vars.len(), "Loaded env file");
        Ok(Self { path: path.to_path_buf(), vars })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Read `ENV_NAME`, trimmed
    pub fn env_name(&self) -> Result<String> {
        match self.get(ENV_NAME_VAR).map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(BootconfError::missing_config(ENV_NAME_VAR, &self.path)),
        }
    }

    /// Copy every variable into the process environment
    ///
    /// Variables already present in the environment are left untouched.
    pub fn export(&self) {
        for (key, value) in &self.vars {
            if std::env::var_os(key).is_none() {
                std::env::set_var(key, value);
            }
        }
        debug!(path = %self.path.display(), "Exported env file into process environment");
    }
}

/// Outcome of environment detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Environment identifier
    pub env_name: String,

    /// The env file the name was read from; `None` on the hosted platform
    pub env_file: Option<EnvFile>,
}

/// Detect the environment and keep the env file that named it
pub fn detect(layout: &ProjectLayout) -> Result<Detection> {
    if layout.is_hosted_platform() {
        debug!(
            sentinel = %layout.hosted_sentinel.display(),
            "Hosted platform detected, skipping env file"
        );
        return Ok(Detection { env_name: HOSTED_ENV_NAME.to_string(), env_file: None });
    }

    let env_file = EnvFile::load(&layout.env_file)?;
    let env_name = env_file.env_name()?;
    Ok(Detection { env_name, env_file: Some(env_file) })
}

/// Determine which environment the process is running in
pub fn detect_environment(layout: &ProjectLayout) -> Result<String> {
    detect(layout).map(|detection| detection.env_name)
}
