//! Value types for resolved secrets.
//!
//! Secret values never reach logs, `Debug` output, or serialized configuration
//! dumps: [`SecretString`] redacts itself everywhere except through
//! [`SecretString::expose_secret`].

use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Resolved secrets keyed by secret name.
pub type SecretSet = BTreeMap<String, SecretString>;

/// A secret value that is redacted in Debug, Display, and serialization.
///
/// Memory is zeroed on drop via `zeroize`.
///
/// ```rust,ignore
/// use bootconf::secrets::SecretString;
///
/// let token = SecretString::new("hf_abc123");
/// assert_eq!(format!("{token:?}"), "SecretString([REDACTED])");
/// assert_eq!(token.expose_secret(), "hf_abc123");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Build a secret from a YAML scalar.
    ///
    /// Strings are taken as-is, numbers and booleans are rendered the way they
    /// appear in the document. Null, sequences, mappings, and tagged nodes yield
    /// `None`.
    pub fn from_yaml_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::new(s.as_str())),
            Value::Number(n) => Some(Self::new(n.to_string())),
            Value::Bool(b) => Some(Self::new(b.to_string())),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
        }
    }

    /// Exposes the underlying secret value. Never log the result.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("[REDACTED]")
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
