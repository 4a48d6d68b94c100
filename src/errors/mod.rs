//! # Error Handling
//!
//! Error types for configuration bootstrapping, built on `thiserror`.
//! Secret backend failures live in [`crate::secrets::SecretsError`] and are
//! wrapped transparently.

pub mod types;

pub use types::{BootconfError, Result};
