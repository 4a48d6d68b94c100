//! Hosted-platform secrets backend.
//!
//! Secrets are resolved one at a time through the platform's user-secrets
//! service. Unlike the local backend there is no silent omission: the first key
//! that cannot be fetched fails the whole request with the platform's error.

use tracing::debug;

use super::error::Result;
use super::manager::{SecretBackendType, SecretManager};
use super::types::{SecretSet, SecretString};

/// Client for the hosted platform's per-user secret store.
///
/// [`super::hosted::HostedSecretsClient`] talks to the real service; tests
/// substitute their own implementation.
pub trait UserSecretsClient: Send + Sync + std::fmt::Debug {
    /// Fetch one secret by its label.
    fn get_secret(&self, label: &str) -> Result<SecretString>;
}

/// Secret manager for the hosted notebook platform.
#[derive(Debug)]
pub struct RemoteUserSecretManager {
    client: Box<dyn UserSecretsClient>,
}

impl RemoteUserSecretManager {
    pub fn new(client: impl UserSecretsClient + 'static) -> Self {
        Self { client: Box::new(client) }
    }
}

impl SecretManager for RemoteUserSecretManager {
    fn get_secrets(&self, keys: &[String]) -> Result<SecretSet> {
        let mut secrets = SecretSet::new();
        for key in keys {
            let value = self.client.get_secret(key)?;
            secrets.insert(key.clone(), value);
        }
        debug!(resolved = secrets.len(), "Fetched secrets from hosted platform");
        Ok(secrets)
    }

    fn backend_type(&self) -> SecretBackendType {
        SecretBackendType::Kaggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::SecretsError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory client that records the labels it was asked for
    #[derive(Debug, Default)]
    struct FakeClient {
        values: HashMap<String, String>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl FakeClient {
        fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                values: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                requested: Arc::default(),
            }
        }
    }

    impl UserSecretsClient for FakeClient {
        fn get_secret(&self, label: &str) -> Result<SecretString> {
            self.requested.lock().unwrap().push(label.to_string());
            self.values
                .get(label)
                .map(|v| SecretString::new(v.as_str()))
                .ok_or_else(|| SecretsError::backend_error(format!("no secret labelled {label}")))
        }
    }

    #[test]
    fn test_fetches_every_key() {
        let manager = RemoteUserSecretManager::new(FakeClient::with(&[
            ("HF_TOKEN", "hf_1"),
            ("WANDB_API_KEY", "wb_2"),
        ]));

        let secrets =
            manager.get_secrets(&["HF_TOKEN".to_string(), "WANDB_API_KEY".to_string()]).unwrap();

        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets["HF_TOKEN"].expose_secret(), "hf_1");
        assert_eq!(secrets["WANDB_API_KEY"].expose_secret(), "wb_2");
    }

    #[test]
    fn test_missing_key_fails_the_fetch() {
        let manager = RemoteUserSecretManager::new(FakeClient::with(&[("HF_TOKEN", "hf_1")]));

        let result = manager.get_secrets(&["HF_TOKEN".to_string(), "MISSING".to_string()]);

        let err = result.unwrap_err();
        assert!(matches!(err, SecretsError::BackendError { .. }));
        assert!(err.to_string().contains("MISSING"));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let client = FakeClient::with(&[("B", "2")]);
        let requested = Arc::clone(&client.requested);
        let manager = RemoteUserSecretManager::new(client);

        let result = manager.get_secrets(&["A".to_string(), "B".to_string()]);

        assert!(result.is_err());
        assert_eq!(*requested.lock().unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn test_no_keys_makes_no_requests() {
        let manager = RemoteUserSecretManager::new(FakeClient::with(&[]));
        assert!(manager.get_secrets(&[]).unwrap().is_empty());
        assert_eq!(manager.backend_type(), SecretBackendType::Kaggle);
    }
}
