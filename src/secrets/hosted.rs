//! HTTP client for the hosted notebook platform's user-secrets service.
//!
//! ## Configuration
//!
//! Environment variables, all provided by the platform at runtime:
//! - `KAGGLE_USER_SECRETS_TOKEN` - Required JWT identifying the notebook session
//! - `KAGGLE_URL_BASE` - Optional service base URL (default: `https://www.kaggle.com`)
//! - `KAGGLE_IAP_TOKEN` - Optional identity-aware-proxy token
//!
//! ## Protocol
//!
//! `POST {base}/requests/GetUserSecretByLabelRequest` with body `{"Label": "<key>"}`.
//! The service answers `{"wasSuccessful": true, "result": {"secret": "<value>"}}`.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::error::{Result, SecretsError};
use super::remote::UserSecretsClient;
use super::types::SecretString;

pub const USER_SECRETS_TOKEN_VAR: &str = "KAGGLE_USER_SECRETS_TOKEN";
pub const URL_BASE_VAR: &str = "KAGGLE_URL_BASE";
pub const IAP_TOKEN_VAR: &str = "KAGGLE_IAP_TOKEN";

const DEFAULT_URL_BASE: &str = "https://www.kaggle.com";
const GET_SECRET_BY_LABEL_ENDPOINT: &str = "/requests/GetUserSecretByLabelRequest";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Connection settings for [`HostedSecretsClient`]
#[derive(Debug, Clone)]
pub struct HostedClientConfig {
    /// Service base URL, without a trailing slash
    pub base_url: String,

    /// Session JWT sent as `X-Kaggle-Authorization`
    pub token: SecretString,

    /// Proxy token sent as `Authorization`, when present
    pub iap_token: Option<SecretString>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl HostedClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<SecretString>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            iap_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Fails with [`SecretsError::AuthenticationFailed`] when no session token
    /// is available, which means the process is not running inside the
    /// platform.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(USER_SECRETS_TOKEN_VAR).filter(|t| !t.is_empty()).ok_or_else(|| {
            SecretsError::authentication_failed(format!(
                "A JWT token is required to use the user secrets client, but none was found in {}",
                USER_SECRETS_TOKEN_VAR
            ))
        })?;

        let base_url = lookup(URL_BASE_VAR)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_URL_BASE.to_string());

        let mut config = Self::new(base_url, token);
        config.iap_token = lookup(IAP_TOKEN_VAR).filter(|t| !t.is_empty()).map(SecretString::from);
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceResponse {
    #[serde(default)]
    was_successful: bool,
    result: Option<serde_json::Value>,
}

/// Blocking client for the user-secrets service
#[derive(Debug, Clone)]
pub struct HostedSecretsClient {
    client: Client,
    config: HostedClientConfig,
}

impl HostedSecretsClient {
    pub fn new(config: HostedClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            SecretsError::backend_error(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Create a client configured from the platform's environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(HostedClientConfig::from_env()?)
    }

    fn post(&self, endpoint: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(url = %url, "POST user secrets request");

        let mut request = self
            .client
            .post(&url)
            .header(
                "X-Kaggle-Authorization",
                format!("Bearer {}", self.config.token.expose_secret()),
            )
            .json(body);
        if let Some(iap_token) = &self.config.iap_token {
            request = request.bearer_auth(iap_token.expose_secret());
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                SecretsError::connection_failed(
                    "Timeout error trying to communicate with the user secrets service",
                )
            } else {
                SecretsError::connection_failed(format!(
                    "Connection error trying to communicate with the user secrets service: {}",
                    e
                ))
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SecretsError::authentication_failed(format!(
                "User secrets service responded with {}. Ensure you have access to the resource",
                status
            )));
        }
        if !status.is_success() {
            return Err(SecretsError::backend_error(format!(
                "Unexpected response from the user secrets service: {}",
                status
            )));
        }

        let text = response
            .text()
            .map_err(|e| SecretsError::connection_failed(format!("Failed to read response: {}", e)))?;
        let parsed: ServiceResponse = serde_json::from_str(&text)?;

        match parsed.result {
            Some(result) if parsed.was_successful => Ok(result),
            _ => Err(SecretsError::backend_error(
                "Unexpected response from the user secrets service: request was not successful",
            )),
        }
    }
}

impl UserSecretsClient for HostedSecretsClient {
    fn get_secret(&self, label: &str) -> Result<SecretString> {
        let result =
            self.post(GET_SECRET_BY_LABEL_ENDPOINT, &serde_json::json!({ "Label": label }))?;

        // A successful answer without a value means the label is not defined
        result
            .get("secret")
            .and_then(|s| s.as_str())
            .map(SecretString::from)
            .ok_or_else(|| SecretsError::not_found(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_env;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    /// The blocking client must not run (or be dropped) on an async worker.
    /// Name resolution reads the environment, so it runs under the env lock.
    async fn fetch(base_url: String, label: &'static str) -> Result<SecretString> {
        tokio::task::spawn_blocking(move || {
            let _guard = lock_env();
            let client = HostedSecretsClient::new(HostedClientConfig::new(base_url, "jwt-token"))?;
            client.get_secret(label)
        })
        .await
        .expect("blocking task panicked")
    }

    #[test]
    fn test_config_requires_token() {
        let err = HostedClientConfig::from_vars(vars(&[])).unwrap_err();
        assert!(matches!(err, SecretsError::AuthenticationFailed { .. }));
        assert!(err.to_string().contains(USER_SECRETS_TOKEN_VAR));
    }

    #[test]
    fn test_config_defaults() {
        let config =
            HostedClientConfig::from_vars(vars(&[(USER_SECRETS_TOKEN_VAR, "jwt")])).unwrap();
        assert_eq!(config.base_url, "https://www.kaggle.com");
        assert_eq!(config.token.expose_secret(), "jwt");
        assert!(config.iap_token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(600));
    }

    #[test]
    fn test_config_overrides() {
        let config = HostedClientConfig::from_vars(vars(&[
            (USER_SECRETS_TOKEN_VAR, "jwt"),
            (URL_BASE_VAR, "http://proxy.internal/"),
            (IAP_TOKEN_VAR, "iap"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://proxy.internal");
        assert_eq!(config.iap_token.unwrap().expose_secret(), "iap");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_secret_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/requests/GetUserSecretByLabelRequest"))
            .and(header("X-Kaggle-Authorization", "Bearer jwt-token"))
            .and(body_json(serde_json::json!({ "Label": "HF_TOKEN" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "wasSuccessful": true,
                "result": { "secret": "hf_value" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let secret = fetch(server.uri(), "HF_TOKEN").await.unwrap();
        assert_eq!(secret.expose_secret(), "hf_value");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unsuccessful_response_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "wasSuccessful": false,
                "errors": ["No user secrets exist for kernel"]
            })))
            .mount(&server)
            .await;

        let err = fetch(server.uri(), "MISSING").await.unwrap_err();
        assert!(matches!(err, SecretsError::BackendError { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_secret_field_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "wasSuccessful": true,
                "result": {}
            })))
            .mount(&server)
            .await;

        let err = fetch(server.uri(), "HF_TOKEN").await.unwrap_err();
        assert!(matches!(err, SecretsError::NotFound { ref key } if key == "HF_TOKEN"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_forbidden_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(403)).mount(&server).await;

        let err = fetch(server.uri(), "HF_TOKEN").await.unwrap_err();
        assert!(matches!(err, SecretsError::AuthenticationFailed { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_server_error_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).mount(&server).await;

        let err = fetch(server.uri(), "HF_TOKEN").await.unwrap_err();
        assert!(matches!(err, SecretsError::BackendError { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unreachable_service_is_connection_error() {
        // Bind then drop a listener so nothing is accepting on the port
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let err = fetch(uri, "HF_TOKEN").await.unwrap_err();
        assert!(matches!(err, SecretsError::ConnectionFailed { .. }));
    }
}
