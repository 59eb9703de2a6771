//! Request dispatch
//!
//! The dispatcher executes a [`RequestDescriptor`]: it attaches the
//! credential, gates on the rate limiter, performs the transport call, and
//! classifies the outcome into the crate's error taxonomy. It never
//! retries — retry policy belongs to callers, who know whether an operation
//! is safe to repeat.

use super::rate_limit::RateLimiter;
use super::request::RequestDescriptor;
use crate::auth::Credential;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{ResponseFormat, CLIENT_ID_HEADER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// A classified, successful response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
    json: Option<Value>,
}

impl ApiResponse {
    /// HTTP status code (always 2xx)
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw response body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parsed JSON body; `None` for raw-text endpoints
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Deserialize the JSON body into a concrete type
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.json {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(serde_json::from_str(&self.body)?),
        }
    }
}

/// Executes request descriptors against the remote API
pub struct Dispatcher {
    client: Client,
    config: ClientConfig,
    rate_limiter: RateLimiter,
}

impl Dispatcher {
    /// Create a dispatcher from a client config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let rate_limiter = RateLimiter::new(config.rate_limit);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// The shared rate limiter gating every dispatch
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// The config this dispatcher was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a descriptor with the given credential.
    ///
    /// Local preconditions are checked before any network activity: a
    /// descriptor that requires auth fails with [`Error::AuthRequired`] when
    /// the credential is empty, and an expired bearer token fails with
    /// [`Error::CredentialExpired`] rather than sending a request doomed to
    /// be rejected.
    pub async fn execute(
        &self,
        descriptor: &RequestDescriptor,
        credential: &Credential,
    ) -> Result<ApiResponse> {
        if descriptor.requires_auth() && credential.is_none() {
            return Err(Error::AuthRequired);
        }
        if credential.is_expired() {
            // is_expired() only returns true for bearer tokens with an expiry
            let expired_at = credential.expires_at().unwrap_or_else(chrono::Utc::now);
            return Err(Error::CredentialExpired { expired_at });
        }

        self.rate_limiter.acquire().await;

        let url = self.build_url(descriptor.path());
        let method = descriptor.method().clone();
        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(CLIENT_ID_HEADER, &self.config.client_id)
            .timeout(self.config.timeout);

        if !descriptor.query().is_empty() {
            req = req.query(descriptor.query());
        }

        // GET carries parameters in the query string; every other method
        // sends them as a url-encoded form body.
        if method != Method::GET {
            req = req.form(&descriptor.form_pairs());
        }

        req = match credential {
            Credential::None => req,
            Credential::Basic { username, password } => req.basic_auth(username, Some(password)),
            Credential::Bearer { token, .. } => req.bearer_auth(token),
        };

        debug!("Dispatching {} {}", method, url);
        let response = match req.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Request timed out: {} {}", method, url);
                return Err(Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                });
            }
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Request failed: {} {} -> {}", method, url, status.as_u16());
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let json = match descriptor.format() {
            ResponseFormat::Raw => None,
            ResponseFormat::Json => {
                let value: Value = serde_json::from_str(&body)?;
                // The API may report logical errors inside a 200 body.
                if let Some(err) = extract_api_error(&value) {
                    warn!("API error on {} {}: {}", method, url, err);
                    return Err(err);
                }
                Some(value)
            }
        };

        debug!("Request succeeded: {} {}", method, url);
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
            json,
        })
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Scan a 2xx body for the logical error envelope:
/// `{ "json": { "errors": [[code, message, field], ...] } }`.
///
/// Absence of the envelope or an empty `errors` array means no error.
fn extract_api_error(body: &Value) -> Option<Error> {
    let errors = body.get("json")?.get("errors")?.as_array()?;
    let first = errors.first()?.as_array()?;

    let code = first.first()?.as_str()?.to_string();
    let message = first
        .get(1)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let field = first
        .get(2)
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string);

    Some(Error::Api {
        code,
        message,
        field,
    })
}

#[cfg(test)]
mod envelope_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_api_error_present() {
        let body = json!({"json": {"errors": [["RATELIMIT", "too fast", null]]}});
        let err = extract_api_error(&body).expect("error expected");
        match err {
            Error::Api {
                code,
                message,
                field,
            } => {
                assert_eq!(code, "RATELIMIT");
                assert_eq!(message, "too fast");
                assert!(field.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_api_error_with_field() {
        let body = json!({"json": {"errors": [["BAD_CAPTCHA", "invalid captcha", "captcha"]]}});
        match extract_api_error(&body) {
            Some(Error::Api { field, .. }) => assert_eq!(field.as_deref(), Some("captcha")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_extract_api_error_absent() {
        assert!(extract_api_error(&json!({"json": {"errors": []}})).is_none());
        assert!(extract_api_error(&json!({"json": {}})).is_none());
        assert!(extract_api_error(&json!({"data": {"children": []}})).is_none());
    }
}
