//! HTTP client configuration and request execution.

use crate::error::{Error, Result};
use crate::models::Tenant;
use reqwest::{header::ACCEPT, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Default User-Agent sent to Discourse.
pub const DEFAULT_USER_AGENT: &str = concat!("discourse-logout/", env!("CARGO_PKG_VERSION"));

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Header carrying the admin API username.
pub const API_USERNAME_HEADER: &str = "Api-Username";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// User agent.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(20),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Resolve a relative API path against a tenant base URL.
///
/// The base is treated as a directory, so `https://host/forum` plus
/// `users/x.json` gives `https://host/forum/users/x.json`.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .build()
        .map_err(Error::Network)
}

/// Status line and body of a Discourse response.
///
/// Error statuses are carried here rather than turned into [`Error`], so
/// callers can inspect 4xx/5xx the same way as 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase for the status.
    pub reason: String,
    /// Raw response body.
    pub body: String,
}

impl ForumResponse {
    /// Create a response with the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason_phrase(status).to_owned(),
            body: body.into(),
        }
    }

    /// Discourse answers exactly 200 on success; other 2xx are not accepted.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::Json)
    }
}

/// Canonical reason phrase for a status code.
pub fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// HTTP request executor.
pub struct HttpExecutor<'a> {
    client: &'a Client,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Build a request with the tenant's admin headers.
    fn build_request(&self, method: Method, url: Url, tenant: &Tenant) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, tenant.api_key.as_str())
            .header(API_USERNAME_HEADER, tenant.api_username.as_str())
    }

    /// Execute a request against a tenant and capture the response.
    pub async fn send(&self, method: Method, tenant: &Tenant, path: &str) -> Result<ForumResponse> {
        let url = resolve_url(&tenant.base_url, path)?;
        log::debug!("{} {}", method, url);

        let response = self
            .build_request(method, url, tenant)
            .send()
            .await
            .map_err(Error::Network)?;
        self.handle_response(response).await
    }

    /// Capture status and body without rejecting error statuses.
    async fn handle_response(&self, response: Response) -> Result<ForumResponse> {
        let status = response.status();
        let body = response.text().await.map_err(Error::Network)?;

        Ok(ForumResponse {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_owned(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let url = resolve_url("https://forum.example.com", "users/by-external/7.json").unwrap();
        assert_eq!(url.as_str(), "https://forum.example.com/users/by-external/7.json");
    }

    #[test]
    fn test_resolve_url_keeps_base_path() {
        let url = resolve_url("https://example.com/forum", "admin/users/42/log_out").unwrap();
        assert_eq!(url.as_str(), "https://example.com/forum/admin/users/42/log_out");

        let url = resolve_url("https://example.com/forum/", "/admin/users/42/log_out").unwrap();
        assert_eq!(url.as_str(), "https://example.com/forum/admin/users/42/log_out");
    }

    #[test]
    fn test_resolve_url_invalid_base() {
        let err = resolve_url("forum.example.com", "users/1.json").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_forum_response() {
        let ok = ForumResponse::new(200, r#"{"user":{"id":1}}"#);
        assert!(ok.is_ok());
        assert_eq!(ok.reason, "OK");

        let created = ForumResponse::new(201, "");
        assert!(!created.is_ok());

        assert_eq!(ForumResponse::new(404, "").reason, "Not Found");
        assert_eq!(ForumResponse::new(500, "").reason, "Internal Server Error");
    }

    #[test]
    fn test_forum_response_json() {
        let resp = ForumResponse::new(200, r#"{"success":"OK"}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["success"], "OK");

        assert!(ForumResponse::new(502, "<html>").json::<serde_json::Value>().is_err());
    }
}
