//! HTTP client and configuration.

mod http;

pub use http::{
    reason_phrase, resolve_url, ForumResponse, HttpConfig, API_KEY_HEADER, API_USERNAME_HEADER,
    DEFAULT_USER_AGENT,
};

use crate::error::Result;
use crate::models::Tenant;
use async_trait::async_trait;
use http::{build_client, HttpExecutor};
use reqwest::Method;
use std::time::Duration;

/// Transport used to talk to Discourse tenants.
///
/// Implementations return error statuses as [`ForumResponse`]s and reserve
/// `Err` for requests that got no response at all.
#[async_trait]
pub trait ForumClient: Send + Sync {
    /// `GET {tenant.base_url}/{path}` with the tenant's admin headers.
    async fn get(&self, tenant: &Tenant, path: &str) -> Result<ForumResponse>;

    /// `POST {tenant.base_url}/{path}` with the tenant's admin headers.
    async fn post(&self, tenant: &Tenant, path: &str) -> Result<ForumResponse>;
}

/// Builder for creating HttpForumClient.
#[derive(Debug, Default)]
pub struct HttpForumClientBuilder {
    http_config: HttpConfig,
}

impl HttpForumClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.user_agent = ua.into();
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Set read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.read_timeout = timeout;
        self
    }

    /// Build HttpForumClient.
    pub fn build(self) -> Result<HttpForumClient> {
        let http = build_client(&self.http_config)?;

        Ok(HttpForumClient {
            http,
            config: self.http_config,
        })
    }
}

/// [`ForumClient`] backed by reqwest.
#[derive(Clone)]
pub struct HttpForumClient {
    http: reqwest::Client,
    config: HttpConfig,
}

impl HttpForumClient {
    /// Create a new client builder.
    pub fn builder() -> HttpForumClientBuilder {
        HttpForumClientBuilder::new()
    }

    /// Get the active HTTP configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http)
    }
}

#[async_trait]
impl ForumClient for HttpForumClient {
    async fn get(&self, tenant: &Tenant, path: &str) -> Result<ForumResponse> {
        self.executor().send(Method::GET, tenant, path).await
    }

    async fn post(&self, tenant: &Tenant, path: &str) -> Result<ForumResponse> {
        self.executor().send(Method::POST, tenant, path).await
    }
}

impl std::fmt::Debug for HttpForumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpForumClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn tenant(server: &MockServer) -> Tenant {
        Tenant::new(server.base_url(), "key-1", "system")
    }

    #[test]
    fn test_client_builder() {
        let client = HttpForumClient::builder()
            .connect_timeout(Duration::from_secs(1))
            .user_agent("test-agent")
            .build()
            .unwrap();

        assert_eq!(client.config().connect_timeout, Duration::from_secs(1));
        assert_eq!(client.config().user_agent, "test-agent");
    }

    #[tokio::test]
    async fn test_get_sends_admin_headers() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/users/by-external/7.json")
                .header("Api-Key", "key-1")
                .header("Api-Username", "system");
            then.status(200).body(r#"{"user":{"id":42}}"#);
        });

        let client = HttpForumClient::builder().build().unwrap();
        let resp = client
            .get(&tenant(&server), "users/by-external/7.json")
            .await
            .unwrap();

        m.assert();
        assert!(resp.is_ok());
        assert_eq!(resp.body, r#"{"user":{"id":42}}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_a_response() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(POST).path("/admin/users/42/log_out");
            then.status(500).body("boom");
        });

        let client = HttpForumClient::builder().build().unwrap();
        let resp = client
            .post(&tenant(&server), "admin/users/42/log_out")
            .await
            .unwrap();

        assert_eq!(resp.status, 500);
        assert_eq!(resp.reason, "Internal Server Error");
        assert_eq!(resp.body, "boom");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let client = HttpForumClient::builder()
            .connect_timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        let tenant = Tenant::new("http://127.0.0.1:1", "k", "u");

        let err = client.get(&tenant, "users/by-external/1.json").await.unwrap_err();
        assert!(err.is_transport());
    }
}
