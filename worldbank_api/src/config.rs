//! Client configuration.

use std::time::Duration;

use crate::user_agent::DEFAULT_USER_AGENT;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// `Host` header sent to the production API.
pub const DEFAULT_HOST: &str = "api.worldbank.org";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request a [`Client`](crate::Client) makes.
///
/// Certificate validation is on unless `accept_invalid_certs` is set; only do
/// that behind an intercepting proxy you trust.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Explicit `Host` header. `None` lets the HTTP stack derive it from the URL.
    pub host: Option<String>,
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            host: Some(DEFAULT_HOST.to_string()),
            accept_invalid_certs: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Points the client at another server. The production `Host` header is
    /// dropped, since it would not match.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self.host = None;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_host(mut self, host: Option<&str>) -> Self {
        self.host = host.map(str::to_string);
        self
    }

    /// Disables TLS certificate validation.
    pub fn with_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
