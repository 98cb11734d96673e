//! Client configuration.

use std::time::Duration;

/// Base URL of the hosted Roam API.
pub const DEFAULT_BASE_URL: &str = "https://api.tile38.com";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "roam-client";

/// Options recognised when constructing a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Maximum time to wait for each response. `None` or zero means no timeout.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value. Empty means [`DEFAULT_USER_AGENT`].
    pub user_agent: String,
    /// Service base URL, without a trailing path.
    pub base_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientOptions {
    /// Build options using builder pattern.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }

    /// The timeout to apply, if any.
    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout.filter(|t| !t.is_zero())
    }

    /// The user agent to send.
    pub fn effective_user_agent(&self) -> &str {
        if self.user_agent.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.user_agent
        }
    }

    /// The base URL with any trailing slashes removed.
    pub fn effective_base_url(&self) -> &str {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_BASE_URL
        } else {
            trimmed
        }
    }
}

/// Builder for ClientOptions.
#[derive(Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Set the service base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = base_url.into();
        self
    }

    /// Build the options.
    pub fn build(self) -> ClientOptions {
        self.options
    }
}
