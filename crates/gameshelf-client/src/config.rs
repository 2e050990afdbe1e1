//! API client configuration.

use std::time::Duration;

use url::Url;

use crate::ApiError;

/// Base URL used when nothing else is configured: a service running on
/// the developer's machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// `timeout` and `user_agent` are read by whoever builds the transport;
/// the client itself only uses `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Where the service lives. May include a path prefix
    /// (`https://example.com/api`), which every endpoint path extends.
    pub base_url: Url,

    /// Overall per-request timeout. `None` waits forever.
    ///
    /// Default: 30 seconds.
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent by the transport.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a config for the given base URL with default settings.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] if `base_url` doesn't parse or
    /// can't have paths appended (`mailto:`, `data:`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // The constant is a valid absolute URL; this can't fail.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: Some(Duration::from_secs(30)),
            user_agent: concat!("gameshelf/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(format!("{raw}: cannot be a base")));
    }
    Ok(url)
}
