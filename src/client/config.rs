//! Client configuration options.

use std::time::Duration;

use crate::{Error, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.options.tools";

/// Path prefix for every business endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OPTIONS_TOOLS_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "OPTIONS_TOOLS_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "OPTIONS_TOOLS_TIMEOUT_SECS";
/// Environment variable overriding the retry budget.
pub const ENV_MAX_RETRIES: &str = "OPTIONS_TOOLS_MAX_RETRIES";

/// Configuration for the Options.tools client.
///
/// # Example
///
/// ```
/// use options_tools_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8000/")
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(5);
///
/// assert_eq!(config.base_url, "http://localhost:8000");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
    /// Total number of attempts for retryable failures
    pub max_retries: u32,
    /// User-Agent header value
    pub user_agent: String,
    /// Idle pooled connections kept per host; `None` keeps reqwest's default
    pub pool_idle_per_host: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            user_agent: format!("options-tools-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            pool_idle_per_host: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration overrides from the environment.
    ///
    /// See [`from_lookup`](Self::from_lookup) for the variables consulted.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup function.
    ///
    /// Reads `OPTIONS_TOOLS_BASE_URL`, `OPTIONS_TOOLS_TIMEOUT_SECS` and
    /// `OPTIONS_TOOLS_MAX_RETRIES`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            let retries: u32 = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{ENV_MAX_RETRIES} must be a non-negative integer, got {raw:?}"
                ))
            })?;
            config = config.with_max_retries(retries);
        }

        Ok(config)
    }

    /// Set the base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total attempt budget for retryable failures.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Limit the idle pooled connections kept per host.
    pub fn with_pool_idle_per_host(mut self, max_idle: usize) -> Self {
        self.pool_idle_per_host = Some(max_idle);
        self
    }

    /// Number of attempts dispatch makes. A budget of zero still sends one request.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Check the configuration before a client is built from it.
    pub(crate) fn validate(&self) -> Result<url::Url> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }

        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must use http or https, got {}",
                url.scheme()
            )));
        }
        Ok(url)
    }
}
