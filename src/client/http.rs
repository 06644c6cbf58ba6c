//! HTTP client implementation for the Options.tools API.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{AccountService, AnalysisService, OptionsService, PortfolioService, SecService};
use crate::{Error, Result};

use super::config::{ClientConfig, API_PREFIX, ENV_API_KEY};
use super::envelope::decode_body;
use super::retry::{body_read, next_state, AttemptOutcome, BodyRead, DispatchState};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// The main asynchronous client for the Options.tools API.
///
/// Endpoints are grouped into services reached through accessor methods.
/// The client is cheap to clone; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use options_tools_rs::{OptionsToolsClient, ChainQuery};
///
/// # async fn example() -> options_tools_rs::Result<()> {
/// let client = OptionsToolsClient::new("your-api-key")?;
///
/// let chain = client.options().chain("goog", ChainQuery::default()).await?;
/// println!("{} spot={}", chain.ticker, chain.spot_price);
///
/// let filings = client.sec().filings("GOOG", Default::default()).await?;
/// println!("{} filings", filings.len());
///
/// client.close().await;
/// # Ok(())
/// # }
/// ```
pub struct OptionsToolsClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    /// `None` once the client has been closed.
    http: RwLock<Option<reqwest::Client>>,
    api_key: SecretString,
    pub(crate) config: ClientConfig,
}

impl OptionsToolsClient {
    /// Create a client for the production API with default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, mut config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidInput("API key must not be empty".to_string()));
        }

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;

        // A 3xx is not followed; it fails as `Error::Status`.
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(max_idle) = config.pool_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http: RwLock::new(Some(http)),
                api_key: SecretString::from(api_key),
                config,
            }),
        })
    }

    /// Create a client from `OPTIONS_TOOLS_*` environment variables.
    ///
    /// `OPTIONS_TOOLS_API_KEY` is required; see
    /// [`ClientConfig::from_lookup`] for the optional overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_API_KEY} is not set")))?;
        Self::with_config(api_key, ClientConfig::from_env()?)
    }

    /// Get the options chain and options flow service.
    pub fn options(&self) -> OptionsService {
        OptionsService::new(self.inner.clone())
    }

    /// Get the SEC filings service.
    pub fn sec(&self) -> SecService {
        SecService::new(self.inner.clone())
    }

    /// Get the entry/exit analysis service.
    pub fn analysis(&self) -> AnalysisService {
        AnalysisService::new(self.inner.clone())
    }

    /// Get the portfolio optimisation service.
    pub fn portfolio(&self) -> PortfolioService {
        PortfolioService::new(self.inner.clone())
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Query the unprefixed `/health` endpoint.
    ///
    /// Sends a single request: no retries, no envelope unwrapping, no
    /// status interpretation. The decoded JSON body is returned as-is.
    pub async fn health_check(&self) -> Result<Value> {
        let http = self.inner.http_client().await?;
        let url = format!("{}/health", self.inner.config.base_url);
        let headers = self.inner.build_headers()?;

        tracing::debug!(%url, "health check");
        let response = http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;
        let body = response.text().await.map_err(transport_error)?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Release the underlying connection pool.
    ///
    /// Closing is idempotent. Requests made through this client or any of
    /// its clones afterwards fail with [`Error::Closed`].
    pub async fn close(&self) {
        if self.inner.http.write().await.take().is_some() {
            tracing::debug!("client closed");
        }
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    pub async fn is_closed(&self) -> bool {
        self.inner.http.read().await.is_none()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// A request to a business endpoint, relative to the `/api/v1` prefix.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
}

impl ApiRequest {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Add a query parameter.
    pub(crate) fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present.
    pub(crate) fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }
}

impl ClientInner {
    /// Clone the pooled HTTP client out of its slot.
    async fn http_client(&self) -> Result<reqwest::Client> {
        self.http.read().await.clone().ok_or(Error::Closed)
    }

    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|_| Error::InvalidInput("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Send a request, retrying transient failures, and unwrap the response envelope.
    pub(crate) async fn dispatch(&self, request: &ApiRequest) -> Result<Value> {
        let http = self.http_client().await?;
        let url = format!("{}{}{}", self.config.base_url, API_PREFIX, request.path);
        let headers = self.build_headers()?;
        let max_attempts = self.config.max_attempts();

        let mut attempt = 0;
        loop {
            tracing::debug!(method = %request.method, %url, attempt, "sending request");

            let mut builder = http
                .request(request.method.clone(), &url)
                .headers(headers.clone());
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let outcome = execute(builder).await;

            match next_state(outcome, attempt, max_attempts) {
                DispatchState::Attempting { next, cause } => {
                    tracing::warn!(
                        %url,
                        attempt = next,
                        max_attempts,
                        reason = %cause,
                        "retrying request"
                    );
                    attempt = next;
                }
                DispatchState::Success(body) => return decode_body(&body),
                DispatchState::Failed(err) => {
                    tracing::debug!(%url, attempt, error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }
}

/// Send one attempt, reading the body only when its status needs it.
async fn execute(builder: reqwest::RequestBuilder) -> AttemptOutcome {
    let response = match builder.send().await {
        Ok(response) => response,
        Err(err) => return fault(err),
    };

    let status = response.status().as_u16();
    let retry_after_secs = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok());

    let body = match body_read(status) {
        BodyRead::Skip => String::new(),
        BodyRead::Required => match response.text().await {
            Ok(body) => body,
            Err(err) => return fault(err),
        },
        BodyRead::BestEffort => response.text().await.unwrap_or_default(),
    };

    AttemptOutcome::Response {
        status,
        body,
        retry_after_secs,
    }
}

fn fault(err: reqwest::Error) -> AttemptOutcome {
    if err.is_timeout() {
        AttemptOutcome::Timeout
    } else {
        AttemptOutcome::Network(describe(&err))
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::Network(describe(&err))
    }
}

/// The error and each of its sources, joined with `": "`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl Clone for OptionsToolsClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for OptionsToolsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsToolsClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
