//! Error types for the Options.tools API client.
//!
//! Every failure the client can produce is a variant of [`Error`]. HTTP
//! status codes are mapped onto dedicated variants so callers can match on
//! the failure kind instead of inspecting raw responses.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Options.tools operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when an error envelope carries no `error.message`.
pub(crate) const DEFAULT_API_ERROR_MESSAGE: &str = "Unknown error";

/// Message used when a 400 response carries no `detail` string.
pub(crate) const DEFAULT_VALIDATION_MESSAGE: &str = "Validation error";

/// The main error type for all Options.tools API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON body could not be parsed or decoded into the expected record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API key was rejected (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited by the API (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited {
        /// Seconds to wait before retrying, when the server sent `Retry-After`
        retry_after_secs: Option<u64>,
    },

    /// The request was rejected as invalid (HTTP 400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The server kept failing (HTTP 5xx) until the retry budget ran out
    #[error("Server error: {status}")]
    Server {
        /// Status code of the final attempt
        status: u16,
    },

    /// Request timed out on the final attempt
    #[error("Request timeout")]
    Timeout,

    /// Connection-level failure on the final attempt
    #[error("Request failed: {0}")]
    Network(String),

    /// The response envelope reported `status: "error"`
    #[error("API error: {message}")]
    Api {
        /// Message from `error.message`
        message: String,
    },

    /// Any other unsuccessful HTTP status
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the canonical reason when the body is empty
        message: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid ticker symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client was closed before the call was made
    #[error("Client is closed")]
    Closed,

    /// The blocking adapter could not drive the request
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client already retries server errors, timeouts and network
    /// faults internally; seeing one of them here means the retry budget
    /// was exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use options_tools_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Try again later: {err}");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Timeout | Error::Network(_) | Error::Server { .. } | Error::RateLimited { .. }
        )
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Status { status, .. } => (400..500).contains(status),
            Error::Authentication(_)
            | Error::RateLimited { .. }
            | Error::Validation(_)
            | Error::InvalidInput(_)
            | Error::InvalidSymbol(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Server { .. } => true,
            Error::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication(_) => Some(401),
            Error::RateLimited { .. } => Some(429),
            Error::Validation(_) => Some(400),
            Error::Server { status } | Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a validation error from a 400 response body.
    pub(crate) fn from_validation_body(body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string());

        Error::Validation(detail)
    }

    /// Build an API error from an envelope whose `status` is `"error"`.
    pub(crate) fn from_error_envelope(envelope: &Value) -> Self {
        let message = envelope
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_API_ERROR_MESSAGE)
            .to_string();

        Error::Api { message }
    }
}
