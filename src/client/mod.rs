//! HTTP client and service layer for the Options.tools API.
//!
//! This module provides the main entry point [`OptionsToolsClient`].
//! Requests go through a single dispatch path that retries transient
//! failures and unwraps the response envelope.
//!
//! # Example
//!
//! ```no_run
//! use options_tools_rs::{OptionsToolsClient, ClientConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> options_tools_rs::Result<()> {
//! let config = ClientConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_retries(5);
//! let client = OptionsToolsClient::with_config("your-api-key", config)?;
//!
//! let usage = client.account().usage().await?;
//! println!("{usage}");
//! # Ok(())
//! # }
//! ```

mod config;
mod envelope;
mod http;
mod retry;

pub use config::{
    ClientConfig, API_PREFIX, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_MAX_RETRIES,
    ENV_TIMEOUT_SECS,
};
pub use http::{OptionsToolsClient, API_KEY_HEADER};
pub(crate) use envelope::into_record;
pub(crate) use http::{ApiRequest, ClientInner};
