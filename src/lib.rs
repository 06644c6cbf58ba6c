//! # options-tools-rs
//!
//! A Rust client for the Options.tools market analytics API.
//!
//! The crate wraps the REST API with typed request parameters and typed
//! response models, and maps HTTP failures onto a single [`Error`] enum.
//!
//! ## Features
//!
//! - **Options data**: options chains with Greeks and aggregated options flow
//! - **SEC filings**: recent EDGAR filings with parsed highlights
//! - **Analysis**: entry and exit analysis with trading signals
//! - **Portfolio**: allocation optimisation across tickers
//! - **Retries**: server errors, timeouts and connection faults are retried
//!   within a fixed attempt budget
//! - **Async-first**: built on Tokio and reqwest, with a blocking wrapper
//!   behind the `blocking` feature (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use options_tools_rs::{OptionsToolsClient, ChainQuery, OptionType};
//!
//! #[tokio::main]
//! async fn main() -> options_tools_rs::Result<()> {
//!     let client = OptionsToolsClient::new("your-api-key")?;
//!
//!     let chain = client
//!         .options()
//!         .chain("goog", ChainQuery::new().option_type(OptionType::Call))
//!         .await?;
//!     println!("{} @ {}: {} calls", chain.ticker, chain.spot_price, chain.options.len());
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use options_tools_rs::{OptionsToolsClient, EntryQuery, Error};
//!
//! # async fn example(client: OptionsToolsClient) {
//! match client.analysis().entry("GOOG", EntryQuery::new()).await {
//!     Ok(analysis) => println!("{}", analysis.recommended_action),
//!     Err(Error::RateLimited { retry_after_secs }) => {
//!         println!("slow down, retry after {retry_after_secs:?}s");
//!     }
//!     Err(Error::Validation(detail)) => println!("bad request: {detail}"),
//!     Err(err) if err.is_retryable() => println!("transient failure: {err}"),
//!     Err(err) => println!("failed: {err}"),
//! }
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! ```rust,no_run
//! use options_tools_rs::blocking::OptionsTools;
//! use options_tools_rs::FilingsQuery;
//!
//! fn main() -> options_tools_rs::Result<()> {
//!     let client = OptionsTools::new("your-api-key")?;
//!     let filings = client.filings("GOOG", FilingsQuery::new().limit(5))?;
//!     println!("{} filings", filings.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use api::{ChainQuery, EntryQuery, FilingsQuery, FlowQuery, PortfolioRequest};
pub use client::{ClientConfig, OptionsToolsClient};
pub use error::{Error, Result};
pub use models::{OptionType, Ticker};

/// Prelude module for convenient imports.
///
/// ```rust
/// use options_tools_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{ChainQuery, EntryQuery, FilingsQuery, FlowQuery, PortfolioRequest};
    pub use crate::client::{ClientConfig, OptionsToolsClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives and enums
        Ticker, OptionType, Sentiment, SignalType,
        // Records
        OptionContract, OptionsChain, FlowOrder, OptionsFlow, SecFiling, Signal,
        AnalysisResult, PortfolioRecommendation, PortfolioOptimization,
    };
    #[cfg(feature = "blocking")]
    pub use crate::blocking::OptionsTools;
}
