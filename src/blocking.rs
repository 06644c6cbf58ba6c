//! Blocking wrapper over [`OptionsToolsClient`].
//!
//! [`OptionsTools`] exposes the same operations as the async client for
//! callers without an async runtime. Each call is driven by [`block_on`]:
//!
//! - With no Tokio runtime on the calling thread, a fresh current-thread
//!   runtime runs the call.
//! - Inside a runtime, where blocking the current one is not allowed, the
//!   call runs on a scoped worker thread with its own runtime and the
//!   caller waits for that thread to finish.
//!
//! # Example
//!
//! ```no_run
//! use options_tools_rs::blocking::OptionsTools;
//! use options_tools_rs::ChainQuery;
//!
//! # fn example() -> options_tools_rs::Result<()> {
//! let client = OptionsTools::new("your-api-key")?;
//! let chain = client.chain("AAPL", ChainQuery::default())?;
//! println!("{} contracts", chain.options.len());
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::{Builder, Handle};

use crate::api::{ChainQuery, EntryQuery, FilingsQuery, FlowQuery, PortfolioRequest};
use crate::client::{ClientConfig, OptionsToolsClient};
use crate::models::{AnalysisResult, OptionsChain, OptionsFlow, PortfolioOptimization, SecFiling};
use crate::{Error, Result};

/// Run a future to completion from synchronous code.
///
/// Safe to call both with and without an active Tokio runtime on the
/// current thread.
pub fn block_on<F>(future: F) -> Result<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    if Handle::try_current().is_err() {
        return drive(future);
    }

    tracing::debug!("runtime active on caller thread, delegating to worker thread");
    std::thread::scope(|scope| {
        let worker = std::thread::Builder::new()
            .name("options-tools-blocking".to_string())
            .spawn_scoped(scope, move || drive(future))
            .map_err(|e| Error::Runtime(format!("failed to spawn worker thread: {e}")))?;

        worker
            .join()
            .map_err(|_| Error::Runtime("worker thread panicked".to_string()))?
    })
}

fn drive<F: Future>(future: F) -> Result<F::Output> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(format!("failed to build runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

/// Synchronous client for the Options.tools API.
///
/// Every method has the same arguments and result as its async
/// counterpart on [`OptionsToolsClient`].
#[derive(Debug, Clone)]
pub struct OptionsTools {
    client: OptionsToolsClient,
}

impl OptionsTools {
    /// Create a blocking client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a blocking client with custom configuration.
    ///
    /// Idle connections are not pooled, since every call runs on its own
    /// short-lived runtime.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let config = config.with_pool_idle_per_host(0);
        Ok(Self {
            client: OptionsToolsClient::with_config(api_key, config)?,
        })
    }

    /// The wrapped async client.
    pub fn async_client(&self) -> &OptionsToolsClient {
        &self.client
    }

    /// See [`OptionsService::chain`](crate::api::OptionsService::chain).
    pub fn chain(&self, ticker: impl AsRef<str> + Send, query: ChainQuery) -> Result<OptionsChain> {
        block_on(self.client.options().chain(ticker, query))?
    }

    /// See [`OptionsService::flow`](crate::api::OptionsService::flow).
    pub fn flow(&self, ticker: impl AsRef<str> + Send, query: FlowQuery) -> Result<OptionsFlow> {
        block_on(self.client.options().flow(ticker, query))?
    }

    /// See [`SecService::filings`](crate::api::SecService::filings).
    pub fn filings(
        &self,
        ticker: impl AsRef<str> + Send,
        query: FilingsQuery,
    ) -> Result<Vec<SecFiling>> {
        block_on(self.client.sec().filings(ticker, query))?
    }

    /// See [`AnalysisService::entry`](crate::api::AnalysisService::entry).
    pub fn entry_analysis(
        &self,
        ticker: impl AsRef<str> + Send,
        query: EntryQuery,
    ) -> Result<AnalysisResult> {
        block_on(self.client.analysis().entry(ticker, query))?
    }

    /// See [`AnalysisService::exit`](crate::api::AnalysisService::exit).
    pub fn exit_analysis<P: Serialize + Sync>(
        &self,
        ticker: impl AsRef<str> + Send,
        entry_price: Decimal,
        position: &P,
    ) -> Result<AnalysisResult> {
        block_on(self.client.analysis().exit(ticker, entry_price, position))?
    }

    /// See [`PortfolioService::optimize`](crate::api::PortfolioService::optimize).
    pub fn optimize_portfolio(&self, request: &PortfolioRequest) -> Result<PortfolioOptimization> {
        block_on(self.client.portfolio().optimize(request))?
    }

    /// See [`AccountService::usage`](crate::api::AccountService::usage).
    pub fn usage(&self) -> Result<Value> {
        block_on(self.client.account().usage())?
    }

    /// See [`OptionsToolsClient::health_check`].
    pub fn health_check(&self) -> Result<Value> {
        block_on(self.client.health_check())?
    }

    /// See [`OptionsToolsClient::close`].
    pub fn close(&self) -> Result<()> {
        block_on(self.client.close())
    }

    /// See [`OptionsToolsClient::is_closed`].
    pub fn is_closed(&self) -> Result<bool> {
        block_on(self.client.is_closed())
    }
}
