//! SEC filings service.

use std::sync::Arc;

use crate::client::{into_record, ApiRequest, ClientInner};
use crate::models::{SecFiling, Ticker};
use crate::Result;

/// Default number of filings returned.
pub const DEFAULT_FILINGS_LIMIT: u32 = 10;

/// Parameters for a filings request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingsQuery {
    /// Form type to restrict to, e.g. "8-K"; omitted when unset
    pub filing_type: Option<String>,
    /// Maximum number of filings
    pub limit: u32,
}

impl Default for FilingsQuery {
    fn default() -> Self {
        Self {
            filing_type: None,
            limit: DEFAULT_FILINGS_LIMIT,
        }
    }
}

impl FilingsQuery {
    /// Query for the ten most recent filings of any type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one form type.
    pub fn filing_type(mut self, filing_type: impl Into<String>) -> Self {
        self.filing_type = Some(filing_type.into());
        self
    }

    /// Set the maximum number of filings.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Service for SEC EDGAR filings.
///
/// # Example
///
/// ```no_run
/// use options_tools_rs::FilingsQuery;
///
/// # use options_tools_rs::{OptionsToolsClient, Result};
/// # async fn example(client: OptionsToolsClient) -> Result<()> {
/// let query = FilingsQuery::new().filing_type("8-K").limit(5);
/// let filings = client.sec().filings("GOOG", query).await?;
/// for filing in filings {
///     println!("{} on {}", filing.filing_type, filing.filing_date);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SecService {
    inner: Arc<ClientInner>,
}

impl SecService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List recent filings for a ticker.
    pub async fn filings(
        &self,
        ticker: impl AsRef<str>,
        query: FilingsQuery,
    ) -> Result<Vec<SecFiling>> {
        let ticker = Ticker::new(ticker)?;
        let request = ApiRequest::get(format!("/sec/filings/{}", ticker.path_segment()))
            .query("limit", query.limit)
            .query_opt("filing_type", query.filing_type);

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }
}
