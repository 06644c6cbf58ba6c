//! Options chain and options flow service.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::client::{into_record, ApiRequest, ClientInner};
use crate::models::{OptionType, OptionsChain, OptionsFlow, Ticker};
use crate::Result;

/// Default flow window.
pub const DEFAULT_FLOW_TIMEFRAME: &str = "1d";

/// Filters for an options chain request.
///
/// Each filter is sent only when set.
///
/// # Example
///
/// ```
/// use options_tools_rs::{ChainQuery, OptionType};
/// use chrono::NaiveDate;
///
/// let query = ChainQuery::new()
///     .expiration(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())
///     .option_type(OptionType::Call);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainQuery {
    /// Only contracts expiring on this date, sent as an ISO date
    pub expiration: Option<NaiveDate>,
    /// Only contracts at this strike
    pub strike: Option<Decimal>,
    /// Only calls or only puts, sent as `type`
    pub option_type: Option<OptionType>,
}

impl ChainQuery {
    /// An unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by expiration date.
    pub fn expiration(mut self, expiration: NaiveDate) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Filter by strike.
    pub fn strike(mut self, strike: Decimal) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Filter by call or put.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("expiration", self.expiration.map(|d| d.format("%Y-%m-%d")))
            .query_opt("strike", self.strike)
            .query_opt("type", self.option_type)
    }
}

/// Parameters for an options flow request.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowQuery {
    /// Window to aggregate over, e.g. "1d"
    pub timeframe: String,
    /// Only orders with at least this premium; omitted when unset
    pub min_premium: Option<Decimal>,
    /// Only unusual orders
    pub unusual_only: bool,
}

impl Default for FlowQuery {
    fn default() -> Self {
        Self {
            timeframe: DEFAULT_FLOW_TIMEFRAME.to_string(),
            min_premium: None,
            unusual_only: false,
        }
    }
}

impl FlowQuery {
    /// Query with the default one-day window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the aggregation window.
    pub fn timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    /// Set the minimum premium.
    pub fn min_premium(mut self, min_premium: Decimal) -> Self {
        self.min_premium = Some(min_premium);
        self
    }

    /// Restrict to unusual orders.
    pub fn unusual_only(mut self, unusual_only: bool) -> Self {
        self.unusual_only = unusual_only;
        self
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query("timeframe", &self.timeframe)
            .query("unusual_only", self.unusual_only)
            .query_opt("min_premium", self.min_premium)
    }
}

/// Service for options chain and options flow data.
///
/// # Example
///
/// ```no_run
/// use options_tools_rs::{FlowQuery};
/// use rust_decimal::Decimal;
///
/// # use options_tools_rs::{OptionsToolsClient, Result};
/// # async fn example(client: OptionsToolsClient) -> Result<()> {
/// let flow = client
///     .options()
///     .flow("GOOG", FlowQuery::new().min_premium(Decimal::from(50_000)))
///     .await?;
/// println!("net premium: {}", flow.net_premium());
/// # Ok(())
/// # }
/// ```
pub struct OptionsService {
    inner: Arc<ClientInner>,
}

impl OptionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the options chain for a ticker.
    pub async fn chain(&self, ticker: impl AsRef<str>, query: ChainQuery) -> Result<OptionsChain> {
        let ticker = Ticker::new(ticker)?;
        let request = query.apply(
            ApiRequest::get(format!("/options/chain/{}", ticker.path_segment()))
                .query("ticker", &ticker),
        );

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }

    /// Get the options flow for a ticker.
    pub async fn flow(&self, ticker: impl AsRef<str>, query: FlowQuery) -> Result<OptionsFlow> {
        let ticker = Ticker::new(ticker)?;
        let request =
            query.apply(ApiRequest::get(format!("/options/flow/{}", ticker.path_segment())));

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pairs(request: &ApiRequest) -> Vec<(&str, &str)> {
        request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_chain_query_omits_unset_filters() {
        let request = ChainQuery::new().apply(ApiRequest::get("/options/chain/GOOG"));
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_chain_query_formats_filters() {
        let query = ChainQuery::new()
            .expiration(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())
            .strike(dec!(172.5))
            .option_type(OptionType::Put);
        let request = query.apply(ApiRequest::get("/options/chain/GOOG"));

        assert_eq!(
            pairs(&request),
            vec![("expiration", "2025-01-17"), ("strike", "172.5"), ("type", "put")]
        );
    }

    #[test]
    fn test_flow_query_defaults() {
        let request = FlowQuery::default().apply(ApiRequest::get("/options/flow/GOOG"));
        assert_eq!(pairs(&request), vec![("timeframe", "1d"), ("unusual_only", "false")]);

        let request = FlowQuery::new()
            .timeframe("1w")
            .unusual_only(true)
            .min_premium(dec!(100000))
            .apply(ApiRequest::get("/options/flow/GOOG"));
        assert_eq!(
            pairs(&request),
            vec![("timeframe", "1w"), ("unusual_only", "true"), ("min_premium", "100000")]
        );
    }
}
