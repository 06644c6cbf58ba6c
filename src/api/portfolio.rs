//! Portfolio optimisation service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::{into_record, ApiRequest, ClientInner};
use crate::models::{PortfolioOptimization, Ticker};
use crate::Result;

/// Default optimisation strategy.
pub const DEFAULT_STRATEGY: &str = "balanced";

/// Default portfolio risk level.
pub const DEFAULT_RISK_LEVEL: &str = "moderate";

/// Body of a portfolio optimisation request.
///
/// # Example
///
/// ```
/// use options_tools_rs::PortfolioRequest;
/// use rust_decimal::Decimal;
///
/// let request = PortfolioRequest::new(Decimal::from(100_000), ["goog", "aapl", "msft"])
///     .unwrap()
///     .strategy("income");
/// assert_eq!(request.tickers[0].as_str(), "GOOG");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRequest {
    /// Capital to allocate
    #[serde(with = "rust_decimal::serde::float")]
    pub capital: Decimal,
    /// Candidate tickers
    pub tickers: Vec<Ticker>,
    /// Optimisation strategy, e.g. "balanced"
    pub strategy: String,
    /// Risk level, e.g. "moderate"
    pub risk_level: String,
}

impl PortfolioRequest {
    /// Create a request with the balanced strategy and moderate risk.
    pub fn new<I, S>(capital: Decimal, tickers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tickers = tickers
            .into_iter()
            .map(Ticker::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            capital,
            tickers,
            strategy: DEFAULT_STRATEGY.to_string(),
            risk_level: DEFAULT_RISK_LEVEL.to_string(),
        })
    }

    /// Set the strategy.
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Set the risk level.
    pub fn risk_level(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }
}

/// Service for portfolio optimisation.
pub struct PortfolioService {
    inner: Arc<ClientInner>,
}

impl PortfolioService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Optimise an allocation across the requested tickers.
    pub async fn optimize(&self, request: &PortfolioRequest) -> Result<PortfolioOptimization> {
        let body = serde_json::to_value(request)?;
        let request = ApiRequest::post("/portfolio/optimize", body);

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = PortfolioRequest::new(dec!(100000), ["goog", "Aapl"])
            .unwrap()
            .risk_level("aggressive");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "capital": 100000.0,
                "tickers": ["GOOG", "AAPL"],
                "strategy": "balanced",
                "risk_level": "aggressive"
            })
        );
    }

    #[test]
    fn test_blank_ticker_rejected() {
        let result = PortfolioRequest::new(dec!(1000), ["GOOG", ""]);
        assert!(matches!(result, Err(Error::InvalidSymbol(_))));
    }
}
