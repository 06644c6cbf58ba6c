//! Entry and exit analysis service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::{into_record, ApiRequest, ClientInner};
use crate::models::{AnalysisResult, Ticker};
use crate::Result;

/// Default risk tolerance for entry analysis.
pub const DEFAULT_RISK_TOLERANCE: &str = "moderate";

/// Parameters for an entry analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryQuery {
    /// Capital available for the position; omitted when unset
    pub capital: Option<Decimal>,
    /// Risk tolerance, e.g. "conservative", "moderate", "aggressive"
    pub risk_tolerance: String,
}

impl Default for EntryQuery {
    fn default() -> Self {
        Self {
            capital: None,
            risk_tolerance: DEFAULT_RISK_TOLERANCE.to_string(),
        }
    }
}

impl EntryQuery {
    /// Query with moderate risk tolerance and no capital constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capital available.
    pub fn capital(mut self, capital: Decimal) -> Self {
        self.capital = Some(capital);
        self
    }

    /// Set the risk tolerance.
    pub fn risk_tolerance(mut self, risk_tolerance: impl Into<String>) -> Self {
        self.risk_tolerance = risk_tolerance.into();
        self
    }
}

#[derive(Serialize)]
struct ExitBody<'a, P: Serialize> {
    #[serde(with = "rust_decimal::serde::float")]
    entry_price: Decimal,
    position: &'a P,
}

/// Service for trade entry and exit analysis.
///
/// # Example
///
/// ```no_run
/// use options_tools_rs::EntryQuery;
/// use rust_decimal::Decimal;
///
/// # use options_tools_rs::{OptionsToolsClient, Result};
/// # async fn example(client: OptionsToolsClient) -> Result<()> {
/// let analysis = client
///     .analysis()
///     .entry("GOOG", EntryQuery::new().capital(Decimal::from(10_000)))
///     .await?;
/// println!("{} (risk {})", analysis.recommended_action, analysis.risk_score);
///
/// let position = serde_json::json!({"quantity": 100, "side": "long"});
/// let exit = client.analysis().exit("GOOG", Decimal::from(150), &position).await?;
/// println!("stop loss: {:?}", exit.stop_loss);
/// # Ok(())
/// # }
/// ```
pub struct AnalysisService {
    inner: Arc<ClientInner>,
}

impl AnalysisService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Analyse whether and how to enter a position.
    pub async fn entry(
        &self,
        ticker: impl AsRef<str>,
        query: EntryQuery,
    ) -> Result<AnalysisResult> {
        let ticker = Ticker::new(ticker)?;
        let request = ApiRequest::get(format!("/analysis/entry/{}", ticker.path_segment()))
            .query("risk_tolerance", query.risk_tolerance)
            .query_opt("capital", query.capital);

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }

    /// Analyse an open position for exit.
    ///
    /// `position` is sent verbatim as the `position` member of the body.
    pub async fn exit<P: Serialize>(
        &self,
        ticker: impl AsRef<str>,
        entry_price: Decimal,
        position: &P,
    ) -> Result<AnalysisResult> {
        let ticker = Ticker::new(ticker)?;
        let body = serde_json::to_value(ExitBody {
            entry_price,
            position,
        })?;
        let request = ApiRequest::post(format!("/analysis/exit/{}", ticker.path_segment()), body);

        let data = self.inner.dispatch(&request).await?;
        into_record(data)
    }
}
