//! Options chain and options flow models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OptionType, Sentiment};

/// A single contract in an options chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Strike price
    pub strike: Decimal,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Call or put
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Best bid
    #[serde(default)]
    pub bid: Option<Decimal>,
    /// Best ask
    #[serde(default)]
    pub ask: Option<Decimal>,
    /// Last trade price
    #[serde(default)]
    pub last: Option<Decimal>,
    /// Contracts traded today
    #[serde(default)]
    pub volume: Option<i64>,
    /// Open interest
    #[serde(default)]
    pub open_interest: Option<i64>,
    /// Implied volatility
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    /// Delta
    #[serde(default)]
    pub delta: Option<f64>,
    /// Gamma
    #[serde(default)]
    pub gamma: Option<f64>,
    /// Theta, per day
    #[serde(default)]
    pub theta: Option<f64>,
    /// Vega
    #[serde(default)]
    pub vega: Option<f64>,
}

impl OptionContract {
    /// Bid-ask spread, when both sides are quoted.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.ask, self.bid) {
            (Some(ask), Some(bid)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint between bid and ask, when both sides are quoted.
    pub fn mid(&self) -> Option<Decimal> {
        match (self.ask, self.bid) {
            (Some(ask), Some(bid)) => Some((ask + bid) / Decimal::TWO),
            _ => None,
        }
    }
}

/// Options chain for one underlying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsChain {
    /// Underlying ticker
    pub ticker: String,
    /// Underlying spot price
    pub spot_price: Decimal,
    /// Snapshot time
    pub timestamp: DateTime<Utc>,
    /// Contracts in the chain
    pub options: Vec<OptionContract>,
}

impl OptionsChain {
    /// Call contracts in the chain.
    pub fn calls(&self) -> impl Iterator<Item = &OptionContract> {
        self.options.iter().filter(|o| o.option_type == OptionType::Call)
    }

    /// Put contracts in the chain.
    pub fn puts(&self) -> impl Iterator<Item = &OptionContract> {
        self.options.iter().filter(|o| o.option_type == OptionType::Put)
    }

    /// Distinct expirations, sorted ascending.
    pub fn expirations(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.options.iter().map(|o| o.expiration).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }
}

/// A single order in the options flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowOrder {
    /// Execution time
    pub timestamp: DateTime<Utc>,
    /// Underlying ticker
    pub ticker: String,
    /// Strike price
    pub strike: Decimal,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Call or put
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Contracts
    pub size: i64,
    /// Total premium paid
    pub premium: Decimal,
    /// Whether the order swept multiple exchanges
    pub is_sweep: bool,
    /// Whether the order was flagged as unusual
    pub is_unusual: bool,
    /// Directional read
    pub sentiment: Sentiment,
}

/// Aggregated options flow for one underlying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsFlow {
    /// Underlying ticker
    pub ticker: String,
    /// Window covered, e.g. "1d"
    pub timeframe: String,
    /// Orders in the window
    pub orders: Vec<FlowOrder>,
    /// Premium across all orders
    pub total_premium: Decimal,
    /// Premium on bullish orders
    pub bullish_premium: Decimal,
    /// Premium on bearish orders
    pub bearish_premium: Decimal,
    /// Number of unusual orders
    pub unusual_count: i64,
}

impl OptionsFlow {
    /// Bullish minus bearish premium.
    pub fn net_premium(&self) -> Decimal {
        self.bullish_premium - self.bearish_premium
    }

    /// Orders that swept multiple exchanges.
    pub fn sweeps(&self) -> impl Iterator<Item = &FlowOrder> {
        self.orders.iter().filter(|o| o.is_sweep)
    }
}
