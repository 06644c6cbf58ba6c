//! Portfolio optimisation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Allocation suggested for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecommendation {
    /// Ticker
    pub ticker: String,
    /// Capital allocated
    pub allocation: Decimal,
    /// Strategy applied to this position
    pub strategy: String,
    /// Expected return as a fraction
    pub expected_return: f64,
    /// Position risk
    pub risk: f64,
    /// Suggested option trades, in the API's free-form shape
    pub options_trades: Vec<Map<String, Value>>,
}

/// Result of a portfolio optimisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOptimization {
    /// Capital the optimisation was run for
    pub total_capital: Decimal,
    /// Per-ticker recommendations
    pub recommendations: Vec<PortfolioRecommendation>,
    /// Expected portfolio return as a fraction
    pub expected_portfolio_return: f64,
    /// Portfolio risk
    pub portfolio_risk: f64,
    /// Sharpe ratio
    pub sharpe_ratio: f64,
}

impl PortfolioOptimization {
    /// Sum of all allocations.
    pub fn allocated_capital(&self) -> Decimal {
        self.recommendations.iter().map(|r| r.allocation).sum()
    }

    /// Capital left unallocated.
    pub fn unallocated_capital(&self) -> Decimal {
        self.total_capital - self.allocated_capital()
    }
}
