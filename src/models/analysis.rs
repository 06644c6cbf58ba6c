//! Entry and exit analysis models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::SignalType;

/// One signal contributing to an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Buy, sell or hold
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// Strength on a 0-100 scale
    pub strength: f64,
    /// Human-readable rationale
    pub reason: String,
    /// Model confidence
    pub confidence: f64,
}

/// Result of an entry or exit analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Analysed ticker
    pub ticker: String,
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
    /// Contributing signals
    pub signals: Vec<Signal>,
    /// Suggested action
    pub recommended_action: String,
    /// Risk score
    pub risk_score: f64,
    /// Expected return as a fraction
    pub expected_return: f64,
    /// Suggested stop loss price
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Suggested take profit price
    #[serde(default)]
    pub take_profit: Option<Decimal>,
}

impl AnalysisResult {
    /// The signal with the highest strength.
    pub fn strongest_signal(&self) -> Option<&Signal> {
        self.signals
            .iter()
            .max_by(|a, b| a.strength.total_cmp(&b.strength))
    }
}
