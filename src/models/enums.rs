//! Enumeration types for the Options.tools API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Option contract side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option
    Call,
    /// Put option
    Put,
    /// Unknown option type
    #[serde(other)]
    Unknown,
}

impl OptionType {
    /// Wire representation, as used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
            OptionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directional read on an options flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positioned for a rise
    Bullish,
    /// Positioned for a fall
    Bearish,
    /// No directional bias
    Neutral,
    /// Unknown sentiment
    #[serde(other)]
    Unknown,
}

/// Kind of trading signal produced by an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    /// Open or add to a position
    Buy,
    /// Reduce or close a position
    Sell,
    /// Keep the current position
    Hold,
    /// Unknown signal type
    #[serde(other)]
    Unknown,
}
