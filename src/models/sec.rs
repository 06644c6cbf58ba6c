//! SEC filing models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A filing pulled from SEC EDGAR.
///
/// `parsed_data` holds filing-type specific fields extracted by the API,
/// e.g. `events` for 8-K filings or `financial_highlights` for 10-K/10-Q.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecFiling {
    /// Issuer ticker
    pub ticker: String,
    /// Form type, e.g. "10-K"
    pub filing_type: String,
    /// Date the filing was accepted
    pub filing_date: NaiveDate,
    /// EDGAR accession number
    pub accession_number: String,
    /// Link to the filing
    pub url: String,
    /// Structured data extracted from the filing
    pub parsed_data: Map<String, Value>,
}

impl SecFiling {
    /// Returns `true` for annual and quarterly reports.
    pub fn is_periodic_report(&self) -> bool {
        matches!(self.filing_type.as_str(), "10-K" | "10-Q")
    }

    /// A field from `parsed_data`.
    pub fn parsed(&self, key: &str) -> Option<&Value> {
        self.parsed_data.get(key)
    }
}
