//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::{Error, Result};

/// A ticker symbol, always upper case (e.g., "GOOG", "SPY").
///
/// Every endpoint taking a ticker normalises it through this type, so
/// `"goog"` and `"GOOG"` address the same resource.
///
/// # Example
///
/// ```
/// use options_tools_rs::Ticker;
///
/// let ticker = Ticker::new("goog").unwrap();
/// assert_eq!(ticker.as_str(), "GOOG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Create a ticker, upper-casing the input.
    ///
    /// Returns [`Error::InvalidSymbol`] for empty or whitespace-only input.
    pub fn new(s: impl AsRef<str>) -> Result<Self> {
        let s = s.as_ref();
        if s.trim().is_empty() {
            return Err(Error::InvalidSymbol(s.to_string()));
        }
        Ok(Self(s.to_uppercase()))
    }

    /// Get the ticker as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ticker percent-encoded for use as a URL path segment.
    pub(crate) fn path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Ticker {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&Ticker> for Ticker {
    type Error = Error;

    fn try_from(t: &Ticker) -> Result<Self> {
        Ok(t.clone())
    }
}
