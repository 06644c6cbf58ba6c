//! API service modules for Options.tools endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Options.tools API.

mod account;
mod analysis;
mod options;
mod portfolio;
mod sec;

pub use account::AccountService;
pub use analysis::{AnalysisService, EntryQuery, DEFAULT_RISK_TOLERANCE};
pub use options::{ChainQuery, FlowQuery, OptionsService, DEFAULT_FLOW_TIMEFRAME};
pub use portfolio::{PortfolioRequest, PortfolioService, DEFAULT_RISK_LEVEL, DEFAULT_STRATEGY};
pub use sec::{FilingsQuery, SecService, DEFAULT_FILINGS_LIMIT};
