//! Data models for the Options.tools API.
//!
//! Records are decoded from the `data` member of a successful response
//! envelope. Models are organized by domain:
//!
//! - [`primitives`] - The normalised [`Ticker`] type
//! - [`enums`] - Option types, sentiments and signal types
//! - [`options`] - Options chains and options flow
//! - [`sec`] - SEC filings
//! - [`analysis`] - Entry and exit analysis
//! - [`portfolio`] - Portfolio optimisation

pub mod primitives;
pub mod enums;
pub mod options;
pub mod sec;
pub mod analysis;
pub mod portfolio;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use options::*;
pub use sec::*;
pub use analysis::*;
pub use portfolio::*;
