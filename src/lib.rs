//! Investment Calculator - yearly compound-growth projections
//!
//! This library provides:
//! - Year-by-year projection of an initial investment with a fixed annual
//!   contribution and an expected rate of return
//! - Currency formatting for presenting the results
//! - Batch and return-rate sweep runs over many parameter sets
//! - CSV input of parameter sets and CSV / JSON export of projections

pub mod error;
pub mod format;
pub mod loader;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{InvestmentError, Result};
pub use format::{CurrencyFormatter, FormatterConfig};
pub use projection::{
    calculate_investment_results, project, InvestmentParameters, ProjectionResult,
    ProjectionSummary, ResultRow, YearlyRecord,
};
pub use scenario::ScenarioRunner;
