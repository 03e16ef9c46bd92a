//! Projection engine for yearly investment growth

mod params;
mod engine;
mod records;

pub use params::{InvestmentParameters, RawParameters, MAX_DURATION};
pub use engine::{project, calculate_investment_results};
pub use records::{YearlyRecord, ProjectionResult, ProjectionSummary, ResultRow};
