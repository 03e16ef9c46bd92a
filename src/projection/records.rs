//! Output structures for investment projections

use serde::{Deserialize, Serialize};

use super::params::{InvestmentParameters, MAX_DURATION};

/// One simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    /// Year number, starting at 1
    pub year: u32,

    /// Interest earned on the balance carried into this year
    pub interest: f64,

    /// Balance after interest and this year's contribution
    pub value_end_of_year: f64,

    /// Contribution added this year
    pub annual_investment: f64,
}

/// Complete projection for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Inputs the projection was run with
    pub parameters: InvestmentParameters,

    /// Yearly records in ascending year order
    pub annual_data: Vec<YearlyRecord>,
}

impl ProjectionResult {
    pub fn new(parameters: InvestmentParameters) -> Self {
        Self {
            parameters,
            annual_data: Vec::with_capacity(parameters.duration.min(MAX_DURATION) as usize),
        }
    }

    /// Add a yearly record
    pub fn add_record(&mut self, record: YearlyRecord) {
        self.annual_data.push(record);
    }

    pub fn records(&self) -> &[YearlyRecord] {
        &self.annual_data
    }

    pub fn into_records(self) -> Vec<YearlyRecord> {
        self.annual_data
    }

    /// Balance at the end of the last year, or the initial investment when
    /// no years were projected
    pub fn final_value(&self) -> f64 {
        self.annual_data
            .last()
            .map(|r| r.value_end_of_year)
            .unwrap_or(self.parameters.initial_investment)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let years = self.annual_data.len() as u32;
        let total_interest: f64 = self.annual_data.iter().map(|r| r.interest).sum();
        let total_contributions = self.parameters.initial_investment
            + self.parameters.annual_investment * years as f64;

        ProjectionSummary {
            years,
            final_value: self.final_value(),
            total_contributions,
            total_interest,
        }
    }

    /// Table view with running totals, one row per year
    pub fn rows(&self) -> Vec<ResultRow> {
        let initial = self.parameters.initial_investment;
        self.annual_data
            .iter()
            .map(|r| {
                let total_interest =
                    r.value_end_of_year - r.annual_investment * r.year as f64 - initial;
                ResultRow {
                    year: r.year,
                    value_end_of_year: r.value_end_of_year,
                    interest: r.interest,
                    total_interest,
                    invested_capital: r.value_end_of_year - total_interest,
                }
            })
            .collect()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_value: f64,
    /// Initial investment plus every annual contribution
    pub total_contributions: f64,
    pub total_interest: f64,
}

/// A yearly record with cumulative figures, as shown in result tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub year: u32,
    pub value_end_of_year: f64,
    pub interest: f64,
    pub total_interest: f64,
    pub invested_capital: f64,
}
