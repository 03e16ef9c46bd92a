//! Input parameters for an investment projection

use serde::{Deserialize, Serialize};

use crate::error::{InvestmentError, Result};

/// Longest projection accepted, in years
pub const MAX_DURATION: u32 = 1_000;

/// Inputs for a single projection.
///
/// `expected_return` is a percentage: `5.0` means 5% per year, applied as
/// `expected_return / 100` to the running balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParameters {
    /// Starting balance
    pub initial_investment: f64,

    /// Amount added at the end of every year
    pub annual_investment: f64,

    /// Expected annual return in percent
    pub expected_return: f64,

    /// Number of years to project
    pub duration: u32,
}

impl InvestmentParameters {
    pub fn new(
        initial_investment: f64,
        annual_investment: f64,
        expected_return: f64,
        duration: u32,
    ) -> Result<Self> {
        let params = Self {
            initial_investment,
            annual_investment,
            expected_return,
            duration,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject NaN and infinite amounts or rates, and durations over
    /// [`MAX_DURATION`]
    pub fn validate(&self) -> Result<()> {
        check_duration(i64::from(self.duration))?;
        check_finite("initial_investment", self.initial_investment)?;
        check_finite("annual_investment", self.annual_investment)?;
        check_finite("expected_return", self.expected_return)?;
        Ok(())
    }

    /// Expected return as a fraction (5% -> 0.05)
    pub fn return_rate(&self) -> f64 {
        self.expected_return / 100.0
    }

    /// Same parameters with a different expected return
    pub fn with_expected_return(&self, expected_return: f64) -> Self {
        Self {
            expected_return,
            ..*self
        }
    }
}

impl Default for InvestmentParameters {
    fn default() -> Self {
        Self {
            initial_investment: 10_000.0,
            annual_investment: 1_200.0,
            expected_return: 6.0,
            duration: 10,
        }
    }
}

/// Parameters as they arrive from CSV, JSON or the command line.
///
/// The duration is signed here so a negative value can be reported as an
/// invalid argument instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    pub initial_investment: f64,
    pub annual_investment: f64,
    pub expected_return: f64,
    pub duration: i64,
}

impl TryFrom<RawParameters> for InvestmentParameters {
    type Error = InvestmentError;

    fn try_from(raw: RawParameters) -> Result<Self> {
        check_duration(raw.duration)?;

        // In 0..=MAX_DURATION after the check
        Self::new(
            raw.initial_investment,
            raw.annual_investment,
            raw.expected_return,
            raw.duration as u32,
        )
    }
}

fn check_duration(duration: i64) -> Result<()> {
    if duration < 0 {
        return Err(InvestmentError::invalid(
            "duration",
            format!("must not be negative (got {})", duration),
        ));
    }
    if duration > i64::from(MAX_DURATION) {
        return Err(InvestmentError::invalid(
            "duration",
            format!("must be at most {} years (got {})", MAX_DURATION, duration),
        ));
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvestmentError::invalid(
            field,
            format!("must be a finite number (got {})", value),
        ))
    }
}
