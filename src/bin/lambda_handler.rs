//! AWS Lambda handler for investment projections
//!
//! Accepts projection parameters as JSON and returns the yearly records,
//! a summary and the headline figures formatted as currency.

use investment_calculator::projection::RawParameters;
use investment_calculator::{
    CurrencyFormatter, FormatterConfig, InvestmentParameters, ProjectionSummary, ScenarioRunner,
    YearlyRecord,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for a projection; missing fields fall back to the calculator defaults
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    #[serde(default = "default_initial")]
    pub initial_investment: f64,

    #[serde(default = "default_annual")]
    pub annual_investment: f64,

    /// Percent, e.g. 6 for 6%
    #[serde(default = "default_return")]
    pub expected_return: f64,

    /// Years; signed so negative values get a proper error message
    #[serde(default = "default_duration")]
    pub duration: i64,

    /// Fraction digits for the formatted figures (default: 0)
    #[serde(default)]
    pub fraction_digits: u8,
}

fn default_initial() -> f64 { InvestmentParameters::default().initial_investment }
fn default_annual() -> f64 { InvestmentParameters::default().annual_investment }
fn default_return() -> f64 { InvestmentParameters::default().expected_return }
fn default_duration() -> i64 { i64::from(InvestmentParameters::default().duration) }

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub annual_data: Vec<YearlyRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<FormattedSummary>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSummary {
    pub final_value: String,
    pub total_interest: String,
    pub total_contributions: String,
}

fn error_response(message: String, start: std::time::Instant) -> ProjectionResponse {
    warn!("rejected projection request: {}", message);
    ProjectionResponse {
        annual_data: Vec::new(),
        summary: None,
        formatted: None,
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: Some(message),
    }
}

/// Decode and run one request; anything that does not fit the request
/// shape is reported in `error` like any other validation problem
fn respond(payload: Value) -> ProjectionResponse {
    match serde_json::from_value::<ProjectionRequest>(payload) {
        Ok(request) => build_response(request),
        Err(e) => error_response(format!("invalid request: {}", e), std::time::Instant::now()),
    }
}

/// Run the projection for one request; validation problems end up in `error`
fn build_response(request: ProjectionRequest) -> ProjectionResponse {
    let start = std::time::Instant::now();

    let raw = RawParameters {
        initial_investment: request.initial_investment,
        annual_investment: request.annual_investment,
        expected_return: request.expected_return,
        duration: request.duration,
    };
    let params = match InvestmentParameters::try_from(raw) {
        Ok(p) => p,
        Err(e) => return error_response(e.to_string(), start),
    };

    let formatter = match CurrencyFormatter::new(
        FormatterConfig::usd().with_fraction_digits(request.fraction_digits),
    ) {
        Ok(f) => f,
        Err(e) => return error_response(e.to_string(), start),
    };

    let result = match ScenarioRunner::sequential().run(&params) {
        Ok(r) => r,
        Err(e) => return error_response(e.to_string(), start),
    };

    let summary = result.summary();
    let formatted = FormattedSummary {
        final_value: formatter.format(summary.final_value),
        total_interest: formatter.format(summary.total_interest),
        total_contributions: formatter.format(summary.total_contributions),
    };

    info!(
        "projected {} years, final value {}",
        summary.years, formatted.final_value
    );

    ProjectionResponse {
        annual_data: result.into_records(),
        summary: Some(summary),
        formatted: Some(formatted),
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<Value>) -> Result<ProjectionResponse, Error> {
    Ok(respond(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
