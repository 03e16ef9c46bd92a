//! Core projection loop for yearly compound growth

use log::debug;

use super::params::InvestmentParameters;
use super::records::{ProjectionResult, YearlyRecord};
use crate::error::Result;

/// Run a projection for one parameter set.
///
/// Interest for each year is earned on the balance carried in from the
/// previous year, then the annual contribution is added. Nothing is rounded;
/// rounding belongs to whoever formats the numbers.
pub fn project(params: &InvestmentParameters) -> Result<ProjectionResult> {
    params.validate()?;

    let rate = params.return_rate();
    let mut result = ProjectionResult::new(*params);
    let mut current_value = params.initial_investment;

    for year in 1..=params.duration {
        let interest = current_value * rate;
        current_value += interest + params.annual_investment;

        result.add_record(YearlyRecord {
            year,
            interest,
            value_end_of_year: current_value,
            annual_investment: params.annual_investment,
        });
    }

    debug!(
        "projected {} years at {}%: final value {:.2}",
        params.duration,
        params.expected_return,
        result.final_value()
    );

    Ok(result)
}

/// Yearly records for one parameter set, without the surrounding result
pub fn calculate_investment_results(params: &InvestmentParameters) -> Result<Vec<YearlyRecord>> {
    project(params).map(ProjectionResult::into_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvestmentError;
    use approx::assert_relative_eq;

    fn params(initial: f64, annual: f64, rate: f64, duration: u32) -> InvestmentParameters {
        InvestmentParameters::new(initial, annual, rate, duration).unwrap()
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let records = calculate_investment_results(&params(1000.0, 500.0, 7.0, 0)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_single_year_half_return() {
        let records = calculate_investment_results(&params(1000.0, 0.0, 50.0, 1)).unwrap();
        assert_eq!(
            records,
            vec![YearlyRecord {
                year: 1,
                interest: 500.0,
                value_end_of_year: 1500.0,
                annual_investment: 0.0,
            }]
        );
    }

    #[test]
    fn test_contributions_only() {
        let records = calculate_investment_results(&params(0.0, 1000.0, 0.0, 3)).unwrap();
        let values: Vec<f64> = records.iter().map(|r| r.value_end_of_year).collect();
        assert_eq!(values, vec![1000.0, 2000.0, 3000.0]);
        assert!(records.iter().all(|r| r.interest == 0.0));
    }

    #[test]
    fn test_length_and_year_numbering() {
        let records = calculate_investment_results(&params(2500.0, 300.0, 4.5, 25)).unwrap();
        assert_eq!(records.len(), 25);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_balance_roll_forward() {
        let p = params(10_000.0, 1_200.0, 6.0, 30);
        let records = calculate_investment_results(&p).unwrap();

        let mut previous = p.initial_investment;
        for record in &records {
            assert_relative_eq!(
                record.value_end_of_year,
                previous + record.interest + p.annual_investment,
                max_relative = 1e-12
            );
            assert_relative_eq!(record.interest, previous * 0.06, max_relative = 1e-12);
            assert_eq!(record.annual_investment, p.annual_investment);
            previous = record.value_end_of_year;
        }
    }

    #[test]
    fn test_default_parameters() {
        let result = project(&InvestmentParameters::default()).unwrap();
        let first = result.records()[0];
        assert_relative_eq!(first.interest, 600.0, max_relative = 1e-12);
        assert_relative_eq!(first.value_end_of_year, 11_800.0, max_relative = 1e-12);

        // Closed form: P(1+r)^n + C((1+r)^n - 1)/r
        let growth = 1.06_f64.powi(10);
        let expected = 10_000.0 * growth + 1_200.0 * (growth - 1.0) / 0.06;
        assert_relative_eq!(result.final_value(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_return_shrinks_balance() {
        let records = calculate_investment_results(&params(1000.0, 0.0, -10.0, 2)).unwrap();
        assert_relative_eq!(records[0].interest, -100.0, max_relative = 1e-12);
        assert_relative_eq!(records[1].value_end_of_year, 810.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let bad = InvestmentParameters {
            initial_investment: 1000.0,
            annual_investment: 0.0,
            expected_return: f64::NAN,
            duration: 5,
        };
        let err = project(&bad).unwrap_err();
        assert!(matches!(
            err,
            InvestmentError::InvalidArgument { field: "expected_return", .. }
        ));
    }

    #[test]
    fn test_oversized_duration_rejected_before_allocating() {
        let bad = InvestmentParameters {
            duration: 3_000_000_000,
            ..InvestmentParameters::default()
        };
        let err = project(&bad).unwrap_err();
        assert!(matches!(
            err,
            InvestmentError::InvalidArgument { field: "duration", .. }
        ));
    }

    #[test]
    fn test_repeatable() {
        let p = params(123.45, 67.89, 3.21, 40);
        assert_eq!(project(&p).unwrap(), project(&p).unwrap());
    }
}
