//! CSV input of parameter sets and CSV / JSON export of projections
//!
//! Scenario files use the same column names as the JSON API:
//!
//! ```text
//! initialInvestment,annualInvestment,expectedReturn,duration
//! 10000,1200,6,10
//! ```

use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};
use log::{info, warn};

use crate::error::{InvestmentError, Result};
use crate::projection::{InvestmentParameters, ProjectionResult, RawParameters};

/// Load all parameter sets from a CSV file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentParameters>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let scenarios = read_parameters(reader)?;
    info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load parameter sets from any reader (e.g., string buffer, request body)
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<Vec<InvestmentParameters>> {
    read_parameters(Reader::from_reader(reader))
}

fn read_parameters<R: Read>(mut reader: Reader<R>) -> Result<Vec<InvestmentParameters>> {
    let mut scenarios = Vec::new();

    for (index, result) in reader.deserialize::<RawParameters>().enumerate() {
        let row = index + 1;
        let params = result
            .map_err(InvestmentError::from)
            .and_then(InvestmentParameters::try_from)
            .map_err(|source| {
                warn!("rejected scenario row {}: {}", row, source);
                InvestmentError::CsvRow {
                    row,
                    source: Box::new(source),
                }
            })?;
        scenarios.push(params);
    }

    Ok(scenarios)
}

/// Column names of the yearly CSV export, in `ResultRow` field order
pub const RESULT_CSV_HEADER: [&str; 5] = [
    "year",
    "valueEndOfYear",
    "interest",
    "totalInterest",
    "investedCapital",
];

/// Write one row per projected year, with running totals.
/// The header is written even when no years were projected.
pub fn write_results_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    let rows = result.rows();
    if rows.is_empty() {
        csv_writer.write_record(RESULT_CSV_HEADER)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the full projection as pretty-printed JSON
pub fn write_results_json<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    const SCENARIOS: &str = "\
initialInvestment,annualInvestment,expectedReturn,duration
10000,1200,6,10
1000,0,50,1
0,1000,0,0
";

    #[test]
    fn test_load_parameters_from_reader() {
        let scenarios = load_parameters_from_reader(SCENARIOS.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0], InvestmentParameters::default());
        assert_eq!(scenarios[1].expected_return, 50.0);
        assert_eq!(scenarios[2].duration, 0);
    }

    #[test]
    fn test_negative_duration_reports_row() {
        let input = "\
initialInvestment,annualInvestment,expectedReturn,duration
1000,0,5,3
1000,0,5,-2
";
        let err = load_parameters_from_reader(input.as_bytes()).unwrap_err();
        match err {
            InvestmentError::CsvRow { row, ref source } => {
                assert_eq!(row, 2);
                assert!(source.is_invalid_argument());
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_number_reports_row() {
        let input = "\
initialInvestment,annualInvestment,expectedReturn,duration
ten,0,5,3
";
        let err = load_parameters_from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, InvestmentError::CsvRow { row: 1, .. }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_missing_file() {
        let err = load_parameters("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, InvestmentError::Csv(_)));
    }

    #[test]
    fn test_write_results_csv() {
        let params = InvestmentParameters::new(0.0, 1000.0, 0.0, 2).unwrap();
        let result = project(&params).unwrap();

        let mut buf = Vec::new();
        write_results_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "year,valueEndOfYear,interest,totalInterest,investedCapital"
        );
        assert_eq!(lines[0], RESULT_CSV_HEADER.join(","));
        assert_eq!(lines[1], "1,1000.0,0.0,0.0,1000.0");
        assert_eq!(lines[2], "2,2000.0,0.0,0.0,2000.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_results_csv_zero_years() {
        let params = InvestmentParameters::new(1000.0, 100.0, 5.0, 0).unwrap();
        let result = project(&params).unwrap();

        let mut buf = Vec::new();
        write_results_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text, "year,valueEndOfYear,interest,totalInterest,investedCapital\n");
    }

    #[test]
    fn test_write_results_json() {
        let params = InvestmentParameters::new(1000.0, 0.0, 50.0, 1).unwrap();
        let result = project(&params).unwrap();

        let mut buf = Vec::new();
        write_results_json(&mut buf, &result).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["parameters"]["expectedReturn"], 50.0);
        assert_eq!(value["annualData"][0]["valueEndOfYear"], 1500.0);
        assert_eq!(value["annualData"][0]["interest"], 500.0);
    }
}
