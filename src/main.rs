//! Investment Calculator CLI
//!
//! Projects a single parameter set as a yearly table, or a whole CSV file of
//! parameter sets as one summary line each.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use investment_calculator::loader::{load_parameters, write_results_csv, write_results_json};
use investment_calculator::projection::RawParameters;
use investment_calculator::{
    CurrencyFormatter, FormatterConfig, InvestmentParameters, ProjectionResult, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "investment_calculator", version, about = "Project investment growth year by year")]
struct Args {
    /// Starting balance [default: 10000]
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,

    /// Contribution added at the end of each year [default: 1200]
    #[arg(long, allow_negative_numbers = true)]
    annual: Option<f64>,

    /// Expected annual return in percent, 6 means 6% [default: 6]
    #[arg(long = "return", allow_negative_numbers = true)]
    expected_return: Option<f64>,

    /// Number of years to project [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<i64>,

    /// CSV file of parameter sets to project as a batch
    #[arg(long, conflicts_with_all = ["initial", "annual", "expected_return", "duration", "output"])]
    scenarios: Option<PathBuf>,

    /// Write the yearly table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the projection as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Fraction digits shown for currency amounts
    #[arg(long, default_value_t = 0)]
    fraction_digits: u8,

    /// Project scenarios on the current thread only
    #[arg(long)]
    no_parallel: bool,
}

impl Args {
    fn parameters(&self) -> Result<InvestmentParameters> {
        let defaults = InvestmentParameters::default();
        let raw = RawParameters {
            initial_investment: self.initial.unwrap_or(defaults.initial_investment),
            annual_investment: self.annual.unwrap_or(defaults.annual_investment),
            expected_return: self.expected_return.unwrap_or(defaults.expected_return),
            duration: self.duration.unwrap_or(i64::from(defaults.duration)),
        };
        Ok(InvestmentParameters::try_from(raw)?)
    }

    fn runner(&self) -> ScenarioRunner {
        if self.no_parallel {
            ScenarioRunner::sequential()
        } else {
            ScenarioRunner::new()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let formatter = CurrencyFormatter::new(
        FormatterConfig::usd().with_fraction_digits(args.fraction_digits),
    )?;

    match &args.scenarios {
        Some(path) => run_scenarios(&args, path, &formatter),
        None => run_single(&args, &formatter),
    }
}

fn run_single(args: &Args, formatter: &CurrencyFormatter) -> Result<()> {
    let params = args.parameters()?;
    let result = args.runner().run(&params)?;

    if args.json {
        write_results_json(io::stdout().lock(), &result)?;
        println!();
    } else {
        print_table(&result, formatter);
    }

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_results_csv(BufWriter::new(file), &result)?;
        info!("wrote {} rows to {}", result.annual_data.len(), path.display());
        if !args.json {
            println!("\nFull results written to: {}", path.display());
        }
    }

    Ok(())
}

fn run_scenarios(args: &Args, path: &Path, formatter: &CurrencyFormatter) -> Result<()> {
    let scenarios = load_parameters(path)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
    let results = args.runner().run_batch(&scenarios);

    if args.json {
        let ok: Vec<&ProjectionResult> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        serde_json::to_writer_pretty(io::stdout().lock(), &ok)?;
        println!();
    } else {
        println!(
            "{:>4} {:>14} {:>12} {:>8} {:>5} {:>18} {:>18}",
            "#", "Initial", "Annual", "Return", "Years", "Final Value", "Total Interest"
        );
        println!("{}", "-".repeat(85));
    }

    let mut failures = 0;
    for (i, (params, result)) in scenarios.iter().zip(&results).enumerate() {
        match result {
            Ok(result) if !args.json => {
                let summary = result.summary();
                println!(
                    "{:>4} {:>14} {:>12} {:>7}% {:>5} {:>18} {:>18}",
                    i + 1,
                    formatter.format(params.initial_investment),
                    formatter.format(params.annual_investment),
                    params.expected_return,
                    params.duration,
                    formatter.format(summary.final_value),
                    formatter.format(summary.total_interest),
                );
            }
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                eprintln!("scenario {}: {}", i + 1, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} scenarios failed", failures, scenarios.len());
    }
    Ok(())
}

fn print_table(result: &ProjectionResult, formatter: &CurrencyFormatter) {
    let params = &result.parameters;
    println!("Investment Calculator");
    println!("=====================\n");
    println!("  Initial Investment: {}", formatter.format(params.initial_investment));
    println!("  Annual Investment:  {}", formatter.format(params.annual_investment));
    println!("  Expected Return:    {}%", params.expected_return);
    println!("  Duration:           {} years", params.duration);
    println!();

    if result.annual_data.is_empty() {
        println!("No years to project.");
        return;
    }

    println!(
        "{:>5} {:>20} {:>18} {:>18} {:>20}",
        "Year", "Investment Value", "Interest (Year)", "Total Interest", "Invested Capital"
    );
    println!("{}", "-".repeat(85));

    for row in result.rows() {
        println!(
            "{:>5} {:>20} {:>18} {:>18} {:>20}",
            row.year,
            formatter.format(row.value_end_of_year),
            formatter.format(row.interest),
            formatter.format(row.total_interest),
            formatter.format(row.invested_capital),
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final Value:         {}", formatter.format(summary.final_value));
    println!("  Total Contributions: {}", formatter.format(summary.total_contributions));
    println!("  Total Interest:      {}", formatter.format(summary.total_interest));
}
