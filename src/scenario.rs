//! Scenario runner for batch projections
//!
//! Projections are independent pure computations, so a batch can be fanned
//! out across threads with rayon and collected back in input order.

use log::info;
use rayon::prelude::*;

use crate::error::Result;
use crate::projection::{project, InvestmentParameters, ProjectionResult};

/// Runs many projections, optionally in parallel
///
/// # Example
/// ```
/// use investment_calculator::{InvestmentParameters, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = InvestmentParameters::default();
/// let results = runner.sweep_returns(&base, &[4.0, 6.0, 8.0]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    parallel: bool,
}

impl ScenarioRunner {
    /// Create a runner that uses the rayon thread pool
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Create a runner that projects on the calling thread only
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Run a single projection
    pub fn run(&self, params: &InvestmentParameters) -> Result<ProjectionResult> {
        project(params)
    }

    /// Run every parameter set; results line up with the input slice
    pub fn run_batch(&self, scenarios: &[InvestmentParameters]) -> Vec<Result<ProjectionResult>> {
        info!(
            "running {} scenarios ({})",
            scenarios.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        if self.parallel {
            scenarios.par_iter().map(project).collect()
        } else {
            scenarios.iter().map(project).collect()
        }
    }

    /// Project `base` once per expected return, in the order given.
    /// Stops at the first rate that cannot be projected.
    pub fn sweep_returns(
        &self,
        base: &InvestmentParameters,
        expected_returns: &[f64],
    ) -> Result<Vec<ProjectionResult>> {
        let scenarios: Vec<_> = expected_returns
            .iter()
            .map(|&rate| base.with_expected_return(rate))
            .collect();

        self.run_batch(&scenarios).into_iter().collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
