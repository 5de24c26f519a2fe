//! Scenario runner for batch projections
//!
//! Holds one account snapshot, then runs it under many configurations. Each run is
//! an independent pure projection, so scenarios fan out across threads.

use rayon::prelude::*;

use crate::account::Account;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionResult};

/// Account snapshot plus the machinery to project it under different settings
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(book.snapshot().to_vec());
///
/// for rate in [1.5, 2.5, 4.0] {
///     let config = ProjectionConfig { inflation_rate_pct: rate, ..Default::default() };
///     let result = runner.run(config)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    accounts: Vec<Account>,
}

/// One point of an inflation sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub inflation_rate_pct: f64,
    pub result: ProjectionResult,
}

impl ScenarioRunner {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: ProjectionConfig) -> Result<ProjectionResult, ProjectionError> {
        ProjectionEngine::new(config).project(&self.accounts)
    }

    /// Run multiple scenarios in parallel. Results come back in input order.
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Vec<Result<ProjectionResult, ProjectionError>> {
        configs
            .par_iter()
            .map(|config| self.run(config.clone()))
            .collect()
    }

    /// Re-run `base` once per inflation rate
    pub fn inflation_sweep(&self, base: &ProjectionConfig, rates: &[f64]) -> Result<Vec<SweepPoint>, ProjectionError> {
        rates
            .par_iter()
            .map(|&rate| {
                let config = ProjectionConfig {
                    inflation_rate_pct: rate,
                    ..base.clone()
                };
                self.run(config).map(|result| SweepPoint {
                    inflation_rate_pct: rate,
                    result,
                })
            })
            .collect()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Mutable access for what-if edits between runs
    pub fn accounts_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountBook;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(AccountBook::demo().snapshot().to_vec())
    }

    fn config(inflation_rate_pct: f64) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: 20,
            inflation_rate_pct,
            as_of_year: 2025,
        }
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = runner();
        let configs: Vec<_> = [1.0, 2.5, 5.0].iter().map(|&r| config(r)).collect();

        let results: Vec<_> = runner
            .run_scenarios(&configs)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(results.len(), 3);

        for (result, config) in results.iter().zip(&configs) {
            assert_eq!(result.inflation_rate_pct, config.inflation_rate_pct);
        }

        // Higher inflation should result in lower real net worth
        let finals: Vec<f64> = results.iter().map(|r| r.summary().final_net_worth).collect();
        assert!(finals[0] > finals[1] && finals[1] > finals[2]);
    }

    #[test]
    fn test_batch_keeps_per_scenario_errors() {
        let runner = runner();
        let results = runner.run_scenarios(&[config(2.5), config(-200.0)]);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ProjectionError::InvalidRate(-200.0)));
    }

    #[test]
    fn test_inflation_sweep_matches_single_runs() {
        let runner = runner();
        let sweep = runner.inflation_sweep(&config(0.0), &[0.0, 3.0]).unwrap();

        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep[1].inflation_rate_pct, 3.0);
        assert_eq!(sweep[1].result, runner.run(config(3.0)).unwrap());
    }

    #[test]
    fn test_what_if_edit() {
        let mut runner = runner();
        let before = runner.run(config(2.5)).unwrap().summary().final_net_worth;

        runner.accounts_mut().retain(|a| !a.is_debt());
        let after = runner.run(config(2.5)).unwrap().summary().final_net_worth;
        assert!(after > before);
    }
}
