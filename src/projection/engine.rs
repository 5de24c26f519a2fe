//! Core projection engine for yearly net worth projections

use chrono::{Datelike, Utc};
use log::{debug, trace};

use crate::account::Account;
use super::error::ProjectionError;
use super::growth::{deflate, future_value, is_zero_rate, linear_paydown, remaining_balance};
use super::yearly::{ProjectionResult, YearlyProjection};

/// Default number of years to project
pub const DEFAULT_HORIZON_YEARS: i64 = 30;

/// Default annual inflation in percent
pub const DEFAULT_INFLATION_RATE_PCT: f64 = 2.5;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of years past the as-of year to project (rows = horizon + 1)
    pub horizon_years: i64,

    /// Annual inflation in percent, used to deflate asset values
    pub inflation_rate_pct: f64,

    /// Calendar year of offset 0
    pub as_of_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            inflation_rate_pct: DEFAULT_INFLATION_RATE_PCT,
            as_of_year: Utc::now().year(),
        }
    }
}

impl ProjectionConfig {
    /// Check the hard constraints and return the horizon as a row count bound
    pub fn validate(&self) -> Result<u32, ProjectionError> {
        let horizon = u32::try_from(self.horizon_years)
            .map_err(|_| ProjectionError::InvalidHorizon(self.horizon_years))?;

        let base = 1.0 + self.inflation_rate_pct / 100.0;
        if !self.inflation_rate_pct.is_finite() || base <= 0.0 {
            return Err(ProjectionError::InvalidRate(self.inflation_rate_pct));
        }
        Ok(horizon)
    }
}

/// Main projection engine
///
/// Stateless apart from its configuration: every call recomputes the full sequence
/// from the account snapshot it is given.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project every account over the horizon and aggregate per year
    pub fn project(&self, accounts: &[Account]) -> Result<ProjectionResult, ProjectionError> {
        let horizon = self.config.validate()?;
        debug!(
            "projecting {} accounts over {} years from {} at {}% inflation",
            accounts.len(),
            horizon,
            self.config.as_of_year,
            self.config.inflation_rate_pct
        );

        let mut result = ProjectionResult::new(
            self.config.as_of_year,
            self.config.inflation_rate_pct,
            horizon as usize,
        );

        for offset in 0..=horizon {
            let row = self.calculate_year(accounts, offset)?;
            trace!(
                "{}: assets={:.2} debts={:.2} net={:.2}",
                row.year,
                row.total_assets,
                row.total_debts,
                row.total_net_worth
            );
            result.add_row(row);
        }

        Ok(result)
    }

    /// Trajectory of a single account: real value for assets, nominal balance for debts
    pub fn project_account(&self, account: &Account) -> Result<Vec<f64>, ProjectionError> {
        let horizon = self.config.validate()?;
        (0..=horizon).map(|offset| self.account_value(account, offset)).collect()
    }

    /// Fold all accounts into one row
    fn calculate_year(&self, accounts: &[Account], offset: u32) -> Result<YearlyProjection, ProjectionError> {
        let mut row = YearlyProjection::new(self.year_at(offset));
        for account in accounts {
            let value = self.account_value(account, offset)?;
            row.add(account.account_type, value);
        }
        row.close();
        Ok(row)
    }

    /// Value an account contributes at a year offset
    fn account_value(&self, account: &Account, offset: u32) -> Result<f64, ProjectionError> {
        let value = if account.is_debt() {
            self.debt_balance(account, offset.saturating_mul(12))?
        } else {
            self.asset_value(account, offset)
        };

        if !value.is_finite() {
            return Err(degenerate(account, format!("value is not finite at year offset {}", offset)));
        }
        Ok(value)
    }

    /// Inflation-adjusted asset value
    fn asset_value(&self, account: &Account, offset: u32) -> f64 {
        let nominal = future_value(
            account.current_value,
            account.annual_rate(),
            account.monthly_contribution,
            offset,
        );
        deflate(nominal, self.config.inflation_rate_pct, offset)
    }

    /// Outstanding debt balance after `months_elapsed` months. Never deflated.
    fn debt_balance(&self, account: &Account, months_elapsed: u32) -> Result<f64, ProjectionError> {
        let principal = account.principal();

        let Some(end_date) = account.end_date else {
            // Ongoing debt: flat paydown, no interest modeled
            return Ok(linear_paydown(principal, account.payment(), months_elapsed));
        };

        let total_months = (i64::from(end_date.year()) - i64::from(self.config.as_of_year)).max(0) * 12;
        if i64::from(months_elapsed) >= total_months {
            return Ok(0.0);
        }

        let monthly_rate = account.monthly_rate();
        if is_zero_rate(monthly_rate) {
            return Ok(linear_paydown(principal, account.payment(), months_elapsed));
        }

        // total_months > months_elapsed here, and both fit comfortably in u32
        let total_months = total_months as u32;
        remaining_balance(principal, monthly_rate, total_months, months_elapsed).ok_or_else(|| {
            degenerate(
                account,
                format!("amortization denominator is zero for monthly rate {} over {} months", monthly_rate, total_months),
            )
        })
    }

    fn year_at(&self, offset: u32) -> i32 {
        i32::try_from(offset).map_or(i32::MAX, |o| self.config.as_of_year.saturating_add(o))
    }
}

fn degenerate(account: &Account, reason: String) -> ProjectionError {
    ProjectionError::DegenerateAccount {
        id: account.id.clone(),
        reason,
    }
}

/// Project `accounts` over `horizon_years` at `inflation_rate_pct`, starting from `as_of_year`.
///
/// Returns `horizon_years + 1` rows, or an error and no rows at all.
pub fn project(
    accounts: &[Account],
    horizon_years: i64,
    inflation_rate_pct: f64,
    as_of_year: i32,
) -> Result<Vec<YearlyProjection>, ProjectionError> {
    let engine = ProjectionEngine::new(ProjectionConfig {
        horizon_years,
        inflation_rate_pct,
        as_of_year,
    });
    engine.project(accounts).map(ProjectionResult::into_rows)
}
