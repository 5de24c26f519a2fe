//! Output structures for projections

use serde::{Deserialize, Serialize};

use crate::account::AccountType;

/// Projected state for a single calendar year
///
/// Asset figures are in today's money; `debts` is the nominal outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: i32,
    pub total_net_worth: f64,
    pub total_assets: f64,
    pub total_debts: f64,
    pub savings: f64,
    pub investments: f64,
    pub real_estate: f64,
    pub debts: f64,
}

impl YearlyProjection {
    /// Create an empty row for the given year
    pub fn new(year: i32) -> Self {
        Self {
            year,
            total_net_worth: 0.0,
            total_assets: 0.0,
            total_debts: 0.0,
            savings: 0.0,
            investments: 0.0,
            real_estate: 0.0,
            debts: 0.0,
        }
    }

    /// Fold one account's value into its category
    pub(crate) fn add(&mut self, account_type: AccountType, value: f64) {
        match account_type {
            AccountType::Savings => self.savings += value,
            AccountType::Investment => self.investments += value,
            AccountType::RealEstate => self.real_estate += value,
            AccountType::Debt => self.debts += value,
        }
    }

    /// Derive totals from the category subtotals once every account is folded
    pub(crate) fn close(&mut self) {
        self.total_assets = self.savings + self.investments + self.real_estate;
        self.total_debts = self.debts;
        self.total_net_worth = self.total_assets - self.total_debts;
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Calendar year of offset 0
    pub as_of_year: i32,

    /// Inflation used to deflate asset values
    pub inflation_rate_pct: f64,

    /// One row per year offset, 0..=horizon
    pub rows: Vec<YearlyProjection>,
}

/// Upper bound on rows reserved up front; longer horizons grow the buffer as rows arrive
const MAX_RESERVED_ROWS: usize = 1024;

impl ProjectionResult {
    pub fn new(as_of_year: i32, inflation_rate_pct: f64, horizon_years: usize) -> Self {
        Self {
            as_of_year,
            inflation_rate_pct,
            rows: Vec::with_capacity(horizon_years.saturating_add(1).min(MAX_RESERVED_ROWS)),
        }
    }

    pub fn add_row(&mut self, row: YearlyProjection) {
        self.rows.push(row);
    }

    /// Number of years projected past the as-of year
    pub fn horizon_years(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Row at a year offset
    pub fn at_offset(&self, offset: usize) -> Option<&YearlyProjection> {
        self.rows.get(offset)
    }

    /// Row for an absolute calendar year
    pub fn for_year(&self, year: i32) -> Option<&YearlyProjection> {
        let offset = usize::try_from(year.checked_sub(self.as_of_year)?).ok()?;
        self.rows.get(offset)
    }

    pub fn into_rows(self) -> Vec<YearlyProjection> {
        self.rows
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let first = self.rows.first().copied().unwrap_or_else(|| YearlyProjection::new(self.as_of_year));
        let last = self.rows.last().copied().unwrap_or(first);

        let net_worth_growth_pct = if first.total_net_worth == 0.0 {
            None
        } else {
            Some((last.total_net_worth - first.total_net_worth) / first.total_net_worth.abs() * 100.0)
        };

        ProjectionSummary {
            horizon_years: self.horizon_years(),
            current_net_worth: first.total_net_worth,
            current_assets: first.total_assets,
            current_debts: first.total_debts,
            final_year: last.year,
            final_net_worth: last.total_net_worth,
            final_assets: last.total_assets,
            final_debts: last.total_debts,
            net_worth_growth_pct,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub horizon_years: usize,
    pub current_net_worth: f64,
    pub current_assets: f64,
    pub current_debts: f64,
    pub final_year: i32,
    pub final_net_worth: f64,
    pub final_assets: f64,
    pub final_debts: f64,
    /// Growth of net worth relative to the magnitude of today's net worth.
    /// `None` when today's net worth is exactly zero.
    pub net_worth_growth_pct: Option<f64>,
}
