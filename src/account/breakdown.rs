//! Per-type totals of an account snapshot

use serde::{Deserialize, Serialize};

use super::{Account, AccountType};

/// Count and summed current value for one account type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeTotals {
    pub count: usize,
    /// Sum of current values. Debts are summed as outstanding magnitudes.
    pub total: f64,
}

/// Current (unprojected) holdings grouped by account type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBreakdown {
    pub savings: TypeTotals,
    pub investments: TypeTotals,
    pub real_estate: TypeTotals,
    pub debts: TypeTotals,
}

impl AccountBreakdown {
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let mut breakdown = Self::default();
        for account in accounts {
            let (slot, amount) = match account.account_type {
                AccountType::Savings => (&mut breakdown.savings, account.current_value),
                AccountType::Investment => (&mut breakdown.investments, account.current_value),
                AccountType::RealEstate => (&mut breakdown.real_estate, account.current_value),
                AccountType::Debt => (&mut breakdown.debts, account.principal()),
            };
            slot.count += 1;
            slot.total += amount;
        }
        breakdown
    }

    pub fn get(&self, account_type: AccountType) -> TypeTotals {
        match account_type {
            AccountType::Savings => self.savings,
            AccountType::Investment => self.investments,
            AccountType::RealEstate => self.real_estate,
            AccountType::Debt => self.debts,
        }
    }

    /// Total of the three asset types
    pub fn total_assets(&self) -> f64 {
        self.savings.total + self.investments.total + self.real_estate.total
    }
}
