//! Account data structures matching the account store format

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AccountError;

/// Kind of financial position. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// High-yield savings, checking, CDs, money market
    Savings,
    /// 401(k), IRA, brokerage accounts
    Investment,
    /// Primary residence, rental property, land
    RealEstate,
    /// Mortgages, credit cards, student loans
    Debt,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Savings,
        AccountType::Investment,
        AccountType::RealEstate,
        AccountType::Debt,
    ];

    pub fn is_debt(&self) -> bool {
        matches!(self, AccountType::Debt)
    }

    /// Get the string representation used by the account store
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Investment => "investment",
            AccountType::RealEstate => "real_estate",
            AccountType::Debt => "debt",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "savings" => Ok(AccountType::Savings),
            "investment" => Ok(AccountType::Investment),
            "real_estate" => Ok(AccountType::RealEstate),
            "debt" => Ok(AccountType::Debt),
            other => Err(AccountError::UnknownType(other.to_string())),
        }
    }
}

/// A single financial account
///
/// Debts carry a negative `current_value` (the outstanding balance) and a negative
/// `monthly_contribution` (the payment). The projection engine only ever reads
/// magnitudes for debts, so a wrongly signed debt still projects sensibly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier
    pub id: String,

    /// Owning user
    #[serde(default)]
    pub user_id: String,

    /// Display name, e.g. "Emergency Fund"
    #[serde(default)]
    pub name: String,

    /// Account type
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Free-text category, e.g. "High Yield Savings"
    #[serde(default)]
    pub category: String,

    /// Current balance (negative for debts)
    pub current_value: f64,

    /// Nominal annual rate in percent (6.5 means 6.5%)
    pub interest_rate: f64,

    /// Recurring monthly flow (negative for debt payments)
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Date the account began accruing
    pub start_date: NaiveDate,

    /// Scheduled payoff date for debts
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        current_value: f64,
        interest_rate: f64,
        monthly_contribution: f64,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: String::new(),
            name: name.into(),
            account_type,
            category: String::new(),
            current_value,
            interest_rate,
            monthly_contribution,
            start_date,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_debt(&self) -> bool {
        self.account_type.is_debt()
    }

    /// Annual rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.interest_rate / 100.0
    }

    /// Monthly rate as a decimal (nominal annual / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate() / 12.0
    }

    /// Outstanding debt balance, always non-negative
    pub fn principal(&self) -> f64 {
        self.current_value.abs()
    }

    /// Monthly debt payment, always non-negative
    pub fn payment(&self) -> f64 {
        self.monthly_contribution.abs()
    }

    /// Apply the store convention: debts hold negative magnitudes for balance and payment
    pub fn normalize_sign(&mut self) {
        if self.is_debt() {
            self.current_value = -self.current_value.abs();
            self.monthly_contribution = -self.monthly_contribution.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_account_type_round_trip_str() {
        for ty in AccountType::ALL {
            assert_eq!(ty.as_str().parse::<AccountType>().unwrap(), ty);
        }
        assert!(matches!(
            "crypto".parse::<AccountType>(),
            Err(AccountError::UnknownType(s)) if s == "crypto"
        ));
    }

    #[test]
    fn test_normalize_sign_only_touches_debts() {
        let mut loan = Account::new("1", "Car", AccountType::Debt, 18_000.0, 5.0, 350.0, date(2024, 1, 1));
        loan.normalize_sign();
        assert_eq!(loan.current_value, -18_000.0);
        assert_eq!(loan.monthly_contribution, -350.0);
        assert_eq!(loan.principal(), 18_000.0);
        assert_eq!(loan.payment(), 350.0);

        let mut savings = Account::new("2", "Cash", AccountType::Savings, 1_000.0, 1.0, -50.0, date(2024, 1, 1));
        savings.normalize_sign();
        assert_eq!(savings.current_value, 1_000.0);
        assert_eq!(savings.monthly_contribution, -50.0);
    }

    #[test]
    fn test_rates() {
        let acct = Account::new("1", "401(k)", AccountType::Investment, 0.0, 6.0, 0.0, date(2020, 1, 1));
        assert!((acct.annual_rate() - 0.06).abs() < 1e-15);
        assert!((acct.monthly_rate() - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_deserialize_store_shape() {
        let json = r#"{
            "id": "4",
            "userId": "user1",
            "name": "Mortgage",
            "type": "debt",
            "category": "Home Loan",
            "currentValue": -320000,
            "interestRate": 6.5,
            "monthlyContribution": -2200,
            "startDate": "2022-01-01",
            "endDate": "2052-01-01"
        }"#;
        let acct: Account = serde_json::from_str(json).unwrap();
        assert_eq!(acct.account_type, AccountType::Debt);
        assert_eq!(acct.end_date, Some(date(2052, 1, 1)));
        assert_eq!(acct.principal(), 320_000.0);
    }
}
