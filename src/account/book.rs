//! In-memory account book
//!
//! Holds the current account snapshot and applies the store's ingestion rules on
//! every add and update. The projection engine only ever sees `snapshot()`.

use chrono::{NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Account, AccountError, AccountType};

/// Fields a user supplies when adding an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountType,
    pub category: String,
    pub current_value: f64,
    pub interest_rate: f64,
    pub monthly_contribution: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Partial update of an account. `None` leaves a field untouched.
///
/// `end_date: Some(None)` clears the payoff date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub current_value: Option<f64>,
    pub interest_rate: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
}

/// Accounts owned by a single user
#[derive(Debug, Clone, Default)]
pub struct AccountBook {
    user_id: String,
    accounts: Vec<Account>,
}

impl AccountBook {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            accounts: Vec::new(),
        }
    }

    /// Build a book from already-ingested accounts (e.g. from CSV)
    pub fn from_accounts(user_id: impl Into<String>, accounts: Vec<Account>) -> Self {
        let user_id = user_id.into();
        let accounts = accounts
            .into_iter()
            .map(|mut a| {
                a.user_id = user_id.clone();
                a.normalize_sign();
                a
            })
            .collect();
        Self { user_id, accounts }
    }

    /// The sample household used when no account source is configured
    pub fn demo() -> Self {
        let mut book = Self::new("user1");
        let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        book.insert(
            Account::new("1", "Emergency Fund", AccountType::Savings, 25_000.0, 4.5, 500.0, ymd(2024, 1, 1))
                .with_category("High Yield Savings"),
        );
        book.insert(
            Account::new("2", "401(k)", AccountType::Investment, 150_000.0, 7.0, 1_500.0, ymd(2020, 1, 1))
                .with_category("Retirement Account"),
        );
        book.insert(
            Account::new("3", "Primary Home", AccountType::RealEstate, 450_000.0, 3.5, 0.0, ymd(2022, 1, 1))
                .with_category("Primary Residence"),
        );
        book.insert(
            Account::new("4", "Mortgage", AccountType::Debt, -320_000.0, 6.5, -2_200.0, ymd(2022, 1, 1))
                .with_category("Home Loan")
                .with_end_date(ymd(2052, 1, 1)),
        );
        book
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current snapshot handed to the projection engine
    pub fn snapshot(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Add a new account, assigning a fresh id. Returns the stored account.
    pub fn add(&mut self, new: NewAccount) -> &Account {
        let mut account = Account::new(
            Uuid::new_v4().to_string(),
            new.name,
            new.account_type,
            new.current_value,
            new.interest_rate,
            new.monthly_contribution,
            new.start_date,
        )
        .with_category(new.category);
        account.end_date = new.end_date;

        debug!("adding {} account {} ({})", account.account_type, account.id, account.name);
        self.insert(account)
    }

    /// Patch an existing account. Id, owner and type never change.
    pub fn update(&mut self, id: &str, update: AccountUpdate) -> Result<&Account, AccountError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(category) = update.category {
            account.category = category;
        }
        if let Some(value) = update.current_value {
            account.current_value = value;
        }
        if let Some(rate) = update.interest_rate {
            account.interest_rate = rate;
        }
        if let Some(contribution) = update.monthly_contribution {
            account.monthly_contribution = contribution;
        }
        if let Some(start) = update.start_date {
            account.start_date = start;
        }
        if let Some(end) = update.end_date {
            account.end_date = end;
        }
        account.normalize_sign();
        account.updated_at = Utc::now();

        debug!("updated account {}", id);
        Ok(&*account)
    }

    /// Remove an account, returning it
    pub fn remove(&mut self, id: &str) -> Result<Account, AccountError> {
        let idx = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        debug!("removing account {}", id);
        Ok(self.accounts.remove(idx))
    }

    fn insert(&mut self, mut account: Account) -> &Account {
        account.user_id = self.user_id.clone();
        account.normalize_sign();
        self.accounts.push(account);
        &self.accounts[self.accounts.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_debt() -> NewAccount {
        NewAccount {
            name: "Student Loan".to_string(),
            account_type: AccountType::Debt,
            category: "Student Loan".to_string(),
            current_value: 40_000.0,
            interest_rate: 5.5,
            monthly_contribution: 450.0,
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2033, 9, 1),
        }
    }

    #[test]
    fn test_demo_book() {
        let book = AccountBook::demo();
        assert_eq!(book.len(), 4);
        let mortgage = book.get("4").unwrap();
        assert!(mortgage.is_debt());
        assert_eq!(mortgage.current_value, -320_000.0);
        assert_eq!(mortgage.user_id, "user1");
    }

    #[test]
    fn test_add_normalizes_debt_sign() {
        let mut book = AccountBook::new("u");
        let added = book.add(new_debt()).clone();

        assert_eq!(added.current_value, -40_000.0);
        assert_eq!(added.monthly_contribution, -450.0);
        assert_eq!(added.user_id, "u");
        assert!(!added.id.is_empty());
        assert_eq!(book.get(&added.id), Some(&added));
    }

    #[test]
    fn test_add_generates_distinct_ids() {
        let mut book = AccountBook::new("u");
        let a = book.add(new_debt()).id.clone();
        let b = book.add(new_debt()).id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_patches_fields_and_keeps_identity() {
        let mut book = AccountBook::demo();
        let before = book.get("1").unwrap().clone();

        let updated = book
            .update(
                "1",
                AccountUpdate {
                    interest_rate: Some(5.0),
                    monthly_contribution: Some(750.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.account_type, before.account_type);
        assert_eq!(updated.interest_rate, 5.0);
        assert_eq!(updated.monthly_contribution, 750.0);
        assert_eq!(updated.current_value, before.current_value);
        assert!(updated.updated_at >= before.updated_at);
    }

    #[test]
    fn test_update_reapplies_debt_sign_and_clears_end_date() {
        let mut book = AccountBook::demo();
        let updated = book
            .update(
                "4",
                AccountUpdate {
                    current_value: Some(300_000.0),
                    end_date: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.current_value, -300_000.0);
        assert!(updated.end_date.is_none());
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let mut book = AccountBook::demo();
        assert!(matches!(
            book.update("nope", AccountUpdate::default()),
            Err(AccountError::NotFound(id)) if id == "nope"
        ));
        assert!(matches!(book.remove("nope"), Err(AccountError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut book = AccountBook::demo();
        let removed = book.remove("3").unwrap();
        assert_eq!(removed.name, "Primary Home");
        assert_eq!(book.len(), 3);
        assert!(book.get("3").is_none());
    }
}
