//! Financial accounts, the in-memory account book and CSV loading

mod data;
mod book;
mod breakdown;
pub mod loader;

pub use data::{Account, AccountType};
pub use book::{AccountBook, NewAccount, AccountUpdate};
pub use breakdown::{AccountBreakdown, TypeTotals};
pub use loader::{load_accounts, load_accounts_from_reader};

use thiserror::Error;

/// Errors raised while ingesting or mutating accounts
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account not found: {0}")]
    NotFound(String),

    #[error("unknown account type: {0}")]
    UnknownType(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
