//! Load accounts from CSV
//!
//! Columns: `id,name,type,category,current_value,interest_rate,monthly_contribution,start_date,end_date`.
//! `end_date` may be left empty. Debt rows may be written with either sign.

use super::{Account, AccountError, AccountType};
use chrono::NaiveDate;
use csv::Reader;
use log::debug;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    account_type: String,
    #[serde(default)]
    category: String,
    current_value: f64,
    interest_rate: f64,
    #[serde(default)]
    monthly_contribution: f64,
    start_date: String,
    #[serde(default)]
    end_date: Option<String>,
}

impl CsvRow {
    fn into_account(self) -> Result<Account, AccountError> {
        let account_type: AccountType = self.account_type.parse()?;
        let start_date = parse_date(&self.start_date)?;
        let end_date = match self.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(parse_date(s)?),
        };

        let mut account = Account::new(
            self.id,
            self.name,
            account_type,
            self.current_value,
            self.interest_rate,
            self.monthly_contribution,
            start_date,
        )
        .with_category(self.category);
        account.end_date = end_date;
        account.normalize_sign();
        Ok(account)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, AccountError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AccountError::InvalidDate(s.to_string()))
}

/// Load all accounts from a CSV file
pub fn load_accounts<P: AsRef<Path>>(path: P) -> Result<Vec<Account>, AccountError> {
    let path = path.as_ref();
    debug!("loading accounts from {}", path.display());
    let reader = Reader::from_path(path)?;
    read_all(reader)
}

/// Load accounts from any reader (e.g., string buffer, network stream)
pub fn load_accounts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Account>, AccountError> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Account>, AccountError> {
    let mut accounts = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        accounts.push(row.into_account()?);
    }
    debug!("loaded {} accounts", accounts.len());
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,name,type,category,current_value,interest_rate,monthly_contribution,start_date,end_date
1,Emergency Fund,savings,High Yield Savings,25000,4.5,500,2024-01-01,
2,Mortgage,debt,Home Loan,320000,6.5,2200,2022-01-01,2052-01-01
3,Land,real_estate,Land,80000,-1.0,0,2019-06-15,
";

    #[test]
    fn test_load_from_reader() {
        let accounts = load_accounts_from_reader(SAMPLE.as_bytes()).expect("Failed to load accounts");
        assert_eq!(accounts.len(), 3);

        assert_eq!(accounts[0].account_type, AccountType::Savings);
        assert!(accounts[0].end_date.is_none());

        // Debt written with positive magnitudes is normalized on ingestion
        let mortgage = &accounts[1];
        assert_eq!(mortgage.current_value, -320_000.0);
        assert_eq!(mortgage.monthly_contribution, -2_200.0);
        assert_eq!(mortgage.end_date, NaiveDate::from_ymd_opt(2052, 1, 1));

        assert_eq!(accounts[2].interest_rate, -1.0);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let csv = "\
id,name,type,category,current_value,interest_rate,monthly_contribution,start_date,end_date
1,Coins,crypto,,100,0,0,2024-01-01,
";
        let err = load_accounts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AccountError::UnknownType(ref t) if t == "crypto"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let csv = "\
id,name,type,category,current_value,interest_rate,monthly_contribution,start_date,end_date
1,Cash,savings,,100,0,0,01/02/2024,
";
        let err = load_accounts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AccountError::InvalidDate(_)));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_accounts("does/not/exist.csv").is_err());
    }
}
