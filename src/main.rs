//! Net Worth Projection CLI
//!
//! Command-line interface for running net worth projections

use anyhow::{Context, Result};
use clap::Parser;
use networth_projection::account::{load_accounts, AccountBook, AccountBreakdown};
use networth_projection::projection::{ProjectionEngine, ProjectionResult};
use networth_projection::settings::{parse_horizon_input, ProjectionSettings};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "networth-projection", version, about = "Project net worth year by year")]
struct Args {
    /// Accounts CSV (defaults to the built-in sample household)
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// JSON settings file (horizonYears, inflationRatePct, asOfYear)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Years to project; invalid input falls back to 30
    #[arg(long)]
    years: Option<String>,

    /// Annual inflation in percent
    #[arg(long)]
    inflation: Option<f64>,

    /// Calendar year of the first row
    #[arg(long)]
    as_of_year: Option<i32>,

    /// Write all rows to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also print each account's trajectory
    #[arg(long)]
    detailed: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let book = match &args.accounts {
        Some(path) => {
            let accounts = load_accounts(path)
                .with_context(|| format!("Failed to load accounts from {}", path.display()))?;
            AccountBook::from_accounts("local", accounts)
        }
        None => AccountBook::demo(),
    };

    let mut settings = match &args.settings {
        Some(path) => ProjectionSettings::from_json_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ProjectionSettings::default(),
    };
    if let Some(years) = &args.years {
        settings.horizon_years = parse_horizon_input(years);
    }
    if let Some(inflation) = args.inflation {
        settings.inflation_rate_pct = inflation;
    }
    if let Some(year) = args.as_of_year {
        settings.as_of_year = year;
    }

    let engine = ProjectionEngine::new(settings.to_config());
    let result = engine.project(book.snapshot()).context("Projection failed")?;

    if args.json {
        let body = serde_json::json!({
            "settings": settings,
            "breakdown": AccountBreakdown::from_accounts(book.snapshot()),
            "summary": result.summary(),
            "projections": result.rows,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_report(&book, &settings, &result);
        if args.detailed {
            print_accounts(&engine, &book)?;
        }
    }

    if let Some(path) = &args.output {
        write_csv(path, &result).with_context(|| format!("Failed to write {}", path.display()))?;
        if !args.json {
            println!("\nFull results written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_report(book: &AccountBook, settings: &ProjectionSettings, result: &ProjectionResult) {
    println!("Net Worth Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");

    let breakdown = AccountBreakdown::from_accounts(book.snapshot());
    println!("Accounts: {}", book.len());
    println!("  Savings:     {:>2} ${:>14.2}", breakdown.savings.count, breakdown.savings.total);
    println!("  Investments: {:>2} ${:>14.2}", breakdown.investments.count, breakdown.investments.total);
    println!("  Real Estate: {:>2} ${:>14.2}", breakdown.real_estate.count, breakdown.real_estate.total);
    println!("  Debts:       {:>2} ${:>14.2}", breakdown.debts.count, breakdown.debts.total);
    println!(
        "\nHorizon: {} years from {}, inflation {:.2}%\n",
        settings.horizon_years, settings.as_of_year, settings.inflation_rate_pct
    );

    println!(
        "{:>6} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Savings", "Investments", "RealEstate", "Debts", "Assets", "NetWorth"
    );
    println!("{}", "-".repeat(108));
    for row in &result.rows {
        println!(
            "{:>6} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.savings, row.investments, row.real_estate, row.debts, row.total_assets, row.total_net_worth
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Current Net Worth: ${:.2}", summary.current_net_worth);
    if let Some(row) = result.at_offset(10) {
        println!("  Net Worth (10Y):   ${:.2}", row.total_net_worth);
    }
    println!("  Net Worth ({}):  ${:.2}", summary.final_year, summary.final_net_worth);
    match summary.net_worth_growth_pct {
        Some(pct) => println!("  Total Growth:      {:.1}%", pct),
        None => println!("  Total Growth:      n/a"),
    }
}

fn print_accounts(engine: &ProjectionEngine, book: &AccountBook) -> Result<()> {
    println!("\nPer-account trajectories:");
    for account in book.snapshot() {
        let values = engine
            .project_account(account)
            .with_context(|| format!("Failed to project account {}", account.id))?;
        let last = values.last().copied().unwrap_or(0.0);
        println!(
            "  {:<20} {:<12} start ${:>14.2}  end ${:>14.2}",
            account.name,
            account.account_type.as_str(),
            values.first().copied().unwrap_or(0.0),
            last
        );
    }
    Ok(())
}

fn write_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "year",
        "total_net_worth",
        "total_assets",
        "total_debts",
        "savings",
        "investments",
        "real_estate",
        "debts",
    ])?;
    for row in &result.rows {
        writer.write_record([
            row.year.to_string(),
            format!("{:.8}", row.total_net_worth),
            format!("{:.8}", row.total_assets),
            format!("{:.8}", row.total_debts),
            format!("{:.8}", row.savings),
            format!("{:.8}", row.investments),
            format!("{:.8}", row.real_estate),
            format!("{:.8}", row.debts),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
