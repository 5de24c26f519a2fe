//! Compare projected net worth across a range of inflation assumptions
//!
//! Usage: cargo run --bin inflation_sweep -- --rates 0,1.5,2.5,4,6

use anyhow::{Context, Result};
use clap::Parser;
use networth_projection::account::{load_accounts, AccountBook};
use networth_projection::settings::ProjectionSettings;
use networth_projection::ScenarioRunner;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "inflation_sweep", about = "Final net worth under different inflation rates")]
struct Args {
    /// Accounts CSV (defaults to the built-in sample household)
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Comma-separated inflation rates in percent
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 7.5, 10.0])]
    rates: Vec<f64>,

    /// Years to project
    #[arg(long, default_value_t = 30)]
    years: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let accounts = match &args.accounts {
        Some(path) => load_accounts(path)
            .with_context(|| format!("Failed to load accounts from {}", path.display()))?,
        None => AccountBook::demo().snapshot().to_vec(),
    };
    println!("Loaded {} accounts", accounts.len());

    let base = ProjectionSettings {
        horizon_years: args.years,
        ..Default::default()
    }
    .to_config();

    let runner = ScenarioRunner::new(accounts);
    let sweep = runner
        .inflation_sweep(&base, &args.rates)
        .context("Projection failed")?;

    println!("\n{:>10} {:>18} {:>18} {:>18}", "Inflation", "Assets", "Debts", "NetWorth");
    println!("{}", "-".repeat(67));
    for point in &sweep {
        let summary = point.result.summary();
        println!(
            "{:>9.2}% {:>18.2} {:>18.2} {:>18.2}",
            point.inflation_rate_pct, summary.final_assets, summary.final_debts, summary.final_net_worth
        );
    }

    println!("\nSwept {} rates over {} years in {:?}", sweep.len(), args.years, start.elapsed());
    Ok(())
}
