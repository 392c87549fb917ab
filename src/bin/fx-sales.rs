//! fx-sales CLI - total a product's sales in one currency
//!
//! ## Example Usage
//!
//! ```bash
//! # Total DM1182 in USD (defaults)
//! fx-sales RATES.xml TRANS.csv
//!
//! # Another SKU and currency, failing on degenerate rates
//! fx-sales RATES.xml TRANS.csv --sku DM1210 --currency EUR --strict-rates
//!
//! # Every SKU, as JSON
//! fx-sales RATES.xml TRANS.csv --by-sku --json
//! ```

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use fx_sales::config::{Config, OutputFormat};
use fx_sales::data::{load_rates, load_transactions};
use fx_sales::fx::RateGraph;
use fx_sales::sales::{summarize, totals_by_sku};
use std::path::PathBuf;
use std::process;

/// fx-sales: multi-currency sales totals
#[derive(Parser)]
#[command(name = "fx-sales")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Total a product's sales across currencies", long_about = None)]
struct Cli {
    /// Exchange rate file (XML, or CSV with a .csv extension)
    #[arg(value_name = "RATES")]
    rates: PathBuf,

    /// Transaction CSV file (store,sku,"<value> <unit>")
    #[arg(value_name = "TRANSACTIONS")]
    transactions: PathBuf,

    /// SKU to total
    #[arg(short = 's', long)]
    sku: Option<String>,

    /// Target currency
    #[arg(short = 't', long)]
    currency: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject zero, negative and non-finite rates
    #[arg(long)]
    strict_rates: bool,

    /// Report a total for every SKU
    #[arg(long)]
    by_sku: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(sku) = cli.sku {
        config.sku = sku;
    }
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }
    if cli.strict_rates {
        config.strict_rates = true;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    let rates = load_rates(&cli.rates)
        .with_context(|| format!("reading rates from {}", cli.rates.display()))?;
    let txns = load_transactions(&cli.transactions)
        .with_context(|| format!("reading transactions from {}", cli.transactions.display()))?;

    let graph = if config.strict_rates {
        RateGraph::try_build(&rates)?
    } else {
        RateGraph::build(&rates)
    };

    if cli.by_sku {
        let totals = totals_by_sku(&config.currency, &graph, &txns);
        match config.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&totals)?),
            OutputFormat::Text => {
                for (sku, total) in &totals {
                    println!("{} {} {}", format!("{:<12}", sku).cyan(), total, config.currency);
                }
            }
        }
        return Ok(());
    }

    let summary = summarize(&config.sku, &config.currency, &graph, &txns);
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!("{} rates known", rates.len());
            println!("{} transactions parsed", txns.len());
            if summary.unresolved > 0 {
                println!(
                    "{} {} of {} sales had no conversion to {}",
                    "Warning:".yellow(),
                    summary.unresolved,
                    summary.matched,
                    summary.currency
                );
            }
            println!(
                "{} total : {} {}",
                summary.sku.bold(),
                summary.total.to_string().green(),
                summary.currency
            );
        }
    }

    Ok(())
}
