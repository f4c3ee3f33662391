//! CLI tool that builds a financial report from a ledger file.
//!
//! # Usage
//!
//! ```bash
//! # Report for ./transactions.txt
//! ledger-report
//!
//! # Explicit input, JSON output
//! ledger-report --input march.txt --format json
//!
//! # Show rejected lines as they are parsed
//! RUST_LOG=warn ledger-report -i march.txt
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ledger::prelude::*;
use tracing::info;

/// Build a report from a semicolon-separated ledger
/// (`type;amount;currency;description`).
///
/// Prints totals, balance, the largest transaction, per-category
/// statistics and the list of rejected lines.
#[derive(Parser, Debug)]
#[command(name = "ledger-report")]
#[command(version, about)]
struct Args {
    /// Ledger file path.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Report rendering for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text report.
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    info!(input = %args.input.display(), format = ?args.format, "building report");

    let report = process_file(&args.input)?;
    println!("{}", render(&report, args.format)?);

    Ok(())
}

/// Renders the report in the requested format.
fn render(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}
