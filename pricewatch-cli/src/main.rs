//! PriceWatch CLI — fetch the latest quotes, write the CSV and summary, report alerts.
//!
//! With no arguments the built-in watch list and rules are used and the
//! outputs land in `./output`. A TOML config replaces any of the defaults, and
//! the directory flags override both.

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::{debug, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

use pricewatch_core::{CoinGeckoProvider, MonitorConfig};
use pricewatch_runner::{print_status, run_once};

#[derive(Parser)]
#[command(
    name = "pricewatch",
    about = "PriceWatch — crypto price snapshot with threshold alerts"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to the built-in watch list.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for crypto_prices.csv and summary.txt.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Working data directory (created if absent).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG also works.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    debug!("config: {config:?}");

    let provider = CoinGeckoProvider::new(config.endpoint.clone())?;
    let report = run_once(&config, &provider)?;

    let stdout = std::io::stdout();
    print_status(
        &mut stdout.lock(),
        &report.csv_path,
        &report.summary_path,
        &report.alerts,
    )?;

    Ok(())
}

/// Directory flags win over the config file.
fn apply_overrides(config: &mut MonitorConfig, cli: &Cli) {
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // Logs go to stderr so stdout carries only the run status.
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let ts = chrono::Local::now().format("%H:%M:%S%.3f");
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                ts,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
