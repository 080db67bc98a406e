//! Single-run pipeline: fetch → persist → evaluate → report.
//!
//! Every stage failure is fatal; the run either completes or returns the
//! first error. Nothing is retained between runs.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use pricewatch_core::{evaluate, Alert, MonitorConfig, Quote, QuoteProvider};

use crate::persist::write_quotes_csv;
use crate::reporting::write_summary;

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub quotes: Vec<Quote>,
    pub alerts: Vec<Alert>,
    pub csv_path: PathBuf,
    pub summary_path: PathBuf,
    /// False when there were no quotes and the CSV was left alone.
    pub csv_written: bool,
}

/// Create the data and output directories if they do not exist.
pub fn prepare_dirs(config: &MonitorConfig) -> Result<()> {
    for dir in [&config.data_dir, &config.output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Run the pipeline once against `provider`.
pub fn run_once(config: &MonitorConfig, provider: &dyn QuoteProvider) -> Result<RunReport> {
    prepare_dirs(config)?;

    let quotes = provider
        .fetch(&config.assets)
        .with_context(|| format!("Failed to fetch quotes from {}", provider.name()))?;
    info!("fetched {} quote(s)", quotes.len());

    let csv_path = config.csv_path();
    let csv_written = write_quotes_csv(&csv_path, &quotes)?;
    if !csv_written {
        warn!("no quotes returned; {} not updated", csv_path.display());
    }

    let alerts = evaluate(&quotes, &config.rules);
    info!("{} alert(s) triggered", alerts.len());

    let summary_path = config.summary_path();
    write_summary(&summary_path, &quotes, &alerts)?;

    Ok(RunReport {
        quotes,
        alerts,
        csv_path,
        summary_path,
        csv_written,
    })
}
