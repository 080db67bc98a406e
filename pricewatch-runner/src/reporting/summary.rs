//! Plain-text summary report.

use anyhow::{Context, Result};
use std::path::Path;

use pricewatch_core::{Alert, Quote};

use super::format::format_amount;

pub const SUMMARY_HEADER: &str = "CRYPTO PRICE SUMMARY";
pub const ALERTS_HEADER: &str = "ALERTS";

/// Render the summary: header, one line per quote, then alerts if any.
pub fn render_summary(quotes: &[Quote], alerts: &[Alert]) -> String {
    let mut report = format!(
        "{SUMMARY_HEADER}\n{}\n\n",
        "=".repeat(SUMMARY_HEADER.len())
    );

    for quote in quotes {
        report.push_str(&format!(
            "{} | ${} | {}%\n",
            quote.coin.to_uppercase(),
            format_amount(quote.price_usd),
            format_amount(quote.change_24hr)
        ));
    }

    if !alerts.is_empty() {
        report.push_str(&format!(
            "\n{ALERTS_HEADER}\n{}\n",
            "-".repeat(ALERTS_HEADER.len())
        ));
        for alert in alerts {
            report.push_str(&format!("{alert}\n"));
        }
    }

    report
}

/// Render the summary and write it to `path`, replacing any previous file.
pub fn write_summary(path: &Path, quotes: &[Quote], alerts: &[Alert]) -> Result<()> {
    std::fs::write(path, render_summary(quotes, alerts))
        .with_context(|| format!("Failed to write summary {}", path.display()))
}
