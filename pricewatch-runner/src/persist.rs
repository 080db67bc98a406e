//! Quote table export (CSV).

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use pricewatch_core::Quote;

/// Write quotes as CSV with a `coin,price_usd,change_24hr` header.
///
/// An empty slice writes nothing, leaving any existing file in place; the
/// return value says whether the file was written. The write is not atomic.
pub fn write_quotes_csv(path: &Path, quotes: &[Quote]) -> Result<bool> {
    if quotes.is_empty() {
        debug!("no quotes, leaving {} untouched", path.display());
        return Ok(false);
    }

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create quotes CSV {}", path.display()))?;

    for quote in quotes {
        wtr.serialize(quote)
            .with_context(|| format!("Failed to write row for {}", quote.coin))?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to flush quotes CSV {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_prices.csv");
        let quotes = vec![
            Quote::new("bitcoin", 45_000.0, 2.5),
            Quote::new("ethereum", 3_000.25, -1.0),
        ];

        assert!(write_quotes_csv(&path, &quotes).unwrap());

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "coin,price_usd,change_24hr");
        assert!(lines[1].starts_with("bitcoin,"));
        assert!(lines[2].starts_with("ethereum,"));
    }

    #[test]
    fn empty_input_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_prices.csv");
        std::fs::write(&path, "previous run\n").unwrap();

        assert!(!write_quotes_csv(&path, &[]).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
    }

    #[test]
    fn empty_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_prices.csv");
        assert!(!write_quotes_csv(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn overwrites_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_prices.csv");
        write_quotes_csv(
            &path,
            &[
                Quote::new("bitcoin", 1.0, 0.0),
                Quote::new("ethereum", 2.0, 0.0),
            ],
        )
        .unwrap();
        write_quotes_csv(&path, &[Quote::new("solana", 3.0, 0.0)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("bitcoin"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("crypto_prices.csv");
        let err = write_quotes_csv(&path, &[Quote::new("bitcoin", 1.0, 0.0)]).unwrap_err();
        assert!(err.to_string().contains("crypto_prices.csv"));
    }
}
