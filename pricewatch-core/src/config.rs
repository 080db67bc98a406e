//! Monitor configuration.
//!
//! The built-in defaults are the watched asset list, the alert rules and the
//! two directories the program has always used. A TOML file may override any
//! of them; keys left out keep their default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::DEFAULT_ENDPOINT;
use crate::domain::ThresholdRule;

/// CSV file name inside the output directory.
pub const CSV_FILE_NAME: &str = "crypto_prices.csv";

/// Summary file name inside the output directory.
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Asset ids in the order they are requested and reported.
    pub assets: Vec<String>,
    /// Working directory, created on start.
    pub data_dir: PathBuf,
    /// Directory receiving the CSV and the summary.
    pub output_dir: PathBuf,
    /// Quote service URL.
    pub endpoint: String,
    /// Per-asset threshold rules. Assets without a rule never alert.
    pub rules: BTreeMap<String, ThresholdRule>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let assets = ["bitcoin", "ethereum", "solana", "cardano", "dogecoin"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut rules = BTreeMap::new();
        rules.insert("bitcoin".into(), ThresholdRule::between(40_000.0, 100_000.0));
        rules.insert("ethereum".into(), ThresholdRule::between(2_000.0, 5_000.0));

        Self {
            assets,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            rules,
        }
    }
}

impl MonitorConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets.is_empty() {
            return Err(ConfigError::Invalid("asset list is empty".into()));
        }
        if let Some(blank) = self.assets.iter().find(|a| a.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("blank asset id {blank:?}")));
        }
        for (coin, rule) in &self.rules {
            for bound in [rule.below, rule.above].into_iter().flatten() {
                if bound.is_nan() || bound < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "rule for '{coin}' has bound {bound}; bounds must be non-negative numbers"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILE_NAME)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }
}
