//! PriceWatch Core — domain types, quote providers, threshold rules, configuration.
//!
//! This crate holds everything the pipeline needs that does not touch the
//! filesystem:
//! - Domain types (quotes, threshold rules, alerts)
//! - The `QuoteProvider` trait and the CoinGecko implementation
//! - The rule evaluator
//! - Monitor configuration with built-in defaults and TOML loading

pub mod config;
pub mod data;
pub mod domain;
pub mod rules;

pub use config::{ConfigError, MonitorConfig};
pub use data::{CoinGeckoProvider, DataError, QuoteProvider};
pub use domain::{Alert, BoundKind, Quote, ThresholdRule};
pub use rules::evaluate;
