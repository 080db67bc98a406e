//! PriceWatch Runner — the fetch → persist → evaluate → report pipeline.
//!
//! This crate builds on `pricewatch-core` to provide:
//! - CSV persistence of the latest quotes
//! - The plain-text summary and console status
//! - A single-run pipeline wiring the stages together

pub mod persist;
pub mod reporting;
pub mod runner;

pub use persist::write_quotes_csv;
pub use reporting::{format_amount, print_status, render_summary, write_summary};
pub use runner::{prepare_dirs, run_once, RunReport};
