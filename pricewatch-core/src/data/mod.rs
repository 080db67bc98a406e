//! Quote sources.

pub mod coingecko;
pub mod provider;

pub use coingecko::{CoinGeckoProvider, DEFAULT_ENDPOINT};
pub use provider::{DataError, QuoteProvider};
