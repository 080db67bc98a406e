//! Quote provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over the quote source so the pipeline can
//! run against CoinGecko in production and a canned provider in tests.

use thiserror::Error;

use crate::domain::Quote;

/// Structured error types for quote fetching.
///
/// Every variant is fatal to a run; nothing is retried.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no assets requested")]
    NoAssets,

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for quote sources.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the latest quote for each asset in one request.
    ///
    /// Returns quotes in the order of `assets`. Assets the source does not
    /// know about are omitted rather than reported as errors.
    fn fetch(&self, assets: &[String]) -> Result<Vec<Quote>, DataError>;
}
