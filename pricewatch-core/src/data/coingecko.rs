//! CoinGecko `simple/price` provider.
//!
//! One GET per run asks for the USD price and 24-hour change of every asset at
//! once. The response is a JSON object keyed by asset id.

use std::collections::HashMap;

use log::{debug, info, warn};
use reqwest::Url;
use serde::Deserialize;

use super::provider::{DataError, QuoteProvider};
use crate::domain::Quote;

/// Public CoinGecko endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Per-asset entry of the `simple/price` response.
///
/// CoinGecko names the change field `usd_24h_change`; `usd_24hr_change` wins
/// when both are present.
#[derive(Debug, Deserialize)]
struct PriceEntry {
    #[serde(default)]
    usd: Option<f64>,
    #[serde(default)]
    usd_24hr_change: Option<f64>,
    #[serde(default)]
    usd_24h_change: Option<f64>,
}

impl PriceEntry {
    fn change(&self) -> f64 {
        self.usd_24hr_change.or(self.usd_24h_change).unwrap_or(0.0)
    }
}

/// CoinGecko quote provider.
pub struct CoinGeckoProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl CoinGeckoProvider {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pricewatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build the request URL for a batch of assets.
    pub fn request_url(endpoint: &str, assets: &[String]) -> Result<Url, DataError> {
        let ids = assets.join(",");
        Url::parse_with_params(
            endpoint,
            &[
                ("ids", ids.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ],
        )
        .map_err(|e| DataError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a response body into quotes, keeping the order of `assets`.
    ///
    /// Assets missing from the body are dropped. Missing or null fields read
    /// as zero.
    pub fn parse_response(assets: &[String], body: &str) -> Result<Vec<Quote>, DataError> {
        let mut entries: HashMap<String, serde_json::Value> = serde_json::from_str(body)
            .map_err(|e| DataError::MalformedResponse(e.to_string()))?;

        let mut quotes = Vec::with_capacity(assets.len());
        for asset in assets {
            let Some(value) = entries.remove(asset) else {
                debug!("{asset} missing from response, skipping");
                continue;
            };

            let entry: PriceEntry = serde_json::from_value(value)
                .map_err(|e| DataError::MalformedResponse(format!("{asset}: {e}")))?;

            quotes.push(Quote {
                coin: asset.clone(),
                price_usd: entry.usd.unwrap_or(0.0),
                change_24hr: entry.change(),
            });
        }

        Ok(quotes)
    }
}

impl QuoteProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "coingecko"
    }

    fn fetch(&self, assets: &[String]) -> Result<Vec<Quote>, DataError> {
        if assets.is_empty() {
            return Err(DataError::NoAssets);
        }

        let url = Self::request_url(&self.endpoint, assets)?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        // Error statuses are not fatal on their own: a JSON error body simply
        // carries none of the requested assets.
        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered HTTP {status}", self.name());
        }

        let body = resp
            .text()
            .map_err(|e| DataError::Network(e.to_string()))?;

        let quotes = Self::parse_response(assets, &body)?;
        info!(
            "{} returned {}/{} quotes",
            self.name(),
            quotes.len(),
            assets.len()
        );
        Ok(quotes)
    }
}
