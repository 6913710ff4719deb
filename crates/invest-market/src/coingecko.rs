//! CoinGecko Market Data Client
//!
//! Fetches the `/coins/markets` listing ordered by market cap, the same
//! query the dashboard has always shown for its top-10 view.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{MarketDataError, Result};
use crate::model::MarketAsset;
use crate::source::MarketDataSource;

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// One row of the `/coins/markets` response. Only the fields the dashboard
/// consumes; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct MarketsRow {
    symbol: String,
    name: String,
    current_price: Option<Decimal>,
    price_change_percentage_24h: Option<Decimal>,
}

/// CoinGecko client configuration
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// API base URL (overridable for proxies and tests)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: 15,
        }
    }
}

impl CoinGeckoConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COINGECKO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            base_url,
            ..Default::default()
        }
    }
}

/// Market data source backed by the public CoinGecko API.
pub struct CoinGeckoClient {
    http: reqwest::Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    /// Fails only when the underlying HTTP client cannot be built; falling
    /// back to a default client would drop the configured timeout.
    pub fn new(config: CoinGeckoConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(CoinGeckoConfig::from_env())
    }

    fn convert_rows(rows: Vec<MarketsRow>) -> Vec<MarketAsset> {
        let fetched_at = Utc::now();
        rows.into_iter()
            .filter_map(|row| {
                let Some(price) = row.current_price else {
                    // Rows without a price do happen on delisted coins; skip
                    // them instead of failing the whole page.
                    tracing::warn!(symbol = %row.symbol, "skipping market row without a price");
                    return None;
                };
                Some(MarketAsset {
                    symbol: row.symbol.to_uppercase(),
                    name: row.name,
                    current_price: price,
                    change_24h_percent: row.price_change_percentage_24h,
                    fetched_at,
                })
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn top_assets(&self, count: u32, vs_currency: &str) -> Result<Vec<MarketAsset>> {
        if count == 0 {
            return Err(MarketDataError::InvalidRequest(
                "count must be at least 1".into(),
            ));
        }
        if vs_currency.is_empty() {
            return Err(MarketDataError::InvalidRequest(
                "vs_currency must not be empty".into(),
            ));
        }

        let url = format!("{}/coins/markets", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("vs_currency", vs_currency),
                ("order", "market_cap_desc"),
                ("per_page", &count.to_string()),
                ("page", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Unavailable(format!(
                "CoinGecko returned {status}: {body}"
            )));
        }

        let rows: Vec<MarketsRow> = response
            .json()
            .await
            .map_err(|e| MarketDataError::Malformed(e.to_string()))?;

        if rows.is_empty() {
            return Err(MarketDataError::Unavailable(
                "CoinGecko returned an empty market page".into(),
            ));
        }

        let assets = Self::convert_rows(rows);
        tracing::debug!(count = assets.len(), vs_currency, "fetched market assets");
        Ok(assets)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/ping", self.config.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!("CoinGecko health check failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}
