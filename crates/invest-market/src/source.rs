//! Market Data Source Trait

use async_trait::async_trait;

use crate::error::Result;
use crate::model::MarketAsset;

/// Market data source (Strategy pattern)
///
/// Implement this for each provider: CoinGecko, CoinMarketCap, etc.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Get the top `count` assets by market cap, quoted in `vs_currency`
    /// (e.g., "eur", "usd"), ordered descending.
    async fn top_assets(&self, count: u32, vs_currency: &str) -> Result<Vec<MarketAsset>>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}
