//! Mock Market Data Source
//!
//! For testing and offline demo. Returns realistic static quotes.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{MarketDataError, Result};
use crate::model::MarketAsset;
use crate::source::MarketDataSource;

/// Static top-10 table, ordered by market cap descending.
/// (symbol, name, price in EUR, 24h change %)
const TOP_ASSETS: [(&str, &str, Decimal, Decimal); 10] = [
    ("BTC", "Bitcoin", dec!(91250), dec!(2.5)),
    ("ETH", "Ethereum", dec!(3220), dec!(1.8)),
    ("XRP", "Ripple", dec!(2.20), dec!(0.9)),
    ("SOL", "Solana", dec!(182), dec!(4.2)),
    ("ADA", "Cardano", dec!(0.89), dec!(-1.2)),
    ("DOGE", "Dogecoin", dec!(0.35), dec!(12.0)),
    ("AVAX", "Avalanche", dec!(39.50), dec!(5.5)),
    ("DOT", "Polkadot", dec!(6.75), dec!(0.8)),
    ("LINK", "Chainlink", dec!(22.80), dec!(3.1)),
    ("LTC", "Litecoin", dec!(98.40), dec!(1.5)),
];

/// Mock market data source with static quotes.
#[derive(Default)]
pub struct MockMarketData;

impl MockMarketData {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
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

        let fetched_at = Utc::now();
        Ok(TOP_ASSETS
            .iter()
            .take(count as usize)
            .map(|&(symbol, name, price, change)| MarketAsset {
                symbol: symbol.into(),
                name: name.into(),
                current_price: price,
                change_24h_percent: Some(change),
                fetched_at,
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        true // Mock always healthy
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_requested_count_in_order() {
        let source = MockMarketData::new();
        let assets = source.top_assets(10, "eur").await.unwrap();

        assert_eq!(assets.len(), 10);
        assert_eq!(assets[0].symbol, "BTC");
        assert_eq!(assets[1].symbol, "ETH");
        assert!(assets.iter().all(|a| a.current_price > Decimal::ZERO));
    }

    #[tokio::test]
    async fn truncates_to_available_assets() {
        let source = MockMarketData::new();
        let assets = source.top_assets(3, "eur").await.unwrap();
        assert_eq!(assets.len(), 3);
    }

    #[tokio::test]
    async fn rejects_zero_count() {
        let source = MockMarketData::new();
        assert!(source.top_assets(0, "eur").await.is_err());
    }
}
