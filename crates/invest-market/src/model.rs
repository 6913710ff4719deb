//! Market Data Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quoted market asset, as surfaced to the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketAsset {
    /// Ticker symbol, uppercased (e.g., "BTC").
    pub symbol: String,

    /// Full name (e.g., "Bitcoin").
    pub name: String,

    /// Current price in the requested quote currency.
    pub current_price: Decimal,

    /// 24-hour price change percentage. Upstream may omit it for thinly
    /// traded assets.
    pub change_24h_percent: Option<Decimal>,

    /// When this quote was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl MarketAsset {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, current_price: Decimal) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            current_price,
            change_24h_percent: None,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the asset moved up (or held) over the last 24 hours.
    /// `None` when upstream did not report a change.
    pub fn is_up_24h(&self) -> Option<bool> {
        self.change_24h_percent.map(|c| c >= Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn symbol_is_uppercased() {
        let asset = MarketAsset::new("btc", "Bitcoin", dec!(97500));
        assert_eq!(asset.symbol, "BTC");
    }

    #[test]
    fn direction_follows_change_sign() {
        let mut asset = MarketAsset::new("ADA", "Cardano", dec!(0.95));
        assert_eq!(asset.is_up_24h(), None);

        asset.change_24h_percent = Some(dec!(-1.2));
        assert_eq!(asset.is_up_24h(), Some(false));

        asset.change_24h_percent = Some(Decimal::ZERO);
        assert_eq!(asset.is_up_24h(), Some(true));
    }
}
