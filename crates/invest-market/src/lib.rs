//! # invest-market
//!
//! Market data collaborator for the investment dashboard: a
//! [`MarketDataSource`] trait with a CoinGecko-backed implementation and a
//! static mock for tests and offline demos.
//!
//! The dashboard only reads a fixed-shape listing (symbol, current price,
//! 24h change) of the top assets by market cap; nothing here feeds the
//! growth simulator.

pub mod coingecko;
pub mod error;
pub mod mock;
pub mod model;
pub mod source;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use error::{MarketDataError, Result};
pub use mock::MockMarketData;
pub use model::MarketAsset;
pub use source::MarketDataSource;
