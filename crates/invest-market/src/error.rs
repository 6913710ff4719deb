//! Error Types for Market Data

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketDataError>;

#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Upstream reachable but returned no usable data (empty page, error
    /// status). Distinct from `Malformed` so callers can tell "no data"
    /// from "bad data".
    #[error("Market data unavailable: {0}")]
    Unavailable(String),

    /// Upstream responded but the payload did not match the expected shape.
    #[error("Malformed market data: {0}")]
    Malformed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
