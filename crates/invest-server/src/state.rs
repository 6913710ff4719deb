//! Application State

use std::sync::Arc;

use invest_advice::AdviceService;
use invest_market::MarketDataSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Market data source (CoinGecko or mock)
    pub market: Arc<dyn MarketDataSource>,

    /// Advice service, present only when configured. The dashboard degrades
    /// gracefully without it instead of failing at startup.
    pub advice: Option<Arc<dyn AdviceService>>,
}
