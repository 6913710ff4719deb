//! Investment Dashboard HTTP Server
//!
//! Axum-based JSON API around the growth simulator plus the two
//! collaborators: a market data source and a free-text advice service.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invest_advice::{AdviceService, OpenAiClient};
use invest_market::{CoinGeckoClient, MarketDataSource, MockMarketData};

use crate::handlers::{advice_handler, health_check, markets_handler, simulate_handler};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Market data source: real CoinGecko by default, mock for offline demos
    let use_mock = std::env::var("MARKET_DATA").is_ok_and(|v| v == "mock");
    let market: Arc<dyn MarketDataSource> = if use_mock {
        Arc::new(MockMarketData::new())
    } else {
        Arc::new(CoinGeckoClient::from_env()?)
    };
    tracing::info!("Market data source: {}", market.name());

    if market.health_check().await {
        tracing::info!("✓ Market data source reachable");
    } else {
        tracing::warn!("⚠ Market data source unreachable - /api/markets will degrade");
    }

    // Advice service is optional; the dashboard runs without it
    let advice: Option<Arc<dyn AdviceService>> = match OpenAiClient::from_env() {
        Ok(client) => {
            tracing::info!("✓ Advice service configured (model: {})", client.model());
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!("⚠ Advice service disabled: {}", e);
            None
        }
    };

    // Build application state
    let state = AppState { market, advice };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/simulate", post(simulate_handler))
        .route("/api/markets", get(markets_handler))
        .route("/api/advice", post(advice_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("invest-server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/simulate - Growth projection");
    tracing::info!("  GET  /api/markets  - Top assets by market cap");
    tracing::info!("  POST /api/advice   - Free-text investment advice");

    axum::serve(listener, app).await?;

    Ok(())
}
