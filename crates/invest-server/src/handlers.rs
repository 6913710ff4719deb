//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use invest_advice::AdviceError;
use invest_core::{RiskTier, SimulationInput, SimulatorError, YearPoint, rate_for, simulate};
use invest_market::{MarketAsset, MarketDataError};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub market_source: String,
    pub market_reachable: bool,
    pub advice_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub monthly_contribution: f64,
    pub years: u32,
    pub risk_tier: String,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub risk_tier: RiskTier,
    pub annual_rate: f64,
    pub final_value: f64,
    pub annual_series: Vec<YearPoint>,
}

#[derive(Debug, Deserialize)]
pub struct MarketsQuery {
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_count() -> u32 {
    10
}

fn default_currency() -> String {
    "eur".into()
}

#[derive(Debug, Serialize)]
pub struct MarketsResponse {
    pub vs_currency: String,
    pub assets: Vec<MarketAsset>,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn reject_input(err: SimulatorError) -> ApiError {
    let code = match err {
        SimulatorError::InvalidInput(_) => "INVALID_INPUT",
        SimulatorError::InvalidRiskTier(_) => "INVALID_RISK_TIER",
    };
    api_error(StatusCode::UNPROCESSABLE_ENTITY, code, err.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let market_reachable = state.market.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        market_source: state.market.name().into(),
        market_reachable,
        advice_configured: state.advice.is_some(),
    })
}

/// Run a growth projection. Purely computational; rejects out-of-range
/// input with a field-specific message and never clamps.
pub async fn simulate_handler(
    Json(payload): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let tier: RiskTier = payload.risk_tier.parse().map_err(reject_input)?;
    let input = SimulationInput::new(payload.monthly_contribution, payload.years, tier)
        .map_err(reject_input)?;

    let annual_rate = rate_for(tier).map_err(reject_input)?;
    let result = simulate(&input).map_err(reject_input)?;

    Ok(Json(SimulateResponse {
        risk_tier: tier,
        annual_rate,
        final_value: result.final_value,
        annual_series: result.annual_series,
    }))
}

/// Top-N market listing. Collaborator failure degrades to a 503 with a
/// stable code instead of surfacing upstream details to the client.
pub async fn markets_handler(
    State(state): State<AppState>,
    Query(query): Query<MarketsQuery>,
) -> Result<Json<MarketsResponse>, ApiError> {
    let assets = state
        .market
        .top_assets(query.count, &query.currency)
        .await
        .map_err(|e| match e {
            MarketDataError::InvalidRequest(msg) => {
                api_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_QUERY", msg)
            }
            other => {
                tracing::warn!("market data fetch failed: {}", other);
                api_error(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "DATA_UNAVAILABLE",
                    "Could not load market data. Please try again later.",
                )
            }
        })?;

    Ok(Json(MarketsResponse {
        vs_currency: query.currency,
        assets,
    }))
}

/// Free-text advice pass-through.
pub async fn advice_handler(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let Some(service) = state.advice else {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "ADVICE_UNCONFIGURED",
            "Advice service is not configured. Set OPENAI_API_KEY to enable it.",
        ));
    };

    let advice = service.advise(&payload.prompt).await.map_err(|e| match e {
        AdviceError::EmptyPrompt => api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "EMPTY_PROMPT",
            "Please describe your portfolio or strategy.",
        ),
        other => {
            tracing::error!("advice service failed: {}", other);
            api_error(
                StatusCode::BAD_GATEWAY,
                "ADVICE_ERROR",
                "The advice service is currently unavailable. Please try again.",
            )
        }
    })?;

    Ok(Json(AdviceResponse {
        advice,
        source: service.name().into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use invest_advice::MockAdviceService;
    use invest_market::MockMarketData;

    fn mock_state(with_advice: bool) -> AppState {
        AppState {
            market: Arc::new(MockMarketData::new()),
            advice: with_advice.then(|| {
                Arc::new(MockAdviceService::with_reply("Stay diversified."))
                    as Arc<dyn invest_advice::AdviceService>
            }),
        }
    }

    #[tokio::test]
    async fn simulate_returns_full_series() {
        let response = simulate_handler(Json(SimulateRequest {
            monthly_contribution: 700.0,
            years: 20,
            risk_tier: "balanced".into(),
        }))
        .await
        .unwrap();

        assert_eq!(response.annual_rate, 0.08);
        assert_eq!(response.annual_series.len(), 20);
        assert_eq!(
            response.final_value,
            response.annual_series[19].portfolio_value
        );
    }

    #[tokio::test]
    async fn simulate_rejects_bad_contribution() {
        let (status, body) = simulate_handler(Json(SimulateRequest {
            monthly_contribution: 9.99,
            years: 20,
            risk_tier: "balanced".into(),
        }))
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "INVALID_INPUT");
        assert!(body.error.contains("monthly_contribution"));
    }

    #[tokio::test]
    async fn simulate_rejects_unknown_tier() {
        let (status, body) = simulate_handler(Json(SimulateRequest {
            monthly_contribution: 100.0,
            years: 5,
            risk_tier: "yolo".into(),
        }))
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.error.contains("risk_tier"));
    }

    #[tokio::test]
    async fn markets_returns_mock_listing() {
        let response = markets_handler(
            State(mock_state(false)),
            Query(MarketsQuery {
                count: 10,
                currency: "eur".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.assets.len(), 10);
        assert_eq!(response.vs_currency, "eur");
    }

    #[tokio::test]
    async fn advice_without_service_degrades() {
        let (status, body) = advice_handler(
            State(mock_state(false)),
            Json(AdviceRequest {
                prompt: "Help me invest".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.code, "ADVICE_UNCONFIGURED");
    }

    #[tokio::test]
    async fn advice_passes_through_mock_reply() {
        let response = advice_handler(
            State(mock_state(true)),
            Json(AdviceRequest {
                prompt: "Help me invest".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.advice, "Stay diversified.");
        assert_eq!(response.source, "MockAdvice");
    }

    #[tokio::test]
    async fn advice_rejects_empty_prompt() {
        let (status, body) = advice_handler(
            State(mock_state(true)),
            Json(AdviceRequest { prompt: " ".into() }),
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "EMPTY_PROMPT");
    }
}
