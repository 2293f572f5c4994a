//! Fuelquote API Gateway
//!
//! HTTP front end for the fuel price quote service:
//! - `POST /calculate`: validate the request, price it, format it
//! - `GET /`: static presentation page
//! - `GET /health`: liveness probe

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use fuelquote_common::{
    Country, CustomerTier, FormattedQuote, GridLocation, PriceBreakdown, QuoteError,
    ValidationError,
};
use fuelquote_pricing::{format_quote, PricingEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

// ============ STATE ============

#[derive(Clone)]
struct AppState {
    engine: Arc<PricingEngine>,
}

// ============ REQUEST / RESPONSE TYPES ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    customer_tier: i64,
    country: String,
    grid_location: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    result: PriceBreakdown,
    formatted: FormattedQuote,
}

/// Error responder: validation failures are 400, everything else 500,
/// always with a JSON `error` body
struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(QuoteError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

// ============ HANDLERS ============

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": fuelquote_common::VERSION,
    }))
}

async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, ApiError> {
    // Syntax and shape errors both answer 500 while domain validation answers
    // 400, so the body is deserialized inside the handler rather than by the
    // `Json` extractor (whose rejections are plain-text 400s).
    let req: CalculateRequest = serde_json::from_slice(&body).map_err(QuoteError::from)?;

    let tier = CustomerTier::new(req.customer_tier)?;
    let country: Country = req.country.parse()?;
    let grid_location: GridLocation = req.grid_location.parse()?;

    let result = state.engine.calculate(tier, country, grid_location);
    let formatted = format_quote(&result);

    info!(
        tier = tier.get(),
        %country,
        %grid_location,
        final_price = %result.final_price,
        "quote served"
    );

    Ok(Json(CalculateResponse { result, formatted }))
}

// ============ ROUTER ============

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/calculate", post(calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

// ============ MAIN ============

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_gateway=info".parse()?),
        )
        .json()
        .init();

    dotenvy::dotenv().ok();

    let state = AppState {
        engine: Arc::new(PricingEngine::default()),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);
    info!("Fuelquote API gateway starting on {}", addr);
    info!("Endpoints: /, /health, /calculate");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
