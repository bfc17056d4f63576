//! Pricing API route handlers
//!
//! Thin JSON adapters over the calculation core. Handlers deserialize,
//! build the currency table, call the engine, and map the result onto the
//! response DTOs; all pricing semantics live in `calculators` and
//! `scenarios`.

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;

use super::calculators::compute_quote;
use super::models::CurrencyTable;
use super::requests::{QuoteRequest, ScenarioMatrixRequest};
use super::responses::{HealthResponse, MoneyResponse, QuoteResponse, ScenarioMatrixResponse};
use super::scenarios::build_matrix;

/// Build the pricing API router
pub fn router() -> Router {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/scenarios", post(scenarios))
        .route("/api/pricing/health", get(health))
}

/// Quote one booking context
async fn quote(Json(request): Json<QuoteRequest>) -> Result<Json<QuoteResponse>> {
    let table = CurrencyTable::new(request.currency_table);
    let result = compute_quote(&request.base_pricing, &request.rules, &table, &request.context)?;
    let currency_symbol = table.symbol_of(&result.currency)?.to_string();
    tracing::debug!(
        "Quote computed: {} {} ({} of {} rules applied)",
        result.per_guest_price,
        result.currency,
        result.applied_rules.len(),
        request.rules.len()
    );

    Ok(Json(QuoteResponse {
        per_guest_price: MoneyResponse {
            amount: result.per_guest_price,
            currency: result.currency,
        },
        currency_symbol,
        applied_rules: result.applied_rules,
    }))
}

/// Price a scenario preview grid
async fn scenarios(
    Json(request): Json<ScenarioMatrixRequest>,
) -> Result<Json<ScenarioMatrixResponse>> {
    let table = CurrencyTable::new(request.currency_table);
    let matrix = build_matrix(
        &request.base_pricing,
        &request.rules,
        &table,
        &request.currencies,
        &request.guest_counts,
        &request.lead_time_days,
        request.travel_date,
    )?;
    tracing::debug!("Scenario matrix built: {} cells", matrix.cells.len());

    Ok(Json(matrix.into()))
}

/// Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
