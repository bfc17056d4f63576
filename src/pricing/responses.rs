//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::scenarios::ScenarioMatrix;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub per_guest_price: MoneyResponse,
    pub currency_symbol: String,
    /// Ids of the rules that fired, in application order.
    pub applied_rules: Vec<Uuid>,
}

/// One cell of a scenario matrix response
#[derive(Debug, Serialize)]
pub struct ScenarioCellResponse {
    pub guest_count: i32,
    pub lead_time_days: i64,
    pub per_guest_price: MoneyResponse,
    pub applied_rules: Vec<Uuid>,
}

/// Response for scenario matrix generation
#[derive(Debug, Serialize)]
pub struct ScenarioMatrixResponse {
    pub currencies: Vec<String>,
    pub guest_counts: Vec<i32>,
    pub lead_time_days: Vec<i64>,
    pub cells: Vec<ScenarioCellResponse>,
}

impl From<ScenarioMatrix> for ScenarioMatrixResponse {
    fn from(matrix: ScenarioMatrix) -> Self {
        Self {
            currencies: matrix.currencies,
            guest_counts: matrix.guest_counts,
            lead_time_days: matrix.lead_time_days,
            cells: matrix
                .cells
                .into_iter()
                .map(|cell| ScenarioCellResponse {
                    guest_count: cell.guest_count,
                    lead_time_days: cell.lead_time_days,
                    per_guest_price: MoneyResponse {
                        amount: cell.per_guest_price,
                        currency: cell.currency,
                    },
                    applied_rules: cell.applied_rules,
                })
                .collect(),
        }
    }
}

/// Response for the liveness probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
