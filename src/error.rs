//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::models::PricingError;
use crate::pricing::responses::PricingErrorResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Pricing(e) => {
                tracing::warn!("Pricing request rejected: {}", e);
                let body = PricingErrorResponse {
                    error_type: error_type(&e).to_string(),
                    message: e.to_string(),
                    details: details(&e),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

/// Stable machine-readable tag per pricing error variant. Clients branch on
/// this, so renames are breaking changes.
fn error_type(error: &PricingError) -> &'static str {
    match error {
        PricingError::UnknownCurrency { .. } => "unknown_currency",
        PricingError::InvalidBounds { .. } => "invalid_bounds",
        PricingError::InvalidGuestCount { .. } => "invalid_guest_count",
        PricingError::InvalidLeadTime { .. } => "invalid_lead_time",
        PricingError::MissingTravelDate { .. } => "missing_travel_date",
    }
}

/// The offending values, echoed back so the admin editor can highlight the
/// field without parsing the message. Decimals cross the wire as strings.
fn details(error: &PricingError) -> Option<serde_json::Value> {
    match error {
        PricingError::UnknownCurrency { code } => Some(serde_json::json!({ "code": code })),
        PricingError::InvalidBounds { minimum, maximum } => Some(serde_json::json!({
            "minimum": minimum.to_string(),
            "maximum": maximum.to_string(),
        })),
        PricingError::InvalidGuestCount { guest_count } => {
            Some(serde_json::json!({ "guest_count": guest_count }))
        }
        PricingError::InvalidLeadTime { lead_time_days } => {
            Some(serde_json::json!({ "lead_time_days": lead_time_days }))
        }
        PricingError::MissingTravelDate { rule_id } => {
            Some(serde_json::json!({ "rule_id": rule_id }))
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
