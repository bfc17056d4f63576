//! Request DTOs for pricing API endpoints.
//!
//! Every request is self-contained: it carries the base pricing, the rule
//! set, and the currency list it wants priced against. The service keeps no
//! state between requests, so callers can never observe a half-updated rule
//! set.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::{BasePricing, BookingContext, CurrencyRate, PricingRule};

/// Request to quote one booking context
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub base_pricing: BasePricing,
    #[serde(default)]
    pub rules: Vec<PricingRule>,
    pub currency_table: Vec<CurrencyRate>,
    pub context: BookingContext,
}

/// Request to price a scenario preview grid
#[derive(Debug, Deserialize)]
pub struct ScenarioMatrixRequest {
    pub base_pricing: BasePricing,
    #[serde(default)]
    pub rules: Vec<PricingRule>,
    pub currency_table: Vec<CurrencyRate>,
    /// Target currencies to price, any subset of the table.
    pub currencies: Vec<String>,
    pub guest_counts: Vec<i32>,
    pub lead_time_days: Vec<i64>,
    /// Shared by every cell in the grid.
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
}
