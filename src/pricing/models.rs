//! Domain model for the pricing engine.
//!
//! Rule sets and currency tables are operator-authored configuration: the
//! admin rule editor produces them, every quote request carries them, and the
//! engine treats them as immutable snapshots. Replacing a rule is sending a
//! new payload, never mutating one in flight.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single conditional price adjustment.
///
/// Rule order inside a set is significant: rules fold left to right over the
/// running price, so percentage rules compound instead of stacking on the
/// base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRule {
    pub id: Uuid,
    /// Display label, no semantic effect.
    pub name: String,
    #[serde(flatten)]
    pub kind: RuleKind,
    #[serde(flatten)]
    pub adjustment: Adjustment,
    /// Inactive rules are skipped entirely and never reach the evaluator.
    pub is_active: bool,
}

/// Rule type together with its condition data.
///
/// A closed enumeration: a new rule type requires an explicit evaluator
/// branch. Keeping type and condition in one variant makes mismatched
/// combinations unrepresentable. On the wire this is the `type` /
/// `condition` field pair the admin editor authors, e.g.
/// `{"type": "group_size", "condition": {"min_guests": 5}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "condition", rename_all = "snake_case")]
pub enum RuleKind {
    /// Travel date falls inside a month/day window.
    Seasonal(SeasonWindow),
    /// Booking has at least `min_guests` guests.
    GroupSize { min_guests: i32 },
    /// Booked at least `min_days` before the experience.
    EarlyBird { min_days: i64 },
    /// Booked at most `max_days` before the experience.
    LastMinute { max_days: i64 },
}

/// A month/day span checked against the travel date, bounds inclusive.
///
/// Spans where the start falls after the end wrap the year end, so a
/// December through February high season is a single window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SeasonWindow {
    /// Check whether a travel date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let point = (date.month(), date.day());
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);
        if start <= end {
            start <= point && point <= end
        } else {
            point >= start || point <= end
        }
    }
}

/// The effect a rule has on the running price. Negative amounts are
/// discounts, positive amounts are surcharges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "adjustment_type",
    content = "adjustment",
    rename_all = "snake_case"
)]
pub enum Adjustment {
    /// Signed percent applied to the running price.
    Percentage(#[serde(with = "rust_decimal::serde::str")] Decimal),
    /// Signed amount in base-currency units.
    Fixed(#[serde(with = "rust_decimal::serde::str")] Decimal),
}

impl Adjustment {
    /// Apply the adjustment to a running price.
    pub fn apply(&self, price: Decimal) -> Decimal {
        match self {
            Adjustment::Percentage(percent) => {
                price * (Decimal::ONE + percent / Decimal::ONE_HUNDRED)
            }
            Adjustment::Fixed(amount) => price + amount,
        }
    }
}

/// One currency the operator quotes in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// ISO-4217 style identifier, unique within a table.
    pub code: String,
    pub name: String,
    /// price-in-this-currency = price-in-base-currency * rate. Exactly one
    /// currency in a table is the implicit base with rate 1.0.
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    /// Display glyph, no computational role.
    pub symbol: String,
}

/// Immutable lookup table built once per calculation from the operator's
/// currency list. Swapping in new FX rates means building a new table, so a
/// calculation in flight always sees one consistent snapshot.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    rates: HashMap<String, CurrencyRate>,
}

impl CurrencyTable {
    /// Build a table from an operator-supplied currency list. The engine
    /// does not validate payload shape; on duplicate codes the last entry
    /// wins.
    pub fn new(rates: Vec<CurrencyRate>) -> Self {
        Self {
            rates: rates
                .into_iter()
                .map(|rate| (rate.code.clone(), rate))
                .collect(),
        }
    }

    /// Conversion rate for a currency code.
    pub fn rate_of(&self, code: &str) -> Result<Decimal, PricingError> {
        self.rates
            .get(code)
            .map(|rate| rate.rate)
            .ok_or_else(|| PricingError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    /// Display symbol for a currency code.
    pub fn symbol_of(&self, code: &str) -> Result<&str, PricingError> {
        self.rates
            .get(code)
            .map(|rate| rate.symbol.as_str())
            .ok_or_else(|| PricingError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }
}

/// Base price and bounds, all denominated in `base_currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePricing {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub base_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub maximum_price: Decimal,
}

/// Per-quote input, built fresh for every calculation and discarded after
/// use. The engine holds no state across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingContext {
    pub target_currency: String,
    pub guest_count: i32,
    /// Days between the quote request and the experience date.
    pub lead_time_days: i64,
    /// Calendar date of the experience, required whenever an active seasonal
    /// rule has to be evaluated.
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
}

/// Result of a quote calculation.
#[derive(Debug, Clone)]
pub struct QuoteResult {
    /// Final rounded price for one guest, in `currency`.
    pub per_guest_price: Decimal,
    pub currency: String,
    /// Ids of the rules that fired, in application order.
    pub applied_rules: Vec<Uuid>,
}

/// Pricing calculation error types.
///
/// All variants are synchronous validation failures on the inputs of a
/// single calculation: a quote either succeeds whole or fails atomically,
/// and nothing here is retry-able.
#[derive(Debug, Clone)]
pub enum PricingError {
    UnknownCurrency {
        code: String,
    },
    InvalidBounds {
        minimum: Decimal,
        maximum: Decimal,
    },
    InvalidGuestCount {
        guest_count: i32,
    },
    InvalidLeadTime {
        lead_time_days: i64,
    },
    /// An active seasonal rule was evaluated without a travel date.
    MissingTravelDate {
        rule_id: Uuid,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::UnknownCurrency { code } => {
                write!(f, "Currency '{}' is not in the currency table", code)
            }
            PricingError::InvalidBounds { minimum, maximum } => {
                write!(
                    f,
                    "Minimum price {} exceeds maximum price {}",
                    minimum, maximum
                )
            }
            PricingError::InvalidGuestCount { guest_count } => {
                write!(f, "Guest count must be at least 1, got {}", guest_count)
            }
            PricingError::InvalidLeadTime { lead_time_days } => {
                write!(
                    f,
                    "Lead time days cannot be negative, got {}",
                    lead_time_days
                )
            }
            PricingError::MissingTravelDate { rule_id } => {
                write!(
                    f,
                    "Seasonal rule {} requires a travel date in the booking context",
                    rule_id
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}
