//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no state across calls. Both the
//! guest-facing quote endpoint and the admin scenario preview price through
//! `compute_quote`, so the two surfaces can never drift apart.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{
    BasePricing, BookingContext, CurrencyTable, PricingError, PricingRule, QuoteResult, RuleKind,
};

/// Round to specified decimal places using half-up rounding
/// (ROUND_HALF_AWAY_FROM_ZERO).
///
/// Half-up matches the minor-unit convention quotes are displayed in. The
/// engine rounds once, after conversion and clamping, so intermediate rule
/// applications keep full precision.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tourwise_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(95.625), 2), dec!(95.63));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Decide whether a rule's condition holds for a booking context.
///
/// - `GroupSize`: `guest_count >= min_guests`
/// - `EarlyBird`: `lead_time_days >= min_days`
/// - `LastMinute`: `lead_time_days <= max_days`
/// - `Seasonal`: the travel date falls inside the rule's window; evaluating
///   a seasonal rule without a travel date fails with `MissingTravelDate`
///
/// Inactive rules are filtered out upstream and never reach this predicate.
pub fn rule_applies(rule: &PricingRule, context: &BookingContext) -> Result<bool, PricingError> {
    match &rule.kind {
        RuleKind::Seasonal(window) => {
            let travel_date = context
                .travel_date
                .ok_or(PricingError::MissingTravelDate { rule_id: rule.id })?;
            Ok(window.contains(travel_date))
        }
        RuleKind::GroupSize { min_guests } => Ok(context.guest_count >= *min_guests),
        RuleKind::EarlyBird { min_days } => Ok(context.lead_time_days >= *min_days),
        RuleKind::LastMinute { max_days } => Ok(context.lead_time_days <= *max_days),
    }
}

/// Compute the final bookable per-guest price for one booking context.
///
/// The calculation is a deterministic, order-preserving fold:
/// 1. Start from `base_price` and apply every active rule whose condition
///    holds, in rule-set order. Each adjustment applies to the running
///    price, so percentage rules compound.
/// 2. Convert to the target currency.
/// 3. Clamp to the currency-adjusted minimum/maximum bounds.
/// 4. Round to 2 decimal places, half-up.
///
/// The result is per guest. Multiplying by guest count is the caller's
/// product decision; flat-rate products simply skip it.
///
/// # Errors
/// `InvalidGuestCount` when `guest_count < 1`, `InvalidLeadTime` when
/// `lead_time_days < 0`, `InvalidBounds` when the minimum exceeds the
/// maximum, `UnknownCurrency` when the base or target currency is missing
/// from the table, and `MissingTravelDate` from seasonal evaluation.
pub fn compute_quote(
    base_pricing: &BasePricing,
    rules: &[PricingRule],
    currency_table: &CurrencyTable,
    context: &BookingContext,
) -> Result<QuoteResult, PricingError> {
    if context.guest_count < 1 {
        return Err(PricingError::InvalidGuestCount {
            guest_count: context.guest_count,
        });
    }
    if context.lead_time_days < 0 {
        return Err(PricingError::InvalidLeadTime {
            lead_time_days: context.lead_time_days,
        });
    }
    if base_pricing.minimum_price > base_pricing.maximum_price {
        return Err(PricingError::InvalidBounds {
            minimum: base_pricing.minimum_price,
            maximum: base_pricing.maximum_price,
        });
    }
    // The base currency never multiplies anything (rate 1.0 by table
    // convention), but a table without it is a broken snapshot.
    if !currency_table.contains(&base_pricing.base_currency) {
        return Err(PricingError::UnknownCurrency {
            code: base_pricing.base_currency.clone(),
        });
    }
    let rate = currency_table.rate_of(&context.target_currency)?;

    let mut running = base_pricing.base_price;
    let mut applied_rules = Vec::new();
    for rule in rules.iter().filter(|rule| rule.is_active) {
        if rule_applies(rule, context)? {
            running = rule.adjustment.apply(running);
            applied_rules.push(rule.id);
        }
    }

    let converted = running * rate;
    let minimum = base_pricing.minimum_price * rate;
    let maximum = base_pricing.maximum_price * rate;
    let clamped = minimum.max(maximum.min(converted));

    Ok(QuoteResult {
        per_guest_price: round_money(clamped, 2),
        currency: context.target_currency.clone(),
        applied_rules,
    })
}
