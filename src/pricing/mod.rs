//! Pricing engine module for tourwise.
//!
//! Deterministic per-guest pricing for bookable experiences: a base price,
//! an ordered set of conditional adjustment rules, currency conversion, and
//! price bounds. The booking widget and the admin rule editor call this
//! module via HTTP/JSON; the calculation core is pure and holds no state.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod scenarios;

// Re-export commonly used items
pub use calculators::{compute_quote, round_money, rule_applies};
pub use models::{
    Adjustment, BasePricing, BookingContext, CurrencyRate, CurrencyTable, PricingError,
    PricingRule, QuoteResult, RuleKind, SeasonWindow,
};
pub use routes::router;
pub use scenarios::{build_matrix, ScenarioCell, ScenarioMatrix};
