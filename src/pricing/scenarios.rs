//! Scenario matrix generation.
//!
//! Backs the admin rule editor's preview grid: one priced cell per
//! combination of target currency, guest count, and lead time, all computed
//! against the same rule set and travel date. Each cell is priced by
//! `compute_quote` with that cell's booking context.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::calculators::compute_quote;
use super::models::{BasePricing, BookingContext, CurrencyTable, PricingError, PricingRule};

/// One priced combination in the preview grid.
#[derive(Debug, Clone)]
pub struct ScenarioCell {
    pub currency: String,
    pub guest_count: i32,
    pub lead_time_days: i64,
    pub per_guest_price: Decimal,
    pub applied_rules: Vec<Uuid>,
}

/// The full preview grid. Echoes the requested axes so a consumer can lay
/// the cells back out as a table; cells are in row-major order, currency
/// outermost, then guest count, then lead time.
#[derive(Debug, Clone)]
pub struct ScenarioMatrix {
    pub currencies: Vec<String>,
    pub guest_counts: Vec<i32>,
    pub lead_time_days: Vec<i64>,
    pub cells: Vec<ScenarioCell>,
}

/// Price every combination of the requested axes.
///
/// The matrix is atomic: the first failing cell aborts the whole build with
/// that cell's error. An empty axis yields an empty matrix. The travel date,
/// when given, is shared by every cell.
pub fn build_matrix(
    base_pricing: &BasePricing,
    rules: &[PricingRule],
    currency_table: &CurrencyTable,
    currencies: &[String],
    guest_counts: &[i32],
    lead_times: &[i64],
    travel_date: Option<NaiveDate>,
) -> Result<ScenarioMatrix, PricingError> {
    let mut cells =
        Vec::with_capacity(currencies.len() * guest_counts.len() * lead_times.len());
    for currency in currencies {
        for &guest_count in guest_counts {
            for &lead_time_days in lead_times {
                let context = BookingContext {
                    target_currency: currency.clone(),
                    guest_count,
                    lead_time_days,
                    travel_date,
                };
                let quote = compute_quote(base_pricing, rules, currency_table, &context)?;
                cells.push(ScenarioCell {
                    currency: quote.currency,
                    guest_count,
                    lead_time_days,
                    per_guest_price: quote.per_guest_price,
                    applied_rules: quote.applied_rules,
                });
            }
        }
    }
    Ok(ScenarioMatrix {
        currencies: currencies.to_vec(),
        guest_counts: guest_counts.to_vec(),
        lead_time_days: lead_times.to_vec(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Adjustment, CurrencyRate, RuleKind, SeasonWindow};
    use rust_decimal_macros::dec;

    fn fixture_table() -> CurrencyTable {
        CurrencyTable::new(vec![
            CurrencyRate {
                code: "USD".to_string(),
                name: "US Dollar".to_string(),
                rate: dec!(1.0),
                symbol: "$".to_string(),
            },
            CurrencyRate {
                code: "EUR".to_string(),
                name: "Euro".to_string(),
                rate: dec!(0.85),
                symbol: "\u{20ac}".to_string(),
            },
        ])
    }

    fn fixture_base() -> BasePricing {
        BasePricing {
            base_price: dec!(100),
            base_currency: "USD".to_string(),
            minimum_price: dec!(50),
            maximum_price: dec!(500),
        }
    }

    fn fixture_rules() -> Vec<PricingRule> {
        vec![
            PricingRule {
                id: Uuid::new_v4(),
                name: "Group discount".to_string(),
                kind: RuleKind::GroupSize { min_guests: 5 },
                adjustment: Adjustment::Percentage(dec!(-15)),
                is_active: true,
            },
            PricingRule {
                id: Uuid::new_v4(),
                name: "Early bird".to_string(),
                kind: RuleKind::EarlyBird { min_days: 30 },
                adjustment: Adjustment::Percentage(dec!(-10)),
                is_active: true,
            },
        ]
    }

    fn strings(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    #[test]
    fn test_matrix_row_major_order_and_prices() {
        let matrix = build_matrix(
            &fixture_base(),
            &fixture_rules(),
            &fixture_table(),
            &strings(&["USD", "EUR"]),
            &[1, 5],
            &[10, 40],
            None,
        )
        .unwrap();

        assert_eq!(matrix.currencies, strings(&["USD", "EUR"]));
        assert_eq!(matrix.guest_counts, vec![1, 5]);
        assert_eq!(matrix.lead_time_days, vec![10, 40]);

        let axes: Vec<(&str, i32, i64)> = matrix
            .cells
            .iter()
            .map(|cell| (cell.currency.as_str(), cell.guest_count, cell.lead_time_days))
            .collect();
        assert_eq!(
            axes,
            vec![
                ("USD", 1, 10),
                ("USD", 1, 40),
                ("USD", 5, 10),
                ("USD", 5, 40),
                ("EUR", 1, 10),
                ("EUR", 1, 40),
                ("EUR", 5, 10),
                ("EUR", 5, 40),
            ]
        );

        let prices: Vec<Decimal> = matrix.cells.iter().map(|cell| cell.per_guest_price).collect();
        assert_eq!(
            prices,
            vec![
                dec!(100.00), // no rules
                dec!(90.00),  // early bird
                dec!(85.00),  // group
                dec!(76.50),  // both: 100 * 0.85 * 0.90
                dec!(85.00),
                dec!(76.50),
                dec!(72.25),
                dec!(65.03), // 76.5 * 0.85 = 65.025, half-up
            ]
        );
    }

    #[test]
    fn test_matrix_cells_carry_applied_rules() {
        let rules = fixture_rules();
        let matrix = build_matrix(
            &fixture_base(),
            &rules,
            &fixture_table(),
            &strings(&["USD"]),
            &[5],
            &[40],
            None,
        )
        .unwrap();
        assert_eq!(matrix.cells.len(), 1);
        assert_eq!(matrix.cells[0].applied_rules, vec![rules[0].id, rules[1].id]);
    }

    #[test]
    fn test_matrix_empty_axis_gives_empty_matrix() {
        let matrix = build_matrix(
            &fixture_base(),
            &fixture_rules(),
            &fixture_table(),
            &[],
            &[1, 5],
            &[10],
            None,
        )
        .unwrap();
        assert!(matrix.cells.is_empty());
    }

    #[test]
    fn test_matrix_unknown_currency_aborts_whole_build() {
        let err = build_matrix(
            &fixture_base(),
            &fixture_rules(),
            &fixture_table(),
            &strings(&["USD", "XXX"]),
            &[1],
            &[10],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::UnknownCurrency { ref code } if code == "XXX"));
    }

    #[test]
    fn test_matrix_invalid_cell_aborts_whole_build() {
        let err = build_matrix(
            &fixture_base(),
            &fixture_rules(),
            &fixture_table(),
            &strings(&["USD"]),
            &[1, 0],
            &[10],
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidGuestCount { guest_count: 0 }
        ));
    }

    #[test]
    fn test_matrix_shares_travel_date_across_cells() {
        let seasonal = PricingRule {
            id: Uuid::new_v4(),
            name: "Summer season".to_string(),
            kind: RuleKind::Seasonal(SeasonWindow {
                start_month: 6,
                start_day: 1,
                end_month: 8,
                end_day: 31,
            }),
            adjustment: Adjustment::Percentage(dec!(25)),
            is_active: true,
        };
        let travel_date = NaiveDate::from_ymd_opt(2026, 7, 15);

        let matrix = build_matrix(
            &fixture_base(),
            &[seasonal.clone()],
            &fixture_table(),
            &strings(&["USD", "EUR"]),
            &[1, 2],
            &[5],
            travel_date,
        )
        .unwrap();
        for cell in &matrix.cells {
            assert_eq!(cell.applied_rules, vec![seasonal.id]);
        }

        // Same rule set without a date cannot be priced at all.
        let err = build_matrix(
            &fixture_base(),
            &[seasonal],
            &fixture_table(),
            &strings(&["USD"]),
            &[1],
            &[5],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::MissingTravelDate { .. }));
    }
}
