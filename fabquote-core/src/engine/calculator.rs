//! The estimate calculator.
//!
//! Centralized calculation: every consumer (display, persistence, PDF,
//! profit/loss reporting) goes through [`calculate_estimate`] so independent
//! callers produce identical figures for the same inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::GlobalSettings;
use crate::engine::labor::labor_cost;
use crate::engine::margin::{margin_multiplier, resolve_margin};
use crate::model::{EstimateDocument, EstimateResult, LaborRoster, LineItem, MarginSpec, PricedLineItem};

/// Compute the full cost/price/advance breakdown for one estimate.
///
/// Pure, synchronous and idempotent: identical inputs yield an identical
/// [`EstimateResult`], field for field. The engine assumes sanitized input
/// (see [`validate_document`](crate::validation::validate_document)) and is
/// total over the documented domain; zero quantities and an empty item list
/// are ordinary inputs, not errors.
pub fn calculate_estimate(
    items: &[LineItem],
    days: Decimal,
    margin: &MarginSpec,
    settings: &GlobalSettings,
    roster: &LaborRoster,
) -> EstimateResult {
    let percent = resolve_margin(margin, settings);
    let multiplier = margin_multiplier(percent);

    let mut material_base_cost = Decimal::ZERO;
    let mut material_sell_total = Decimal::ZERO;
    let mut priced = Vec::with_capacity(items.len());
    for item in items {
        let row = PricedLineItem::price(item, multiplier);
        material_base_cost += item.line_cost();
        material_sell_total += row.total_price;
        priced.push(row);
    }

    let labor = labor_cost(roster, days, settings);
    let total_project_cost = material_base_cost + labor;

    let profit_amount = total_project_cost * Decimal::from(percent) / Decimal::ONE_HUNDRED;
    let raw_bill = total_project_cost + profit_amount;
    let bill_amount = round_to_whole(raw_bill);

    // Profit is re-derived from the rounded bill so profit and bill stay
    // internally consistent; the raw computed profit is not authoritative.
    let profit = Decimal::from(bill_amount) - total_project_cost;

    let advance_amount = round_to_whole(
        Decimal::from(bill_amount) * settings.advance_percentage / Decimal::ONE_HUNDRED,
    );

    EstimateResult {
        material_base_cost,
        material_sell_total,
        labor_cost: labor,
        total_project_cost,
        profit,
        bill_amount,
        advance_amount,
        items: priced,
    }
}

/// Compute the breakdown for a saved estimate document.
pub fn calculate_document(
    document: &EstimateDocument,
    settings: &GlobalSettings,
) -> EstimateResult {
    calculate_estimate(
        &document.items,
        document.days,
        &document.margin,
        settings,
        &document.labor,
    )
}

/// Bill rounding policy: nearest whole amount, midpoint away from zero.
fn round_to_whole(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}
