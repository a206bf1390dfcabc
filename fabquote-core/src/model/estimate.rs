//! Estimate document and calculation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LaborRoster, LineItem, MarginSpec, PricedLineItem};
use crate::config::DEFAULT_DAYS;

/// A saved estimate in normalized form.
///
/// This is the in-memory shape of the JSON blob attached to a project/client
/// record (`{items, days, labor_details, profit_margin}` in the current
/// format, with several legacy variations accepted by the parser).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateDocument {
    /// Material rows.
    pub items: Vec<LineItem>,
    /// Labor days, shared across all roles.
    pub days: Decimal,
    /// Labor roster (dynamic or legacy shape).
    pub labor: LaborRoster,
    /// Margin specification in whichever shape was persisted.
    pub margin: MarginSpec,
}

impl Default for EstimateDocument {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            days: Decimal::from(DEFAULT_DAYS),
            labor: LaborRoster::default(),
            margin: MarginSpec::default(),
        }
    }
}

/// The full cost/price/advance breakdown for one estimate.
///
/// Created fresh on every calculation call and never mutated in place; every
/// consumer (display, persistence, PDF, profit/loss reporting) recomputes
/// from inputs so independent callers agree on the same figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Sum of `base_rate * quantity` over all items. No unit conversion.
    pub material_base_cost: Decimal,
    /// Sum of margin-inflated row totals (display figure).
    pub material_sell_total: Decimal,
    /// Total labor cost for the roster over the given days.
    pub labor_cost: Decimal,
    /// Material base cost plus labor cost.
    pub total_project_cost: Decimal,
    /// Profit derived from the rounded bill: `bill_amount -
    /// total_project_cost`. Authoritative over the raw computed profit so
    /// profit and bill stay internally consistent.
    pub profit: Decimal,
    /// Final bill, rounded to the nearest whole amount (midpoint away from
    /// zero).
    pub bill_amount: i64,
    /// Upfront advance, the advance percentage of the bill, same rounding.
    pub advance_amount: i64,
    /// Line items annotated with computed unit/total prices.
    pub items: Vec<PricedLineItem>,
}
