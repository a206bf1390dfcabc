//! Material line items for an estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Unit;

/// One material/hardware row of an estimate, as entered by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as shown on the estimate.
    pub name: String,
    /// Quantity in the stated unit.
    pub quantity: Decimal,
    /// Cost per stated unit. The rate is literally per-unit; no unit
    /// conversion factor is applied anywhere.
    pub base_rate: Decimal,
    /// Unit of measure (descriptive only).
    pub unit: Unit,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        base_rate: Decimal,
        unit: Unit,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            base_rate,
            unit,
        }
    }

    /// Base cost of this row: `base_rate * quantity`.
    pub fn line_cost(&self) -> Decimal {
        self.base_rate * self.quantity
    }
}

/// A line item annotated with its computed prices.
///
/// Display convention: `unit_price` surfaces the per-unit cost (equal to
/// `base_rate`), while `total_price` carries the margin-inflated sell total.
/// The asymmetry is intentional and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLineItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub base_rate: Decimal,
    /// Per-unit price shown on the estimate. Equals `base_rate` (cost).
    pub unit_price: Decimal,
    /// Sell total for the row: `base_rate * quantity * (1 + margin/100)`.
    pub total_price: Decimal,
}

impl PricedLineItem {
    /// Price a line item under the given margin multiplier.
    pub fn price(item: &LineItem, margin_multiplier: Decimal) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit,
            base_rate: item.base_rate,
            unit_price: item.base_rate,
            total_price: item.line_cost() * margin_multiplier,
        }
    }
}
