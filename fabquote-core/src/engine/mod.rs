//! The estimate calculation engine.

mod calculator;
mod labor;
mod margin;

pub use calculator::{calculate_document, calculate_estimate};
pub use labor::labor_cost;
pub use margin::{margin_multiplier, resolve_margin};
