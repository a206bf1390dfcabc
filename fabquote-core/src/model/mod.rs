//! Domain model for estimates.

mod estimate;
mod item;
mod labor;
mod margin;

pub use estimate::{EstimateDocument, EstimateResult};
pub use item::{LineItem, PricedLineItem};
pub use labor::{LaborRoster, RoleAllocation};
pub use margin::MarginSpec;
