//! fabquote-core - Estimate calculation engine for fabrication jobs.
//!
//! This library turns a bill of materials, a labor roster, and a margin
//! policy into a deterministic cost/price/advance breakdown, and normalizes
//! the historical persisted formats for margin configuration and labor
//! rosters. The surrounding application (UI, persistence, PDF layout,
//! reporting) supplies plain records and consumes the computed totals.
//!
//! # Example
//!
//! ```
//! use fabquote_core::{
//!     calculate_estimate, GlobalSettings, LaborRoster, LineItem, MarginSpec,
//!     RoleAllocation, Unit,
//! };
//! use rust_decimal::Decimal;
//!
//! let items = vec![LineItem::new(
//!     "MS Angle",
//!     Decimal::from(10),
//!     Decimal::from(65),
//!     Unit::Kg,
//! )];
//! let roster = LaborRoster::Dynamic(vec![RoleAllocation::new(
//!     "Welder",
//!     Decimal::from(1),
//!     Decimal::from(500),
//! )]);
//! let result = calculate_estimate(
//!     &items,
//!     Decimal::from(2),
//!     &MarginSpec::Percent(Decimal::from(15)),
//!     &GlobalSettings::default(),
//!     &roster,
//! );
//! assert_eq!(result.bill_amount, 1898);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{GlobalSettings, Unit};
pub use engine::{calculate_document, calculate_estimate, resolve_margin};
pub use error::{EstimateError, Result};
pub use model::{
    EstimateDocument, EstimateResult, LaborRoster, LineItem, MarginSpec, PricedLineItem,
    RoleAllocation,
};
pub use parser::{load_estimate_file, load_settings_file, parse_document};
pub use validation::{validate_document, ValidationResult};

/// Price a saved estimate file.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Load and leniently decode the estimate document
/// 2. Validate the inputs
/// 3. Compute the cost/price/advance breakdown
///
/// Validation warnings are logged and the calculation proceeds; validation
/// errors abort the pipeline.
pub fn price_estimate_file(
    path: &std::path::Path,
    settings: &GlobalSettings,
) -> Result<EstimateResult> {
    let document = load_estimate_file(path)?;

    let validation = validate_document(&document);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(EstimateError::ValidationFailed {
            errors: validation.errors,
        });
    }

    Ok(calculate_document(&document, settings))
}
