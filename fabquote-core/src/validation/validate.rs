//! Validation of estimate inputs before calculation.
//!
//! The calculator itself is total and assumes sanitized input; these checks
//! are the sanitization step. Errors block the pipeline entry point, while
//! warnings are logged and the degraded output is tolerated.

use rust_decimal::Decimal;

use crate::model::{EstimateDocument, LaborRoster, MarginSpec};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a decoded estimate document.
pub fn validate_document(document: &EstimateDocument) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if document.days <= Decimal::ZERO {
        result.add_error(format!(
            "Days must be positive, got {}",
            document.days
        ));
    }

    for (idx, item) in document.items.iter().enumerate() {
        let row = idx + 1;
        if item.quantity < Decimal::ZERO {
            result.add_error(format!(
                "Item {} '{}': negative quantity {}",
                row, item.name, item.quantity
            ));
        }
        if item.base_rate < Decimal::ZERO {
            result.add_error(format!(
                "Item {} '{}': negative base rate {}",
                row, item.name, item.base_rate
            ));
        }
        if item.quantity.is_zero() {
            result.add_warning(format!(
                "Item {} '{}': zero quantity contributes nothing",
                row, item.name
            ));
        }
    }

    match &document.labor {
        LaborRoster::Dynamic(allocations) => {
            for allocation in allocations {
                if allocation.count < Decimal::ZERO {
                    result.add_error(format!(
                        "Labor role '{}': negative count {}",
                        allocation.role, allocation.count
                    ));
                }
                if allocation.daily_rate < Decimal::ZERO {
                    result.add_error(format!(
                        "Labor role '{}': negative daily rate {}",
                        allocation.role, allocation.daily_rate
                    ));
                }
            }
        }
        LaborRoster::Legacy { welders, helpers } => {
            if *welders < Decimal::ZERO || *helpers < Decimal::ZERO {
                result.add_error(format!(
                    "Negative legacy labor counts (welders {}, helpers {})",
                    welders, helpers
                ));
            }
        }
    }

    if document.items.is_empty() && document.labor.is_empty() {
        result.add_warning("No items and no labor: the estimate resolves to zero");
    }

    if let MarginSpec::Percent(percent) | MarginSpec::SingleProfitPercent(percent) =
        &document.margin
    {
        if *percent > Decimal::ONE_HUNDRED {
            result.add_warning(format!("Margin above 100% ({})", percent));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Unit;
    use crate::model::{LineItem, RoleAllocation};

    fn document_with_items(items: Vec<LineItem>) -> EstimateDocument {
        EstimateDocument {
            items,
            ..EstimateDocument::default()
        }
    }

    #[test]
    fn test_clean_document_passes() {
        let document = document_with_items(vec![LineItem::new(
            "MS Angle",
            Decimal::from(10),
            Decimal::from(65),
            Unit::Kg,
        )]);
        let result = validate_document(&document);
        assert!(result.passed);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_negative_quantity_is_an_error() {
        let document = document_with_items(vec![LineItem::new(
            "MS Angle",
            Decimal::from(-1),
            Decimal::from(65),
            Unit::Kg,
        )]);
        let result = validate_document(&document);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_zero_quantity_is_only_a_warning() {
        let document = document_with_items(vec![LineItem::new(
            "Hinge",
            Decimal::ZERO,
            Decimal::from(40),
            Unit::Pcs,
        )]);
        let result = validate_document(&document);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_non_positive_days_is_an_error() {
        let document = EstimateDocument {
            days: Decimal::ZERO,
            ..EstimateDocument::default()
        };
        let result = validate_document(&document);
        assert!(!result.passed);
    }

    #[test]
    fn test_negative_labor_is_an_error() {
        let document = EstimateDocument {
            labor: LaborRoster::Dynamic(vec![RoleAllocation::new(
                "Welder",
                Decimal::from(-2),
                Decimal::from(500),
            )]),
            ..EstimateDocument::default()
        };
        let result = validate_document(&document);
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_estimate_warns() {
        let result = validate_document(&EstimateDocument::default());
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("resolves to zero")));
    }

    #[test]
    fn test_margin_above_100_warns() {
        let document = EstimateDocument {
            margin: MarginSpec::Percent(Decimal::from(150)),
            ..EstimateDocument::default()
        };
        let result = validate_document(&document);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("100%")));
    }
}
