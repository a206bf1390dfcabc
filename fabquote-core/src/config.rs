//! Configuration types and default values for the estimate engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default profit margin percent when neither the estimate nor the settings
/// carry one.
pub const DEFAULT_PROFIT_MARGIN_PERCENT: u32 = 15;

/// Default advance percentage of the final bill.
pub const DEFAULT_ADVANCE_PERCENTAGE: u32 = 10;

/// Default welder daily rate for the legacy two-role labor fallback.
pub const DEFAULT_WELDER_DAILY_RATE: u32 = 500;

/// Default helper daily rate for the legacy two-role labor fallback.
pub const DEFAULT_HELPER_DAILY_RATE: u32 = 300;

/// Default base daily labor cost. Legacy: kept in the persisted settings
/// shape but no longer consumed by the labor computation.
pub const DEFAULT_DAILY_LABOR_COST: u32 = 1000;

/// Default number of labor days when a saved estimate omits the field.
pub const DEFAULT_DAYS: u32 = 1;

/// Unit of measure for a material line item.
///
/// Units are descriptive only: the base rate of an item is defined as being
/// "per stated unit", so no conversion factor is ever applied to cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pcs,
    M,
    Ft,
    Cm,
    In,
    Kg,
    Pkt,
    Each,
}

impl Unit {
    /// Parse a unit from its persisted string form.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pcs" => Some(Unit::Pcs),
            "m" => Some(Unit::M),
            "ft" => Some(Unit::Ft),
            "cm" => Some(Unit::Cm),
            "in" => Some(Unit::In),
            "kg" => Some(Unit::Kg),
            "pkt" => Some(Unit::Pkt),
            "each" => Some(Unit::Each),
            _ => None,
        }
    }

    /// The persisted string form of this unit.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::M => "m",
            Unit::Ft => "ft",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Kg => "kg",
            Unit::Pkt => "pkt",
            Unit::Each => "each",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Global settings snapshot supplied by the caller.
///
/// Owned and mutated by the configuration layer; the engine treats it as an
/// immutable input per call and never caches it. Field names match the
/// persisted settings record so a settings file deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Blended profit margin percent (current format).
    pub profit_margin: Decimal,
    /// Percentage of the final bill requested upfront.
    pub advance_percentage: Decimal,
    /// Legacy three-part margins. Decoded for persisted-shape fidelity; the
    /// consolidated resolver does not consume them.
    pub part_margin: Decimal,
    pub labor_margin: Decimal,
    pub extra_margin: Decimal,
    /// Legacy base daily labor cost, no longer used by the labor computation.
    pub daily_labor_cost: Decimal,
    /// Daily rate for welders in the legacy two-role labor fallback.
    pub welder_daily_rate: Decimal,
    /// Daily rate for helpers in the legacy two-role labor fallback.
    pub helper_daily_rate: Decimal,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            profit_margin: Decimal::from(DEFAULT_PROFIT_MARGIN_PERCENT),
            advance_percentage: Decimal::from(DEFAULT_ADVANCE_PERCENTAGE),
            part_margin: Decimal::from(15),
            labor_margin: Decimal::from(20),
            extra_margin: Decimal::from(5),
            daily_labor_cost: Decimal::from(DEFAULT_DAILY_LABOR_COST),
            welder_daily_rate: Decimal::from(DEFAULT_WELDER_DAILY_RATE),
            helper_daily_rate: Decimal::from(DEFAULT_HELPER_DAILY_RATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_label() {
        assert_eq!(Unit::from_label("kg"), Some(Unit::Kg));
        assert_eq!(Unit::from_label(" Pcs "), Some(Unit::Pcs));
        assert_eq!(Unit::from_label("FT"), Some(Unit::Ft));
        assert_eq!(Unit::from_label("bundle"), None);
    }

    #[test]
    fn test_unit_label_round_trip() {
        for unit in [
            Unit::Pcs,
            Unit::M,
            Unit::Ft,
            Unit::Cm,
            Unit::In,
            Unit::Kg,
            Unit::Pkt,
            Unit::Each,
        ] {
            assert_eq!(Unit::from_label(unit.label()), Some(unit));
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.profit_margin, Decimal::from(15));
        assert_eq!(settings.advance_percentage, Decimal::from(10));
        assert_eq!(settings.welder_daily_rate, Decimal::from(500));
        assert_eq!(settings.helper_daily_rate, Decimal::from(300));
    }

    #[test]
    fn test_settings_partial_json_fills_defaults() {
        let settings: GlobalSettings =
            serde_json::from_str(r#"{"profit_margin": 25}"#).unwrap();
        assert_eq!(settings.profit_margin, Decimal::from(25));
        assert_eq!(settings.advance_percentage, Decimal::from(10));
        assert_eq!(settings.helper_daily_rate, Decimal::from(300));
    }
}
