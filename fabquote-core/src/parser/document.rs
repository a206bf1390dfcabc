//! Lenient decoding of the persisted estimate blob.
//!
//! Saved estimates arrive as JSON attached to a project/client record, in
//! several historical shapes. Decoding is tolerant by design: malformed
//! numeric fields coerce to zero and missing keys take defaults, because one
//! bad row must not abort the entire estimate. Only the file-level surface
//! (missing file, empty file, unparseable JSON, non-object root) is fallible.

use std::fs;
use std::path::Path;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::config::{GlobalSettings, Unit, DEFAULT_DAYS};
use crate::error::{EstimateError, Result};
use crate::model::{EstimateDocument, LaborRoster, LineItem, MarginSpec, RoleAllocation};

/// Load and decode a saved estimate from a JSON file.
pub fn load_estimate_file(path: &Path) -> Result<EstimateDocument> {
    let value = load_json(path)?;
    parse_document(&value)
}

/// Load global settings from a JSON file. Missing keys take their defaults.
pub fn load_settings_file(path: &Path) -> Result<GlobalSettings> {
    let value = load_json(path)?;
    serde_json::from_value(value).map_err(|source| EstimateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(EstimateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(EstimateError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    serde_json::from_str(&content).map_err(|source| EstimateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode an estimate document from its JSON value.
///
/// The root must be an object; everything below it degrades gracefully.
pub fn parse_document(value: &Value) -> Result<EstimateDocument> {
    let root = value.as_object().ok_or_else(|| EstimateError::InvalidDocument {
        message: format!("expected a JSON object, got {}", json_kind(value)),
    })?;

    let items = root
        .get("items")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(parse_item).collect())
        .unwrap_or_default();

    let days = root
        .get("days")
        .and_then(coerce_decimal)
        .unwrap_or_else(|| Decimal::from(DEFAULT_DAYS));

    // Margins: new records store a flat `profit_margin`, old ones a
    // `margins` value of varying shape.
    let margin = match (root.get("profit_margin"), root.get("margins")) {
        (Some(value), _) => parse_margin(value),
        (None, Some(value)) => parse_margin(value),
        (None, None) => MarginSpec::Absent,
    };

    let labor = parse_labor(root);

    Ok(EstimateDocument {
        items,
        days,
        labor,
        margin,
    })
}

/// Decode one item row. Accepts both the persisted column-style keys
/// ("Item", "Qty", "Base Rate", "Unit") and snake_case keys.
fn parse_item(row: &Value) -> LineItem {
    let name = field(row, &["Item", "item", "name"])
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let quantity = decimal_field(row, &["Qty", "qty", "quantity"]);
    let base_rate = decimal_field(row, &["Base Rate", "base_rate", "rate"]);
    let unit = field(row, &["Unit", "unit"])
        .and_then(Value::as_str)
        .and_then(Unit::from_label)
        .unwrap_or_default();

    LineItem {
        name,
        quantity,
        base_rate,
        unit,
    }
}

/// Decode the labor roster. A non-empty `labor_details` list takes
/// precedence; otherwise the legacy welder/helper counts apply.
fn parse_labor(root: &serde_json::Map<String, Value>) -> LaborRoster {
    let allocations: Vec<RoleAllocation> = root
        .get("labor_details")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(parse_allocation).collect())
        .unwrap_or_default();

    if !allocations.is_empty() {
        return LaborRoster::Dynamic(allocations);
    }

    let welders = root.get("welders").and_then(coerce_decimal);
    let helpers = root.get("helpers").and_then(coerce_decimal);
    match (welders, helpers) {
        (None, None) => LaborRoster::Dynamic(Vec::new()),
        (welders, helpers) => LaborRoster::Legacy {
            welders: welders.unwrap_or(Decimal::ZERO),
            helpers: helpers.unwrap_or(Decimal::ZERO),
        },
    }
}

fn parse_allocation(row: &Value) -> RoleAllocation {
    RoleAllocation {
        role: field(row, &["role"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        count: decimal_field(row, &["count"]),
        daily_rate: decimal_field(row, &["rate", "daily_rate"]),
    }
}

/// Decode a margin value of any persisted shape into a [`MarginSpec`].
fn parse_margin(value: &Value) -> MarginSpec {
    if value.is_null() {
        return MarginSpec::Absent;
    }
    if let Some(percent) = coerce_decimal(value) {
        return MarginSpec::Percent(percent);
    }
    if let Some(map) = value.as_object() {
        if let Some(percent) = map.get("profit_margin").and_then(coerce_decimal) {
            return MarginSpec::SingleProfitPercent(percent);
        }
        let has_legacy_keys = ["part_margin", "labor_margin", "extra_margin", "p", "l", "e"]
            .iter()
            .any(|key| map.contains_key(*key));
        if has_legacy_keys {
            return MarginSpec::LegacyMultiPart {
                part: decimal_field(value, &["part_margin", "p"]),
                labor: decimal_field(value, &["labor_margin", "l"]),
                extra: decimal_field(value, &["extra_margin", "e"]),
            };
        }
    }
    tracing::warn!("Unrecognized margin value {value}, using global default");
    MarginSpec::Absent
}

/// First present field among aliases.
fn field<'a>(row: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = row.as_object()?;
    keys.iter().find_map(|key| map.get(*key))
}

/// Numeric field with zero-fallback coercion. A present but malformed value
/// coerces to zero rather than aborting the row.
fn decimal_field(row: &Value, keys: &[&str]) -> Decimal {
    match field(row, keys) {
        Some(value) => coerce_decimal(value).unwrap_or_else(|| {
            tracing::warn!("Non-numeric value {value} for {:?}, coercing to 0", keys[0]);
            Decimal::ZERO
        }),
        None => Decimal::ZERO,
    }
}

/// Coerce a JSON value to a decimal: numbers and numeric strings qualify.
fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(Decimal::from(int))
            } else {
                number.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // ==================== Item decoding ====================

    #[test]
    fn test_parse_column_style_items() {
        let value = json!({
            "items": [{"Item": "MS Angle", "Qty": 10, "Base Rate": 65, "Unit": "kg"}],
            "days": 2
        });
        let document = parse_document(&value).unwrap();
        assert_eq!(document.items.len(), 1);
        assert_eq!(document.items[0].name, "MS Angle");
        assert_eq!(document.items[0].quantity, Decimal::from(10));
        assert_eq!(document.items[0].base_rate, Decimal::from(65));
        assert_eq!(document.items[0].unit, Unit::Kg);
        assert_eq!(document.days, Decimal::from(2));
    }

    #[test]
    fn test_parse_snake_case_items() {
        let value = json!({
            "items": [{"name": "Flat Bar", "quantity": "4", "base_rate": "82.5", "unit": "m"}]
        });
        let document = parse_document(&value).unwrap();
        assert_eq!(document.items[0].quantity, Decimal::from(4));
        assert_eq!(
            document.items[0].base_rate,
            "82.5".parse::<Decimal>().unwrap()
        );
        assert_eq!(document.items[0].unit, Unit::M);
    }

    #[test]
    fn test_malformed_numerics_coerce_to_zero() {
        // One bad row must not abort the estimate.
        let value = json!({
            "items": [
                {"Item": "Good", "Qty": 2, "Base Rate": 50, "Unit": "pcs"},
                {"Item": "Bad", "Qty": "lots", "Base Rate": {}, "Unit": "bundle"}
            ]
        });
        let document = parse_document(&value).unwrap();
        assert_eq!(document.items[1].quantity, Decimal::ZERO);
        assert_eq!(document.items[1].base_rate, Decimal::ZERO);
        assert_eq!(document.items[1].unit, Unit::Pcs);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let document = parse_document(&json!({})).unwrap();
        assert!(document.items.is_empty());
        assert_eq!(document.days, Decimal::from(1));
        assert_eq!(document.margin, MarginSpec::Absent);
        assert_eq!(document.labor, LaborRoster::Dynamic(Vec::new()));
    }

    // ==================== Margin decoding ====================

    #[test]
    fn test_margin_flat_profit_margin_key() {
        let document = parse_document(&json!({"profit_margin": 18})).unwrap();
        assert_eq!(document.margin, MarginSpec::Percent(Decimal::from(18)));
    }

    #[test]
    fn test_margin_object_with_profit_margin() {
        let document =
            parse_document(&json!({"margins": {"profit_margin": 12}})).unwrap();
        assert_eq!(
            document.margin,
            MarginSpec::SingleProfitPercent(Decimal::from(12))
        );
    }

    #[test]
    fn test_margin_legacy_three_part() {
        let document = parse_document(
            &json!({"margins": {"part_margin": 15, "labor_margin": 20, "extra_margin": 5}}),
        )
        .unwrap();
        assert_eq!(
            document.margin,
            MarginSpec::LegacyMultiPart {
                part: Decimal::from(15),
                labor: Decimal::from(20),
                extra: Decimal::from(5),
            }
        );
    }

    #[test]
    fn test_margin_null_and_garbage_are_absent() {
        let null_margin = parse_document(&json!({"margins": null})).unwrap();
        assert_eq!(null_margin.margin, MarginSpec::Absent);

        let garbage = parse_document(&json!({"margins": [1, 2, 3]})).unwrap();
        assert_eq!(garbage.margin, MarginSpec::Absent);
    }

    #[test]
    fn test_margin_numeric_string() {
        let document = parse_document(&json!({"profit_margin": "22"})).unwrap();
        assert_eq!(document.margin, MarginSpec::Percent(Decimal::from(22)));
    }

    // ==================== Labor decoding ====================

    #[test]
    fn test_labor_details_take_precedence_over_legacy_counts() {
        let value = json!({
            "labor_details": [{"role": "Welder", "count": 1, "rate": 500}],
            "welders": 3,
            "helpers": 2
        });
        let document = parse_document(&value).unwrap();
        assert_eq!(
            document.labor,
            LaborRoster::Dynamic(vec![RoleAllocation::new(
                "Welder",
                Decimal::from(1),
                Decimal::from(500)
            )])
        );
    }

    #[test]
    fn test_empty_labor_details_fall_back_to_legacy_counts() {
        let value = json!({"labor_details": [], "welders": 2, "helpers": 1});
        let document = parse_document(&value).unwrap();
        assert_eq!(
            document.labor,
            LaborRoster::Legacy {
                welders: Decimal::from(2),
                helpers: Decimal::from(1),
            }
        );
    }

    #[test]
    fn test_no_labor_at_all_is_an_empty_dynamic_roster() {
        let document = parse_document(&json!({"items": []})).unwrap();
        assert_eq!(document.labor, LaborRoster::Dynamic(Vec::new()));
    }

    // ==================== Root shape ====================

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = parse_document(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidDocument { .. }));
    }
}
