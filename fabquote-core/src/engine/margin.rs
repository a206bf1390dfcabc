//! Margin normalization.
//!
//! Every persisted margin shape funnels through [`resolve_margin`], so two
//! callers computing the same estimate agree on the effective percent
//! byte-for-byte.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::{GlobalSettings, DEFAULT_PROFIT_MARGIN_PERCENT};
use crate::model::MarginSpec;

/// Resolve a margin specification to a single effective profit-margin
/// percent.
///
/// Pure and total: any value that does not coerce to a non-negative integer
/// degrades to the global default, never to an error. Fractional percents
/// are truncated, not rounded (integer coercion semantics of the persisted
/// format).
pub fn resolve_margin(spec: &MarginSpec, settings: &GlobalSettings) -> u32 {
    match spec {
        MarginSpec::Absent => default_margin(settings),
        MarginSpec::Percent(value) | MarginSpec::SingleProfitPercent(value) => value
            .trunc()
            .to_u32()
            .unwrap_or_else(|| default_margin(settings)),
        // The consolidated resolver ignores the old three-part margins in
        // favor of the single blended percent.
        MarginSpec::LegacyMultiPart { .. } => default_margin(settings),
    }
}

/// The multiplier applied to costs for a given margin percent:
/// `1 + percent/100`.
pub fn margin_multiplier(percent: u32) -> Decimal {
    Decimal::ONE + Decimal::from(percent) / Decimal::ONE_HUNDRED
}

fn default_margin(settings: &GlobalSettings) -> u32 {
    settings
        .profit_margin
        .trunc()
        .to_u32()
        .unwrap_or(DEFAULT_PROFIT_MARGIN_PERCENT)
}
