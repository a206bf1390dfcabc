//! Margin specification shapes as found in persisted estimates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A possibly-absent, possibly-legacy margin specification.
///
/// Persisted estimates carry margins in several historical shapes. All of
/// them normalize to a single effective percent through
/// [`resolve_margin`](crate::engine::resolve_margin); no call site may
/// type-sniff margins on its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum MarginSpec {
    /// No margin stored; the global default applies.
    #[default]
    Absent,
    /// A bare percent value.
    Percent(Decimal),
    /// A mapping carrying a single blended `profit_margin` percent.
    SingleProfitPercent(Decimal),
    /// The old three-part mapping (part/labor/extra percentages). Decoded
    /// for fidelity with old records; the consolidated resolver does not
    /// consume it and falls back to the global default.
    LegacyMultiPart {
        part: Decimal,
        labor: Decimal,
        extra: Decimal,
    },
}
