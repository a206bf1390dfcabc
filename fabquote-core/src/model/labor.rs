//! Labor roster shapes: dynamic role allocations and the legacy two-role
//! counts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One worker-role allocation with its daily rate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleAllocation {
    /// Role name ("Welder", "Helper", ...).
    pub role: String,
    /// Number of workers in this role.
    pub count: Decimal,
    /// Daily rate per worker.
    pub daily_rate: Decimal,
}

impl RoleAllocation {
    /// Create a new allocation.
    pub fn new(role: impl Into<String>, count: Decimal, daily_rate: Decimal) -> Self {
        Self {
            role: role.into(),
            count,
            daily_rate,
        }
    }
}

/// Labor roster for an estimate.
///
/// Saved estimates exist in two historical shapes: a dynamic list of role
/// allocations with per-role rates, and the older fixed welder/helper counts
/// whose rates come from the global settings. The dynamic list takes
/// precedence when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LaborRoster {
    /// Current shape: per-role allocations with their own daily rates.
    Dynamic(Vec<RoleAllocation>),
    /// Legacy shape: welder/helper head counts, priced with the global
    /// welder/helper daily rates.
    Legacy { welders: Decimal, helpers: Decimal },
}

impl Default for LaborRoster {
    fn default() -> Self {
        LaborRoster::Dynamic(Vec::new())
    }
}

impl LaborRoster {
    /// True when the roster contributes no labor at all.
    pub fn is_empty(&self) -> bool {
        match self {
            LaborRoster::Dynamic(allocations) => {
                allocations.iter().all(|a| a.count.is_zero())
            }
            LaborRoster::Legacy { welders, helpers } => {
                welders.is_zero() && helpers.is_zero()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dynamic_roster() {
        assert!(LaborRoster::default().is_empty());
        let zeroed = LaborRoster::Dynamic(vec![RoleAllocation::new(
            "Welder",
            Decimal::ZERO,
            Decimal::from(500),
        )]);
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_non_empty_rosters() {
        let dynamic = LaborRoster::Dynamic(vec![RoleAllocation::new(
            "Welder",
            Decimal::from(2),
            Decimal::from(500),
        )]);
        assert!(!dynamic.is_empty());

        let legacy = LaborRoster::Legacy {
            welders: Decimal::ZERO,
            helpers: Decimal::from(1),
        };
        assert!(!legacy.is_empty());
    }
}
