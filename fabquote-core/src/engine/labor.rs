//! Labor cost dispatch over the two roster shapes.

use rust_decimal::Decimal;

use crate::config::GlobalSettings;
use crate::model::LaborRoster;

/// Total labor cost for a roster over the given days.
///
/// Dynamic allocations carry their own daily rates; the legacy two-role
/// shape is priced with the welder/helper rates from the settings snapshot.
pub fn labor_cost(roster: &LaborRoster, days: Decimal, settings: &GlobalSettings) -> Decimal {
    match roster {
        LaborRoster::Dynamic(allocations) => allocations
            .iter()
            .map(|a| a.count * a.daily_rate * days)
            .sum(),
        LaborRoster::Legacy { welders, helpers } => {
            *welders * settings.welder_daily_rate * days
                + *helpers * settings.helper_daily_rate * days
        }
    }
}
