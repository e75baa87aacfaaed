//! Calendar-month reduction of the daily table.

use hpa_core::{
    error::{HpaError, Result},
    record::{DailyRecord, MonthlyAggregate},
};
use std::collections::BTreeMap;

#[derive(Default)]
struct Sums {
    days: usize,
    water_inflow: f64,
    rainfall: f64,
    reservoir_level: f64,
    power_output: f64,
}

/// Mean of every numeric column per calendar month, in month order.
///
/// Months with no records are absent from the result.
pub fn aggregate_monthly(records: &[DailyRecord]) -> Vec<MonthlyAggregate> {
    let mut by_month: BTreeMap<u32, Sums> = BTreeMap::new();
    for record in records {
        let sums = by_month.entry(record.month()).or_default();
        sums.days += 1;
        sums.water_inflow += record.water_inflow;
        sums.rainfall += record.rainfall;
        sums.reservoir_level += record.reservoir_level;
        sums.power_output += record.power_output;
    }

    by_month
        .into_iter()
        .map(|(month, sums)| {
            let n = sums.days as f64;
            MonthlyAggregate {
                month,
                days: sums.days,
                water_inflow: sums.water_inflow / n,
                rainfall: sums.rainfall / n,
                reservoir_level: sums.reservoir_level / n,
                power_output: sums.power_output / n,
            }
        })
        .collect()
}

/// Look up the aggregate of one month.
pub fn select_month(aggregates: &[MonthlyAggregate], month: u32) -> Result<&MonthlyAggregate> {
    aggregates
        .iter()
        .find(|aggregate| aggregate.month == month)
        .ok_or(HpaError::MissingMonth(month))
}
