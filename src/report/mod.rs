//! Breed statistics: what the report shows, computed from the table.
//!
//! Computation and presentation are split: [`analyze`] is a pure function of the
//! table and the configuration, and [`format`] turns its result into text.

use serde::Serialize;
use tracing::debug;

use crate::data::Table;
use crate::domain::AnalysisConfig;

pub mod format;

pub use format::*;

/// Decimal places kept in every reported percentage.
pub const PERCENT_DIGITS: i32 = 6;

/// A breed's share of one configured year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearShare {
    pub year: i32,
    pub breed_total: u64,
    pub all_total: u64,
    /// `None` when nothing at all was registered that year.
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub month: String,
    pub total: u64,
}

/// Everything printed for one breed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedReport {
    pub breed: String,
    /// Distinct years with at least one row, ascending.
    pub years: Vec<i32>,
    pub total_registrations: u64,
    pub yearly: Vec<YearShare>,
    pub grand_total: u64,
    pub overall_percentage: Option<f64>,
    pub monthly_totals: Vec<MonthTotal>,
    /// Months at or above the mean monthly total, in grouping order.
    pub peak_months: Vec<String>,
}

/// Compute the report for `breed`, which must be a stored breed label.
pub fn analyze(table: &Table, breed: &str, config: &AnalysisConfig) -> BreedReport {
    let years = table.years_for(breed);
    let total_registrations = table.breed_total(breed);

    let yearly = config
        .years
        .iter()
        .map(|&year| {
            let breed_total = table.breed_year_total(breed, year);
            let all_total = table.year_total(year);
            YearShare {
                year,
                breed_total,
                all_total,
                percentage: percentage(breed_total, all_total),
            }
        })
        .collect();

    let grand_total = table.grand_total();
    let overall_percentage = percentage(total_registrations, grand_total);

    let monthly_totals: Vec<MonthTotal> = table
        .monthly_totals(breed, config.month_order)
        .into_iter()
        .map(|(month, total)| MonthTotal { month, total })
        .collect();
    let peak_months = peak_months(&monthly_totals);

    debug!(
        breed,
        total_registrations,
        grand_total,
        months = monthly_totals.len(),
        peaks = peak_months.len(),
        "computed breed report"
    );

    BreedReport {
        breed: breed.to_string(),
        years,
        total_registrations,
        yearly,
        grand_total,
        overall_percentage,
        monthly_totals,
        peak_months,
    }
}

/// `part / whole` as a percentage rounded to [`PERCENT_DIGITS`]; `None` if `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(round_to(part as f64 / whole as f64 * 100.0, PERCENT_DIGITS))
}

/// Round to `digits` decimals: scale, round half to even, scale back.
///
/// The scaling happens in floating point, so a value whose scaled form lands
/// on an exact `.5` is treated as a tie even if the unscaled value was not.
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

/// Months whose total is at least the mean of all monthly totals.
///
/// Compared as `total * n >= sum` so a month exactly at the mean always counts.
pub fn peak_months(monthly: &[MonthTotal]) -> Vec<String> {
    let n = monthly.len() as u128;
    let sum: u128 = monthly.iter().map(|m| u128::from(m.total)).sum();
    monthly
        .iter()
        .filter(|m| u128::from(m.total) * n >= sum)
        .map(|m| m.month.clone())
        .collect()
}
