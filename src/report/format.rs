//! Terminal output for a [`BreedReport`].
//!
//! Numbers follow the reference report's rendering: integers as-is, and
//! percentages with the shortest digits that round-trip, at least one decimal
//! place, and `e-05`-style notation for very small values.

use super::{BreedReport, YearShare};

/// Format the five report sections, one line each (one line per configured year).
pub fn format_report(report: &BreedReport) -> String {
    let breed = &report.breed;
    let mut out = String::new();

    out.push_str(&format!(
        "The {breed} appears in the top breeds for the following years: {}.\n",
        join(report.years.iter())
    ));
    out.push_str(&format!(
        "A total of {} {breed} dogs have been registered.\n",
        report.total_registrations
    ));
    for share in &report.yearly {
        out.push_str(&format_year_share(breed, share));
        out.push('\n');
    }
    out.push_str(&format!(
        "Across all years, {breed} represented {}% of the top breeds.\n",
        format_percentage(report.overall_percentage)
    ));
    out.push_str(&format!(
        "The most popular month(s) for {breed} dogs are: {}\n",
        join(report.peak_months.iter())
    ));

    out
}

pub fn format_year_share(breed: &str, share: &YearShare) -> String {
    format!(
        "In {}, {breed} accounted for {}% of the top breeds.",
        share.year,
        format_percentage(share.percentage)
    )
}

/// A missing percentage (zero denominator) renders as a bare `0`.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format_float(v),
        None => "0".to_string(),
    }
}

/// Shortest round-trip rendering with a trailing `.0` for whole values and
/// scientific notation below `1e-4`.
pub fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v != 0.0 && (v.abs() < 1e-4 || v.abs() >= 1e16) {
        let sci = format!("{v:e}");
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return sci;
        };
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let s = v.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
