//! Registration table indexed by `(breed, year, month)`.
//!
//! Rows are kept in one vector sorted by the composite key, so every breed (and
//! every breed/year pair) occupies a contiguous run that can be located with a
//! binary search. The table is never mutated after construction.

use std::collections::BTreeMap;

use crate::domain::{MonthOrder, Record};

#[derive(Debug, Clone, Default)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Build a table from loaded rows, sorting them by `(breed, year, month)`.
    ///
    /// Duplicate keys are kept; every sum below aggregates them.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.key().cmp(&b.key()));
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct breeds, in index order.
    pub fn breeds(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if out.last() != Some(&r.breed.as_str()) {
                out.push(&r.breed);
            }
        }
        out
    }

    pub fn contains_breed(&self, breed: &str) -> bool {
        !self.breed_records(breed).is_empty()
    }

    /// Find the stored label for a user-typed breed, ignoring case.
    pub fn resolve_breed(&self, input: &str) -> Option<&str> {
        let wanted = input.to_uppercase();
        if let Some(r) = self.breed_records(&wanted).first() {
            return Some(&r.breed);
        }
        self.breeds()
            .into_iter()
            .find(|b| b.to_uppercase() == wanted)
    }

    /// All rows for `breed`, sorted by year then month.
    pub fn breed_records(&self, breed: &str) -> &[Record] {
        let start = self.records.partition_point(|r| r.breed.as_str() < breed);
        let len = self.records[start..].partition_point(|r| r.breed == breed);
        &self.records[start..start + len]
    }

    /// Rows for one breed in one year.
    pub fn breed_year_records(&self, breed: &str, year: i32) -> &[Record] {
        let rows = self.breed_records(breed);
        let start = rows.partition_point(|r| r.year < year);
        let len = rows[start..].partition_point(|r| r.year == year);
        &rows[start..start + len]
    }

    /// Distinct years in which `breed` has rows, ascending.
    pub fn years_for(&self, breed: &str) -> Vec<i32> {
        let mut years: Vec<i32> = self.breed_records(breed).iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    pub fn breed_total(&self, breed: &str) -> u64 {
        sum_totals(self.breed_records(breed))
    }

    pub fn breed_year_total(&self, breed: &str, year: i32) -> u64 {
        sum_totals(self.breed_year_records(breed, year))
    }

    /// Registrations across every breed in `year`.
    pub fn year_total(&self, year: i32) -> u64 {
        self.records
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.total)
            .sum()
    }

    pub fn grand_total(&self) -> u64 {
        sum_totals(&self.records)
    }

    /// Group the breed's rows by month label, summing totals across years.
    ///
    /// Labels are returned as stored, in the requested order.
    pub fn monthly_totals(&self, breed: &str, order: MonthOrder) -> Vec<(String, u64)> {
        let mut grouped: BTreeMap<&str, u64> = BTreeMap::new();
        for r in self.breed_records(breed) {
            *grouped.entry(r.month.as_str()).or_insert(0) += r.total;
        }

        let mut out: Vec<(String, u64)> = grouped
            .into_iter()
            .map(|(month, total)| (month.to_string(), total))
            .collect();
        out.sort_by(|a, b| order.compare(&a.0, &b.0));
        out
    }
}

fn sum_totals(rows: &[Record]) -> u64 {
    rows.iter().map(|r| r.total).sum()
}
