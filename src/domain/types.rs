//! Shared domain types.
//!
//! Records are read-only once loaded; configuration types are resolved once from
//! the command line and passed down by reference.

use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::Month;
use clap::ValueEnum;

/// Years reported individually when none are configured.
pub const DEFAULT_YEARS: [i32; 3] = [2021, 2022, 2023];

/// Default registration workbook, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "CalgaryDogBreeds.xlsx";

/// One registration row: `total` dogs of `breed` registered in `month` of `year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub breed: String,
    pub year: i32,
    pub month: String,
    pub total: u64,
}

impl Record {
    /// Composite index key: breed, then year, then month.
    pub fn key(&self) -> (&str, i32, &str) {
        (self.breed.as_str(), self.year, self.month.as_str())
    }
}

/// How grouped month labels are ordered in the peak-month line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MonthOrder {
    /// Plain string ordering of the labels ("April" < "August" < "December").
    #[default]
    Lexical,
    /// January..December for recognizable month names; anything else follows,
    /// in lexical order.
    Calendar,
}

impl MonthOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            MonthOrder::Lexical => a.cmp(b),
            MonthOrder::Calendar => {
                let rank = |label: &str| label.trim().parse::<Month>().ok().map(|m| m.number_from_month());
                match (rank(a), rank(b)) {
                    (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => a.cmp(b),
                }
            }
        }
    }
}

/// Knobs the analyzer needs beyond the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Years that get a per-year share line, in print order.
    pub years: Vec<i32>,
    pub month_order: MonthOrder,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS.to_vec(),
            month_order: MonthOrder::default(),
        }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_path: PathBuf,
    /// Candidate breed supplied up front; still validated like typed input.
    pub breed: Option<String>,
    pub analysis: AnalysisConfig,
    pub export_json: Option<PathBuf>,
}
