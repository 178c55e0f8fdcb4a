//! Command-line parsing for the dog registration report.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading and reporting code. Every option can also come from the environment
//! (or a `.env` file), which is loaded before parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AnalysisConfig, DEFAULT_DATA_PATH, DEFAULT_YEARS, MonthOrder, ReportConfig};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(name = "dogs", version, about = "Dog breed registration statistics")]
pub struct Cli {
    /// Registration data file (.csv, .xlsx, .xlsm, .xlsb, .xls, .ods).
    #[arg(short = 'f', long = "data", env = "DOGS_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Breed to report on. Validated like typed input; prompts again if unknown.
    #[arg(short = 'b', long)]
    pub breed: Option<String>,

    /// Years that get their own share line, in print order.
    #[arg(
        short = 'y',
        long,
        env = "DOGS_YEARS",
        value_delimiter = ',',
        default_values_t = DEFAULT_YEARS
    )]
    pub years: Vec<i32>,

    /// Ordering of months in the peak-month line.
    #[arg(long, value_enum, default_value_t = MonthOrder::Lexical)]
    pub month_order: MonthOrder,

    /// Also write the computed report as JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Log filter for stderr diagnostics (e.g. `info`, `dog_breeds=debug`).
    #[arg(long, env = "DOGS_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            data_path: self.data.clone(),
            breed: self.breed.clone(),
            analysis: AnalysisConfig {
                years: self.years.clone(),
                month_order: self.month_order,
            },
            export_json: self.export_json.clone(),
        }
    }
}
