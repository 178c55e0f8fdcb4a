//! The load -> choose breed -> analyze workflow.
//!
//! Kept separate from `app::run` so the steps can be driven with in-memory
//! streams in tests.

use std::io::{BufRead, Write};

use crate::cli::prompt;
use crate::data::Table;
use crate::domain::ReportConfig;
use crate::error::AppError;
use crate::report::{BreedReport, analyze, format_report};

/// Run one report over the given streams and return the computed report.
pub fn run_report(
    config: &ReportConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<BreedReport, AppError> {
    // 1) Load; a bad file stops the run before any prompt.
    let table = crate::io::ingest::load(&config.data_path)?;

    prompt::write_banner(out)?;

    // 2) Choose a breed present in the table.
    let breed = prompt::capture_breed(&table, config.breed.as_deref(), input, out)?;

    // 3) Compute and print.
    report_for(&table, &breed, config, out)
}

/// Analyze `breed`, print the report, and write the optional export.
pub fn report_for(
    table: &Table,
    breed: &str,
    config: &ReportConfig,
    out: &mut impl Write,
) -> Result<BreedReport, AppError> {
    let report = analyze(table, breed, &config.analysis);

    out.write_all(format_report(&report).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| AppError::output(format!("Failed to write report: {e}")))?;

    if let Some(path) = &config.export_json {
        crate::io::export::write_report_json(path, &report)?;
    }

    Ok(report)
}
