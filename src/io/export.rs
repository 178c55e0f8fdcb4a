//! Write a computed breed report as JSON.
//!
//! The export carries the same numbers as the terminal report plus the raw
//! totals behind each percentage, so downstream scripts don't need to re-derive
//! them.

use std::fs::File;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AppError;
use crate::report::BreedReport;

/// Write `report` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_report_json(path: &Path, report: &BreedReport) -> Result<(), AppError> {
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing report export");
    }

    let file = File::create(path).map_err(|e| {
        AppError::output(format!("Failed to create report JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::output(format!("Failed to write report JSON: {e}")))?;

    info!(path = %path.display(), breed = %report.breed, "wrote report export");
    Ok(())
}
