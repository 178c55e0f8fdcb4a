//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - loaded registration rows (`Record`)
//! - analysis knobs (`AnalysisConfig`, `MonthOrder`)
//! - the resolved run configuration (`ReportConfig`)

pub mod types;

pub use types::*;
