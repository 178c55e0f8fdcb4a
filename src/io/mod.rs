//! Input/output helpers.
//!
//! - registration file loading + validation (`ingest`)
//! - spreadsheet reading (`workbook`)
//! - report JSON export (`export`)

pub mod export;
pub mod ingest;
pub mod workbook;

pub use export::*;
pub use ingest::*;
