//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - runs the load -> prompt -> report pipeline on stdin/stdout

use std::io;

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `dogs` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` is optional; values already in the environment win.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    crate::logging::init(&cli.log_level);

    let config = cli.report_config();
    debug!(?config, "resolved configuration");

    let stdin = io::stdin();
    let stdout = io::stdout();
    pipeline::run_report(&config, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
