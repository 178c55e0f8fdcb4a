//! `dog-breeds` library crate.
//!
//! The binary (`dogs`) is a thin wrapper around this library so that:
//!
//! - loading, prompting and reporting are testable without spawning processes
//! - the table and analysis can be reused by other front-ends

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
