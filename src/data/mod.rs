//! In-memory registration table and its grouping queries.

pub mod table;

pub use table::*;
