//! CSV output for generated tables.
//!
//! The [`CsvWriter`] writes each table to its own file in an output
//! directory, with periodic progress reporting for large tables.

mod writer;

pub use writer::{CsvWriter, read_user_ids};
