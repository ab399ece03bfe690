//! Fluent builder API for dataset runs.
//!
//! The [`DatasetBuilder`] runs the generators in dependency order and
//! optionally writes the resulting tables to CSV.

mod dataset;

pub use dataset::{DatasetBuilder, DatasetMetrics, DatasetResult};
