//! Error type shared by the catalog, generators, and CSV output.

use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Number of weights ({weights}) does not match number of categories ({categories})")]
    WeightCountMismatch { weights: usize, categories: usize },

    #[error("Job title {title:?} is listed under more than one seniority level")]
    DuplicateTitle { title: String },

    #[error("Invalid sampling weights: {0}")]
    InvalidWeights(#[from] WeightedError),

    #[error("Cannot number {count} {table} rows with 32-bit ids")]
    TooManyRows { table: &'static str, count: usize },

    #[error("Cannot sample references from an empty {table} table")]
    EmptyReference { table: &'static str },

    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
