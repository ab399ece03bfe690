//! Synthetic dataset generation for learning-platform analytics.
//!
//! This crate generates three related tables, users, content items and
//! engagement events, by sampling from hand-tuned distributions, and writes
//! them as CSV files.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use learning_data::prelude::*;
//!
//! let result = DatasetBuilder::new()
//!     .with_users(1_000)
//!     .with_content(100)
//!     .with_engagements(20_000)
//!     .with_seed(42)
//!     .with_output_dir("out")
//!     .build()?;
//! ```

pub mod builders;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generators;
pub mod models;
pub mod output;
pub mod sampling;

pub use error::DatasetError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DatasetBuilder, DatasetMetrics, DatasetResult};
    pub use crate::catalog::{JobCatalog, department_for};
    pub use crate::config::{GenerationConfig, SkewSeeding};
    pub use crate::error::DatasetError;
    pub use crate::generators::{
        ContentGenerator, EngagementGenerator, GeneratedContent, GeneratedEngagement,
        GeneratedUser, UserGenerator,
    };
    pub use crate::models::{
        ContentType, Department, Difficulty, Domain, EngagementType, LearningStyle, Seniority,
        Subtopic,
    };
    pub use crate::output::{CsvWriter, read_user_ids};
    pub use crate::sampling::{Categorical, RngStreams, SkewedIds};
}

/// Installs the `fmt` subscriber with `RUST_LOG` filtering, defaulting to
/// `info`. Used by the binaries.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
