//! Configuration types for dataset generation.
//!
//! All generation parameters are compiled-in constants. [`GenerationConfig`]
//! gathers the run-level ones; the per-table distribution parameters live in
//! the generator config structs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_COUNT: usize = 100_000;
pub const DEFAULT_CONTENT_COUNT: usize = 10_000;
pub const DEFAULT_ENGAGEMENT_COUNT: usize = 3_000_000;
pub const DEFAULT_SEED: u64 = 0;

pub const USERS_FILE: &str = "users.csv";
pub const CONTENT_FILE: &str = "content.csv";
pub const ENGAGEMENTS_FILE: &str = "engagements.csv";

/// Environment variable that overrides the output directory in the binaries.
pub const OUTPUT_DIR_ENV: &str = "DATASET_OUTPUT_DIR";

/// How the Dirichlet weights for user/content skew are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkewSeeding {
    /// Derived from the master seed, so the same seed reproduces the same skew.
    #[default]
    Derived,
    /// Explicit seed, independent of the master seed.
    Fixed(u64),
    /// Fresh OS randomness on every run.
    Entropy,
}

/// Run-level configuration for a generation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Number of content items to generate.
    pub content_count: usize,

    /// Number of engagement events to generate.
    pub engagement_count: usize,

    /// Master seed for all per-table RNG streams.
    pub seed: u64,

    /// Seeding of the engagement skew weights.
    pub skew_seeding: SkewSeeding,

    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            content_count: DEFAULT_CONTENT_COUNT,
            engagement_count: DEFAULT_ENGAGEMENT_COUNT,
            seed: DEFAULT_SEED,
            skew_seeding: SkewSeeding::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl GenerationConfig {
    /// Default configuration with the output directory taken from
    /// `DATASET_OUTPUT_DIR` when it is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn users_path(&self) -> PathBuf {
        self.output_dir.join(USERS_FILE)
    }

    pub fn content_path(&self) -> PathBuf {
        self.output_dir.join(CONTENT_FILE)
    }

    pub fn engagements_path(&self) -> PathBuf {
        self.output_dir.join(ENGAGEMENTS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.user_count, 100_000);
        assert_eq!(config.content_count, 10_000);
        assert_eq!(config.engagement_count, 3_000_000);
        assert_eq!(config.skew_seeding, SkewSeeding::Derived);
        assert_eq!(config.users_path(), PathBuf::from("./users.csv"));
    }
}
