//! User generation with weighted job titles and derived attributes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{JobCatalog, department_for};
use crate::error::DatasetError;
use crate::generators::sequential_ids;
use crate::models::{Department, LearningStyle, Seniority};

/// Generated user row, fields in `users.csv` column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedUser {
    pub user_id: u32,
    pub title: String,
    pub seniority_level: Seniority,
    pub department: Department,
    pub learning_style: LearningStyle,
}

/// Generates synthetic users from a job catalog.
pub struct UserGenerator {
    catalog: JobCatalog,
}

impl UserGenerator {
    /// Creates a generator over the built-in job catalog.
    ///
    /// Fails if the built-in title and weight tables disagree.
    pub fn new() -> Result<Self, DatasetError> {
        Ok(Self {
            catalog: JobCatalog::builtin()?,
        })
    }

    /// Creates a generator over a caller-supplied catalog.
    pub fn with_catalog(catalog: JobCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Generates a single user with the given id.
    pub fn generate(&self, user_id: u32, rng: &mut impl Rng) -> GeneratedUser {
        let (title, seniority_level) = self.catalog.sample(rng);

        GeneratedUser {
            user_id,
            title: title.to_string(),
            seniority_level,
            department: department_for(title),
            learning_style: LearningStyle::ALL[rng.gen_range(0..LearningStyle::ALL.len())],
        }
    }

    /// Generates `count` users with sequential ids starting at 1.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedUser>, DatasetError> {
        let ids = sequential_ids(count, "users")?;
        Ok(ids.map(|id| self.generate(id, rng)).collect())
    }
}
