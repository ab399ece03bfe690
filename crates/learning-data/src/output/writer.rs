//! CSV writing and reading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{CONTENT_FILE, ENGAGEMENTS_FILE, USERS_FILE};
use crate::error::DatasetError;
use crate::generators::{GeneratedContent, GeneratedEngagement, GeneratedUser};

const USER_COLUMNS: &[&str] = &[
    "user_id",
    "title",
    "seniority_level",
    "department",
    "learning_style",
];

const CONTENT_COLUMNS: &[&str] = &[
    "content_id",
    "title",
    "domain",
    "subtopic",
    "difficulty_level",
    "content_type",
];

const ENGAGEMENT_COLUMNS: &[&str] = &[
    "user_id",
    "content_id",
    "timestamp",
    "duration_seconds",
    "liked",
    "engagement_type",
];

/// Writes generated tables as headed CSV files into one directory.
pub struct CsvWriter {
    dir: PathBuf,
    progress_interval: usize,
}

impl CsvWriter {
    /// Creates a writer targeting the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            progress_interval: 500_000,
        }
    }

    /// Sets how many rows are written between progress log lines.
    pub fn with_progress_interval(mut self, rows: usize) -> Self {
        self.progress_interval = rows.max(1);
        self
    }

    /// Writes `users.csv`, returning its path.
    pub fn write_users(&self, users: &[GeneratedUser]) -> Result<PathBuf, DatasetError> {
        self.write_table(USERS_FILE, USER_COLUMNS, "users", users)
    }

    /// Writes `content.csv`, returning its path.
    pub fn write_content(&self, content: &[GeneratedContent]) -> Result<PathBuf, DatasetError> {
        self.write_table(CONTENT_FILE, CONTENT_COLUMNS, "content items", content)
    }

    /// Writes `engagements.csv`, returning its path.
    pub fn write_engagements(
        &self,
        engagements: &[GeneratedEngagement],
    ) -> Result<PathBuf, DatasetError> {
        self.write_table(ENGAGEMENTS_FILE, ENGAGEMENT_COLUMNS, "engagements", engagements)
    }

    fn write_table<T: Serialize>(
        &self,
        file_name: &str,
        columns: &[&str],
        label: &str,
        rows: &[T],
    ) -> Result<PathBuf, DatasetError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        info!("Writing {} {}...", rows.len(), label);

        let mut writer = csv::Writer::from_path(&path)?;
        // Serialized structs only emit a header with their first row.
        if rows.is_empty() {
            writer.write_record(columns)?;
        }
        for (i, row) in rows.iter().enumerate() {
            writer.serialize(row)?;

            if (i + 1) % self.progress_interval == 0 {
                info!("  Wrote {}/{} {}", i + 1, rows.len(), label);
            }
        }
        writer.flush()?;

        info!("Wrote {} {} to {}", rows.len(), label, path.display());
        Ok(path)
    }
}

#[derive(Debug, Deserialize)]
struct UserIdRow {
    user_id: u32,
}

/// Reads the `user_id` column of a users table. Other columns are ignored.
pub fn read_user_ids(path: impl AsRef<Path>) -> Result<Vec<u32>, DatasetError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let ids = reader
        .deserialize::<UserIdRow>()
        .map(|row| row.map(|r| r.user_id))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Read {} user ids from {}", ids.len(), path.display());
    Ok(ids)
}
