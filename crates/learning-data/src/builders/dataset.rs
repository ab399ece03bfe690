//! Fluent builder for constructing dataset runs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use time::OffsetDateTime;
use tracing::info;

use crate::catalog::JobCatalog;
use crate::config::{GenerationConfig, SkewSeeding};
use crate::error::DatasetError;
use crate::generators::{
    content::{ContentGenConfig, ContentGenerator, GeneratedContent},
    engagement::{EngagementGenConfig, EngagementGenerator, GeneratedEngagement},
    user::{GeneratedUser, UserGenerator},
};
use crate::output::CsvWriter;
use crate::sampling::RngStreams;

/// Result of building a dataset.
#[derive(Debug)]
pub struct DatasetResult {
    pub users: Vec<GeneratedUser>,
    pub content: Vec<GeneratedContent>,
    pub engagements: Vec<GeneratedEngagement>,
    /// Metrics from generation (populated if metrics tracking enabled).
    pub metrics: Option<DatasetMetrics>,
}

/// Timing and shape metrics from a dataset run.
#[derive(Debug, Clone)]
pub struct DatasetMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent writing CSV files (milliseconds, 0 if build_data used).
    pub write_time_ms: u64,
    pub user_count: usize,
    pub content_count: usize,
    pub engagement_count: usize,
    /// Fraction of engagements that are liked.
    pub like_rate: f64,
    /// Fraction of engagements made by the most active 1% of users.
    pub top_user_share: f64,
}

impl DatasetMetrics {
    fn collect(result: &DatasetResult, generation_time_ms: u64) -> Self {
        let liked = result
            .engagements
            .iter()
            .filter(|e| e.liked.is_some())
            .count();

        Self {
            generation_time_ms,
            write_time_ms: 0,
            user_count: result.users.len(),
            content_count: result.content.len(),
            engagement_count: result.engagements.len(),
            like_rate: ratio(liked, result.engagements.len()),
            top_user_share: top_user_share(&result.engagements, result.users.len()),
        }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Share of engagements held by the top 1% of users (at least one user).
fn top_user_share(engagements: &[GeneratedEngagement], user_count: usize) -> f64 {
    let mut per_user: HashMap<u32, usize> = HashMap::new();
    for e in engagements {
        *per_user.entry(e.user_id).or_default() += 1;
    }

    let mut counts: Vec<usize> = per_user.into_values().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let top_n = (user_count / 100).max(1);
    ratio(counts.iter().take(top_n).sum(), engagements.len())
}

/// Builder for a complete users/content/engagements dataset.
///
/// # Example
///
/// ```rust,ignore
/// let result = DatasetBuilder::new()
///     .with_users(1_000)
///     .with_content(100)
///     .with_engagements(50_000)
///     .with_seed(7)
///     .with_metrics(true)
///     .build()?;
/// ```
pub struct DatasetBuilder {
    config: GenerationConfig,
    catalog: Option<JobCatalog>,
    content_config: ContentGenConfig,
    engagement_config: EngagementGenConfig,
    reference_time: Option<OffsetDateTime>,
    track_metrics: bool,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder with the default run configuration.
    pub fn new() -> Self {
        Self::from_config(GenerationConfig::default())
    }

    /// Creates a builder from an existing run configuration.
    pub fn from_config(config: GenerationConfig) -> Self {
        Self {
            config,
            catalog: None,
            content_config: ContentGenConfig::default(),
            engagement_config: EngagementGenConfig::default(),
            reference_time: None,
            track_metrics: false,
        }
    }

    /// Sets the number of users to generate.
    pub fn with_users(mut self, count: usize) -> Self {
        self.config.user_count = count;
        self
    }

    /// Sets the number of content items to generate.
    pub fn with_content(mut self, count: usize) -> Self {
        self.config.content_count = count;
        self
    }

    /// Sets the number of engagements to generate.
    pub fn with_engagements(mut self, count: usize) -> Self {
        self.config.engagement_count = count;
        self
    }

    /// Sets the master random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets how the engagement skew weights are seeded.
    pub fn with_skew_seeding(mut self, seeding: SkewSeeding) -> Self {
        self.config.skew_seeding = seeding;
        self
    }

    /// Sets the directory the CSV files are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Replaces the built-in job catalog.
    pub fn with_catalog(mut self, catalog: JobCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_content_config(mut self, config: ContentGenConfig) -> Self {
        self.content_config = config;
        self
    }

    pub fn with_engagement_config(mut self, config: EngagementGenConfig) -> Self {
        self.engagement_config = config;
        self
    }

    /// Fixes the end of the engagement timestamp window instead of using the
    /// current time.
    pub fn with_reference_time(mut self, time: OffsetDateTime) -> Self {
        self.reference_time = Some(time);
        self
    }

    /// Enables metrics tracking.
    ///
    /// When enabled, the result will include timing, like rate, and activity
    /// concentration metrics.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates the users table.
    pub fn generate_users(&self) -> Result<Vec<GeneratedUser>, DatasetError> {
        let user_gen = match &self.catalog {
            Some(catalog) => UserGenerator::with_catalog(catalog.clone()),
            None => UserGenerator::new()?,
        };

        info!("Generating {} users...", self.config.user_count);
        let mut rng = self.streams().stream("users");
        user_gen.generate_batch(self.config.user_count, &mut rng)
    }

    /// Generates the content table and the engagements referencing it and
    /// the given user ids.
    pub fn generate_content_and_engagements(
        &self,
        user_ids: &[u32],
    ) -> Result<(Vec<GeneratedContent>, Vec<GeneratedEngagement>), DatasetError> {
        let streams = self.streams();
        let content_gen = ContentGenerator::with_config(self.content_config.clone())?;
        let engagement_gen = EngagementGenerator::with_config(self.engagement_config.clone())?;

        info!("Generating {} content items...", self.config.content_count);
        let mut content_rng = streams.stream("content");
        let content = content_gen.generate_batch(self.config.content_count, &mut content_rng)?;
        let content_ids: Vec<u32> = content.iter().map(|c| c.content_id).collect();

        info!("Generating {} engagements...", self.config.engagement_count);
        let now = self.reference_time.unwrap_or_else(OffsetDateTime::now_utc);
        let engagements = engagement_gen.generate_batch(
            self.config.engagement_count,
            user_ids,
            &content_ids,
            now,
            &mut streams.skew(self.config.skew_seeding),
            &mut streams.stream("engagements"),
        )?;

        Ok((content, engagements))
    }

    /// Builds the dataset in memory without writing any files.
    pub fn build_data(&self) -> Result<DatasetResult, DatasetError> {
        let start_time = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        let users = self.generate_users()?;
        let user_ids: Vec<u32> = users.iter().map(|u| u.user_id).collect();
        let (content, engagements) = self.generate_content_and_engagements(&user_ids)?;

        let mut result = DatasetResult {
            users,
            content,
            engagements,
            metrics: None,
        };
        result.metrics = start_time
            .map(|start| DatasetMetrics::collect(&result, start.elapsed().as_millis() as u64));

        Ok(result)
    }

    /// Builds the dataset and writes `users.csv`, `content.csv` and
    /// `engagements.csv` to the output directory.
    pub fn build(self) -> Result<DatasetResult, DatasetError> {
        let mut result = self.build_data()?;

        let write_start = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        // Write in dependency order
        let writer = CsvWriter::new(&self.config.output_dir);
        writer.write_users(&result.users)?;
        writer.write_content(&result.content)?;
        writer.write_engagements(&result.engagements)?;

        if let (Some(start), Some(metrics)) = (write_start, result.metrics.as_mut()) {
            metrics.write_time_ms = start.elapsed().as_millis() as u64;
        }

        Ok(result)
    }

    fn streams(&self) -> RngStreams {
        RngStreams::new(self.config.seed)
    }
}

/// Preset runs.
impl DatasetBuilder {
    /// The full-size dataset: 100000 users, 10000 content items and
    /// 3000000 engagements.
    pub fn full_scale() -> Self {
        Self::new().with_metrics(true)
    }

    /// A small dataset for quick local runs and tests.
    pub fn smoke_test() -> Self {
        Self::new()
            .with_users(1_000)
            .with_content(100)
            .with_engagements(20_000)
            .with_metrics(true)
    }
}
