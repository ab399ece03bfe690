//! Engagement event generation with skewed user/content activity.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::error::DatasetError;
use crate::models::EngagementType;
use crate::sampling::{Categorical, SkewedIds};

/// Length of the window, ending at generation time, that timestamps fall in.
pub const TIMESTAMP_WINDOW_DAYS: i64 = 365;

/// Generated engagement row, fields in `engagements.csv` column order.
///
/// `liked` is either `Some(true)` or `None`; an unliked engagement is
/// written as an empty field, never as `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEngagement {
    pub user_id: u32,
    pub content_id: u32,
    #[serde(with = "timestamp_format")]
    pub timestamp: OffsetDateTime,
    pub duration_seconds: u32,
    pub liked: Option<bool>,
    pub engagement_type: EngagementType,
}

/// Configuration for engagement generation.
#[derive(Debug, Clone)]
pub struct EngagementGenConfig {
    /// Symmetric Dirichlet concentration for user activity skew.
    pub user_concentration: f64,
    /// Symmetric Dirichlet concentration for content popularity skew.
    pub content_concentration: f64,
    /// Mean engagement duration in seconds.
    pub duration_mean: f64,
    /// Standard deviation of engagement duration in seconds.
    pub duration_std: f64,
    /// Saturating bounds for duration in seconds.
    pub duration_range: (u32, u32),
    /// Like probability at zero duration.
    pub like_base: f64,
    /// Like probability added per full `duration_range.1` seconds watched.
    pub like_slope: f64,
    /// Relative weights for [`EngagementType::ALL`].
    pub type_weights: [f64; 4],
}

impl Default for EngagementGenConfig {
    fn default() -> Self {
        Self {
            user_concentration: 0.5,
            content_concentration: 0.8,
            duration_mean: 900.0,
            duration_std: 300.0,
            duration_range: (30, 3600),
            like_base: 0.1,
            like_slope: 0.8,
            type_weights: EngagementType::WEIGHTS,
        }
    }
}

/// Generates engagement events referencing existing users and content.
pub struct EngagementGenerator {
    config: EngagementGenConfig,
    duration: Normal<f64>,
    engagement_type: Categorical<EngagementType>,
}

impl EngagementGenerator {
    /// Creates a new engagement generator with default configuration.
    pub fn new() -> Result<Self, DatasetError> {
        Self::with_config(EngagementGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// Fails unless the duration range satisfies `0 < min <= max` and the
    /// like parameters are finite.
    pub fn with_config(config: EngagementGenConfig) -> Result<Self, DatasetError> {
        let (min, max) = config.duration_range;
        if min == 0 || min > max {
            return Err(DatasetError::Distribution(format!(
                "duration range ({min}, {max}) must satisfy 0 < min <= max"
            )));
        }
        if !config.like_base.is_finite() || !config.like_slope.is_finite() {
            return Err(DatasetError::Distribution(format!(
                "like parameters base={} slope={} must be finite",
                config.like_base, config.like_slope
            )));
        }

        let duration = Normal::new(config.duration_mean, config.duration_std)
            .map_err(|e| DatasetError::Distribution(e.to_string()))?;
        let engagement_type = Categorical::new(&EngagementType::ALL, &config.type_weights)?;

        Ok(Self {
            config,
            duration,
            engagement_type,
        })
    }

    /// Generates `count` engagements over the given id sets.
    ///
    /// The skew weights are drawn once from `skew_rng`, then every record is
    /// drawn from `rng`. Timestamps fall in the window ending at `now`.
    pub fn generate_batch(
        &self,
        count: usize,
        user_ids: &[u32],
        content_ids: &[u32],
        now: OffsetDateTime,
        skew_rng: &mut impl Rng,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedEngagement>, DatasetError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let users = SkewedIds::dirichlet(
            user_ids,
            self.config.user_concentration,
            "users",
            skew_rng,
        )?;
        let content = SkewedIds::dirichlet(
            content_ids,
            self.config.content_concentration,
            "content",
            skew_rng,
        )?;
        info!(
            users = users.len(),
            content = content.len(),
            "Sampling {count} engagements"
        );

        let window_start = now - Duration::days(TIMESTAMP_WINDOW_DAYS);
        let window_seconds = TIMESTAMP_WINDOW_DAYS * 24 * 60 * 60;

        let engagements = (0..count)
            .map(|_| {
                let user_id = users.sample(rng);
                let content_id = content.sample(rng);
                let timestamp =
                    window_start + Duration::seconds(rng.gen_range(0..=window_seconds));
                let duration_seconds = self.sample_duration(rng);
                let liked = rng
                    .gen_bool(self.like_probability(duration_seconds))
                    .then_some(true);

                GeneratedEngagement {
                    user_id,
                    content_id,
                    timestamp,
                    duration_seconds,
                    liked,
                    engagement_type: self.engagement_type.sample(rng),
                }
            })
            .collect();

        Ok(engagements)
    }

    /// Samples a duration, truncated to whole seconds and clamped to the
    /// configured range.
    pub fn sample_duration(&self, rng: &mut impl Rng) -> u32 {
        let (min, max) = self.config.duration_range;
        let seconds = self.duration.sample(rng) as i64;
        seconds.clamp(min as i64, max as i64) as u32
    }

    /// Probability that an engagement of the given duration is liked.
    ///
    /// Linear in duration: 0.1 at zero seconds, 0.9 at 3600 with the defaults.
    pub fn like_probability(&self, duration_seconds: u32) -> f64 {
        let p = (duration_seconds as f64 / self.config.duration_range.1 as f64)
            * self.config.like_slope
            + self.config.like_base;
        p.clamp(0.0, 1.0)
    }
}

/// `YYYY-MM-DD HH:MM:SS` in UTC; sub-second precision is dropped.
mod timestamp_format {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

    const FORMAT: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let formatted = value
            .to_offset(UtcOffset::UTC)
            .format(FORMAT)
            .map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&raw, FORMAT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(D::Error::custom)
    }
}
