//! Table generators.
//!
//! - [`UserGenerator`]: users with weighted job titles and derived seniority/department
//! - [`ContentGenerator`]: content items with weighted difficulty and format
//! - [`EngagementGenerator`]: engagement events with skewed user/content activity

use std::ops::RangeInclusive;

use crate::error::DatasetError;

pub mod content;
pub mod engagement;
pub mod user;

pub use content::{ContentGenConfig, ContentGenerator, GeneratedContent};
pub use engagement::{EngagementGenConfig, EngagementGenerator, GeneratedEngagement};
pub use user::{GeneratedUser, UserGenerator};

/// Sequential ids `1..=count` for a table of `count` rows.
pub(crate) fn sequential_ids(
    count: usize,
    table: &'static str,
) -> Result<RangeInclusive<u32>, DatasetError> {
    let last = u32::try_from(count).map_err(|_| DatasetError::TooManyRows { table, count })?;
    Ok(1..=last)
}
