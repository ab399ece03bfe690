//! Example: Inspect how concentrated engagement activity is.
//!
//! Builds a small dataset in memory (no files written) and reports how
//! engagements spread across users and content for a few skew seeds.
//!
//! Run with:
//! ```
//! cargo run -p learning-data --example engagement_skew
//! ```

use std::collections::HashMap;

use learning_data::prelude::*;

fn main() -> anyhow::Result<()> {
    learning_data::init_logging();

    for seed in [1, 2, 3] {
        let result = DatasetBuilder::smoke_test()
            .with_skew_seeding(SkewSeeding::Fixed(seed))
            .build_data()?;

        let mut per_content: HashMap<u32, usize> = HashMap::new();
        for e in &result.engagements {
            *per_content.entry(e.content_id).or_default() += 1;
        }
        let busiest = per_content.values().copied().max().unwrap_or(0);
        let untouched = result.content.len() - per_content.len();

        tracing::info!("Skew seed {seed}:");
        if let Some(metrics) = &result.metrics {
            tracing::info!(
                "  Engagements from top 1% of users: {:.1}%",
                metrics.top_user_share * 100.0
            );
            tracing::info!("  Like rate: {:.1}%", metrics.like_rate * 100.0);
        }
        tracing::info!("  Busiest content item: {busiest} engagements");
        tracing::info!("  Content items never engaged: {untouched}");
    }

    // Show some sample rows
    let result = DatasetBuilder::smoke_test().build_data()?;
    tracing::info!("Sample engagements:");
    for e in result.engagements.iter().take(5) {
        tracing::info!(
            "  user {} -> content {}: {} for {}s, liked: {:?}",
            e.user_id,
            e.content_id,
            e.engagement_type.as_str(),
            e.duration_seconds,
            e.liked
        );
    }

    Ok(())
}
