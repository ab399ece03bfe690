//! Generates all three tables in one run.
//!
//! Run with:
//! ```
//! cargo run -p learning-data --release --bin generate
//! ```

use learning_data::builders::DatasetBuilder;
use learning_data::config::GenerationConfig;

fn main() -> anyhow::Result<()> {
    learning_data::init_logging();

    let config = GenerationConfig::from_env();
    tracing::info!("Writing datasets to {}", config.output_dir.display());

    let result = DatasetBuilder::from_config(config).with_metrics(true).build()?;

    // Summary output
    tracing::info!("Generation completed!");
    tracing::info!("  Users: {}", result.users.len());
    tracing::info!("  Content: {}", result.content.len());
    tracing::info!("  Engagements: {}", result.engagements.len());

    if let Some(metrics) = result.metrics {
        tracing::info!("  Generation time: {} ms", metrics.generation_time_ms);
        tracing::info!("  Write time: {} ms", metrics.write_time_ms);
        tracing::info!("  Like rate: {:.1}%", metrics.like_rate * 100.0);
        tracing::info!(
            "  Engagements from top 1% of users: {:.1}%",
            metrics.top_user_share * 100.0
        );
    }

    Ok(())
}
