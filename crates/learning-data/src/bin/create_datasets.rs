//! Generates the content and engagements tables from an existing users table.
//!
//! Run `create-users` first, then:
//! ```
//! cargo run -p learning-data --bin create-datasets
//! ```

use anyhow::Context;
use learning_data::builders::DatasetBuilder;
use learning_data::config::GenerationConfig;
use learning_data::output::{CsvWriter, read_user_ids};

fn main() -> anyhow::Result<()> {
    learning_data::init_logging();

    let builder = DatasetBuilder::from_config(GenerationConfig::from_env());
    let config = builder.config();

    let users_path = config.users_path();
    let user_ids = read_user_ids(&users_path)
        .with_context(|| format!("reading user ids from {}", users_path.display()))?;

    let (content, engagements) = builder.generate_content_and_engagements(&user_ids)?;

    let writer = CsvWriter::new(&config.output_dir);
    writer.write_content(&content)?;
    writer.write_engagements(&engagements)?;

    tracing::info!("Content table created with {} records", content.len());
    tracing::info!("Engagements table created with {} records", engagements.len());
    tracing::info!("All datasets have been generated and saved as CSV files.");
    Ok(())
}
