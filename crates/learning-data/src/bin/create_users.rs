//! Generates the users table.
//!
//! Run with:
//! ```
//! cargo run -p learning-data --bin create-users
//! ```

use learning_data::builders::DatasetBuilder;
use learning_data::config::GenerationConfig;
use learning_data::output::CsvWriter;

fn main() -> anyhow::Result<()> {
    learning_data::init_logging();

    let builder = DatasetBuilder::from_config(GenerationConfig::from_env());
    tracing::info!("Starting user generation...");

    let users = builder.generate_users()?;
    let path = CsvWriter::new(&builder.config().output_dir).write_users(&users)?;

    tracing::info!(
        "Users table created with {} records at {}",
        users.len(),
        path.display()
    );
    Ok(())
}
