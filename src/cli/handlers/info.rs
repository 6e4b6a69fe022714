//! Information display handlers

use crate::cli::output::print_config;
use crate::cli::output::print_statistics;
use crate::database::Database;
use crate::models::StoreStatistics;
use crate::AppConfig;
use crate::Result;

/// Handle stats command
pub async fn handle_stats_command(config: &AppConfig) -> Result<()> {
    let database = Database::from_config(config).await?;
    database.verify_schema_or_error().await?;

    let stats = StoreStatistics {
        collection: config.collection().to_string(),
        documents: database.count_documents(config.collection()).await?,
        diagnoses: database.count_diagnoses().await?,
    };

    print_statistics(&stats);
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
