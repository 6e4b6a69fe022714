pub mod config_tests;
pub mod errors_tests;

use crate::config::AppConfig;
use crate::database::Database;
use crate::database::SchemaOptions;
use crate::Result;

/// Test helper to create a test database connection with the schema in place
pub async fn create_test_database() -> Result<Database> {
    let mut config = AppConfig::default();
    config.apply_env_overrides();
    let database = Database::from_config(&config).await?;
    database.init_schema(SchemaOptions::from_config(&config)).await?;
    Ok(database)
}

/// Test helper to remove a scratch collection
pub async fn cleanup_collection(database: &Database, collection: &str) -> Result<()> {
    database.clear_collection(collection).await?;
    Ok(())
}
