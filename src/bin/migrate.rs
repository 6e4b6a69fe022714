use medassist::config::mask_database_url;
use medassist::database::Database;
use medassist::database::SchemaOptions;
use medassist::AppConfig;
use medassist::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration from config.toml
    let config = AppConfig::load()?;
    config.validate()?;

    println!("🔄 Running database migrations...");
    println!("📋 Database URL: {}", mask_database_url(config.database_url()));

    let db = Database::from_config(&config).await?;

    db.init_schema(SchemaOptions::from_config(&config)).await?;
    println!(
        "✅ Database migrations completed successfully! (embedding dimension {})",
        config.embedding_dimension()
    );

    Ok(())
}
