//! Dataset pipeline handlers

use std::path::PathBuf;

use crate::cli::output::print_clean_report;
use crate::cli::output::print_index_stats;
use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::database::Database;
use crate::dataset::build_documents;
use crate::dataset::build_index;
use crate::dataset::clean_dataset;
use crate::dataset::DataTable;
use crate::embeddings::EmbeddingService;
use crate::AppConfig;
use crate::Result;

/// Handle clean-data command
pub fn handle_clean_data(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| PathBuf::from(&config.dataset.raw_path));
    let output = output.unwrap_or_else(|| PathBuf::from(&config.dataset.clean_path));

    print_info(&format!("Looking for dataset at: {}", input.display()));
    let report = clean_dataset(&input, &output)?;

    print_clean_report(&report);
    print_success(&format!("Cleaned dataset saved at {}", output.display()));
    Ok(())
}

/// Handle build-index command
pub async fn handle_build_index(
    config: &AppConfig,
    input: Option<PathBuf>,
    collection: Option<String>,
    rebuild: bool,
) -> Result<()> {
    let input = input.unwrap_or_else(|| PathBuf::from(&config.dataset.clean_path));
    let collection = collection.unwrap_or_else(|| config.collection().to_string());

    crate::dataset::ensure_exists(&input, Some("Please run `medassist clean-data` first."))?;
    let table = DataTable::read_csv(&input)?;
    print_success(&format!(
        "Loaded cleaned dataset with shape: {:?}",
        table.shape()
    ));

    let documents = build_documents(&table)?;
    if documents.is_empty() {
        print_warning("Dataset has no rows; nothing to index");
        return Ok(());
    }

    let database = Database::from_config(config).await?;
    database.verify_schema_or_error().await?;
    database
        .verify_embedding_dimension(config.embedding_dimension())
        .await?;

    if rebuild {
        let removed = database.clear_collection(&collection).await?;
        print_info(&format!("Removed {removed} existing entries from '{collection}'"));
    }

    let embedding_service = EmbeddingService::new(config)?;
    print_info(&format!(
        "Embedding model: {} via {:?} (batch size {})",
        embedding_service.model(),
        embedding_service.provider(),
        config.embedding_batch_size()
    ));

    let stats = build_index(
        &database,
        &embedding_service,
        &documents,
        &collection,
        config.vector_store.upsert_chunk_size,
    )
    .await?;

    print_index_stats(&stats, &collection);
    print_success(&format!(
        "Stored {} medical entries in '{}'",
        stats.collection_count, collection
    ));
    Ok(())
}
