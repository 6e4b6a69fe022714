//! End-to-end pipeline tests
//!
//! These need PostgreSQL with pgvector (`DATABASE_URL`), a TEI embedding
//! server (`EMBEDDING_ENDPOINT`) and, for generation, `GROQ_API_KEY`.
//! Run with: `cargo test --test integration_test -- --ignored`

use std::sync::Arc;

use medassist::config::AppConfig;
use medassist::database::Database;
use medassist::database::SchemaOptions;
use medassist::dataset::build_documents;
use medassist::dataset::build_index;
use medassist::dataset::clean_dataset;
use medassist::dataset::DataTable;
use medassist::embeddings::EmbeddingService;
use medassist::rag::RagService;
use medassist::Result;

const COLLECTION: &str = "integration_test_kb";

async fn setup() -> Result<(AppConfig, Arc<Database>)> {
    let mut config = AppConfig::default();
    config.apply_env_overrides();
    config.vector_store.collection = COLLECTION.to_string();

    let database = Arc::new(Database::from_config(&config).await?);
    database.init_schema(SchemaOptions::from_config(&config)).await?;
    database.clear_collection(COLLECTION).await?;

    Ok((config, database))
}

async fn index_sample(config: &AppConfig, database: &Database) -> Result<usize> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("disease_symptom.csv");
    let clean = dir.path().join("medical_dataset_clean.csv");
    std::fs::write(
        &raw,
        "diseases,high_fever,skin_rash,stiff_neck,cough\n\
         measles,1,1,0,1\n\
         meningitis,1,0,1,0\n\
         common cold,0,0,0,1\n\
         measles,1,1,0,1\n",
    )?;

    clean_dataset(&raw, &clean)?;
    let documents = build_documents(&DataTable::read_csv(&clean)?)?;
    let embedding_service = EmbeddingService::new(config)?;
    build_index(database, &embedding_service, &documents, COLLECTION, 2).await?;

    Ok(documents.len())
}

#[tokio::test]
#[ignore = "Requires PostgreSQL with pgvector and an embedding server"]
async fn test_index_and_retrieve() -> Result<()> {
    let (config, database) = setup().await?;

    let indexed = index_sample(&config, &database).await?;
    assert_eq!(indexed, 3);
    assert_eq!(database.count_documents(COLLECTION).await?, 3);

    let rag = RagService::new(&config, database.clone())?;
    let context = rag.retrieve_context("fever with a stiff neck", 2).await?;
    assert_eq!(context.len(), 2);
    assert!(context[0].starts_with("The patient has "));

    // Re-indexing the same file keeps the count stable
    index_sample(&config, &database).await?;
    assert_eq!(database.count_documents(COLLECTION).await?, 3);

    database.clear_collection(COLLECTION).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "Requires PostgreSQL with pgvector, an embedding server and GROQ_API_KEY"]
async fn test_full_diagnosis() -> Result<()> {
    let (config, database) = setup().await?;
    index_sample(&config, &database).await?;

    let rag = RagService::new(&config, database.clone())?;
    assert!(rag.is_llm_available());

    let response = rag.diagnose("high fever, rash and a cough").await?;
    assert!(!response.answer.is_empty());
    assert!(!response.sources.is_empty());
    assert!(response.context.contains("The patient has"));

    database.clear_collection(COLLECTION).await?;
    Ok(())
}
