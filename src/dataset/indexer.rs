//! Vector store indexing: embed knowledge documents and upsert them

use tracing::info;

use crate::database::Database;
use crate::embeddings::EmbeddingService;
use crate::errors::MedAssistError;
use crate::errors::Result;
use crate::models::KnowledgeDocument;

/// Statistics from an indexing run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub chunks: usize,
    pub rows_written: u64,
    /// Documents in the collection after the run
    pub collection_count: i64,
}

/// Number of upsert chunks for `total` documents
#[must_use]
pub const fn chunk_count(total: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        0
    } else {
        total.div_ceil(chunk_size)
    }
}

/// Embed all documents, then store them in chunks of `chunk_size`
///
/// Existing entries with the same id are replaced.
pub async fn build_index(
    database: &Database,
    embedding_service: &EmbeddingService,
    documents: &[KnowledgeDocument],
    collection: &str,
    chunk_size: usize,
) -> Result<IndexStats> {
    if chunk_size == 0 {
        return Err(MedAssistError::ConfigError(
            "upsert chunk size must be greater than zero".to_string(),
        ));
    }

    let mut stats = IndexStats {
        documents: documents.len(),
        chunks: chunk_count(documents.len(), chunk_size),
        ..IndexStats::default()
    };

    info!(
        "Creating {} embeddings with {} ({} dimensions)",
        documents.len(),
        embedding_service.model(),
        embedding_service.dimension()
    );
    let texts: Vec<String> = documents.iter().map(|doc| doc.document.clone()).collect();
    let embeddings = embedding_service.generate_batch(&texts).await?;
    info!("Embeddings generated");

    info!("Storing embeddings in collection '{}'", collection);
    for (chunk_idx, (doc_chunk, embedding_chunk)) in documents
        .chunks(chunk_size)
        .zip(embeddings.chunks(chunk_size))
        .enumerate()
    {
        stats.rows_written += database
            .upsert_documents(collection, doc_chunk, embedding_chunk)
            .await?;
        info!("Stored chunk {}/{}", chunk_idx + 1, stats.chunks);
    }

    stats.collection_count = database.count_documents(collection).await?;
    info!(
        "Stored {} medical entries in '{}'",
        stats.collection_count, collection
    );

    Ok(stats)
}
