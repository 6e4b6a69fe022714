//! Retrieval of knowledge documents by vector similarity

use std::sync::Arc;

use tracing::debug;

use crate::config::DistanceMetric;
use crate::database::Database;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::models::RetrievedDocument;

/// Retriever for semantic search over one collection
pub struct Retriever {
    database: Arc<Database>,
    embedding_service: Arc<EmbeddingService>,
    collection: String,
    distance: DistanceMetric,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(
        database: Arc<Database>,
        embedding_service: Arc<EmbeddingService>,
        collection: impl Into<String>,
        distance: DistanceMetric,
    ) -> Self {
        Self {
            database,
            embedding_service,
            collection: collection.into(),
            distance,
        }
    }

    /// Semantic search using vector embeddings
    ///
    /// Results are ordered closest first.
    pub async fn semantic_search(&self, query: &str, limit: usize) -> Result<Vec<RetrievedDocument>> {
        debug!("Performing semantic search in '{}': {}", self.collection, query);

        let query_embedding = self.embedding_service.generate(query).await?;

        let documents = self
            .database
            .nearest_documents(&self.collection, query_embedding, limit, self.distance)
            .await?;

        debug!("Retrieved {} documents", documents.len());
        Ok(documents)
    }
}
