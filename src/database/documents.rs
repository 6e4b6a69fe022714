//! pgvector-backed knowledge document store

use pgvector::Vector;

use super::Database;
use crate::config::DistanceMetric;
use crate::models::KnowledgeDocument;
use crate::models::RetrievedDocument;
use crate::MedAssistError;
use crate::Result;

impl Database {
    /// Insert or replace a batch of documents with their embeddings
    ///
    /// The batch is written in a single transaction.
    pub async fn upsert_documents(
        &self,
        collection: &str,
        documents: &[KnowledgeDocument],
        embeddings: &[Vec<f32>],
    ) -> Result<u64> {
        if documents.len() != embeddings.len() {
            return Err(MedAssistError::Custom(format!(
                "Document/embedding count mismatch: {} documents, {} embeddings",
                documents.len(),
                embeddings.len()
            )));
        }

        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for (doc, embedding) in documents.iter().zip(embeddings) {
            let result = sqlx::query(
                r"
                INSERT INTO knowledge_documents (collection, id, document, disease, symptoms, embedding)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (collection, id)
                DO UPDATE SET
                    document = EXCLUDED.document,
                    disease = EXCLUDED.disease,
                    symptoms = EXCLUDED.symptoms,
                    embedding = EXCLUDED.embedding
                ",
            )
            .bind(collection)
            .bind(&doc.id)
            .bind(&doc.document)
            .bind(&doc.disease)
            .bind(&doc.symptoms)
            .bind(Vector::from(embedding.clone()))
            .execute(&mut *tx)
            .await?;

            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Return the `limit` documents closest to `query_embedding`
    pub async fn nearest_documents(
        &self,
        collection: &str,
        query_embedding: Vec<f32>,
        limit: usize,
        distance: DistanceMetric,
    ) -> Result<Vec<RetrievedDocument>> {
        let sql = format!(
            r"
            SELECT id, document, disease, symptoms,
                   (embedding {op} $1)::float8 AS distance
            FROM knowledge_documents
            WHERE collection = $2
            ORDER BY embedding {op} $1
            LIMIT $3
            ",
            op = distance.operator()
        );

        let documents = sqlx::query_as::<_, RetrievedDocument>(&sql)
            .bind(Vector::from(query_embedding))
            .bind(collection)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    pub async fn count_documents(&self, collection: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM knowledge_documents WHERE collection = $1",
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Remove every document of a collection
    pub async fn clear_collection(&self, collection: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM knowledge_documents WHERE collection = $1")
            .bind(collection)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
