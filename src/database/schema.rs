use super::Database;
use crate::config::DistanceMetric;
use crate::MedAssistError;
use crate::Result;

/// Options that shape the vector-store table
#[derive(Debug, Clone, Copy)]
pub struct SchemaOptions {
    pub dimension: usize,
    pub distance: DistanceMetric,
    pub enable_index: bool,
    pub index_lists: usize,
}

impl SchemaOptions {
    #[must_use]
    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        Self {
            dimension: config.embedding_dimension(),
            distance: config.vector_store.distance,
            enable_index: config.vector_store.enable_index,
            index_lists: config.vector_store.index_lists,
        }
    }
}

impl Database {
    /// Check if database schema is initialized
    /// Returns true if all required tables exist
    pub async fn is_schema_initialized(&self) -> Result<bool> {
        for table_name in ["diagnoses", "knowledge_documents"] {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS (
                    SELECT FROM information_schema.tables
                    WHERE table_schema = 'public'
                    AND table_name = $1
                )
                ",
            )
            .bind(table_name)
            .fetch_one(&self.pool)
            .await?;

            if !exists {
                tracing::debug!("Missing required table: {}", table_name);
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Verify database schema or return helpful error
    pub async fn verify_schema_or_error(&self) -> Result<()> {
        if !self.is_schema_initialized().await? {
            return Err(MedAssistError::Custom(
                "Database schema not initialized!\n\n\
                 Please run the following command to initialize the database:\n\n\
                 medassist init"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize database schema
    ///
    /// Idempotent: every statement is `IF NOT EXISTS`.
    pub async fn init_schema(&self, options: SchemaOptions) -> Result<()> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS diagnoses (
                id SERIAL PRIMARY KEY,
                symptoms TEXT NOT NULL,
                diagnosis_response TEXT NOT NULL,
                created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // The vector type needs its dimension inline; it cannot be bound
        sqlx::query(&format!(
            r"
            CREATE TABLE IF NOT EXISTS knowledge_documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                document TEXT NOT NULL,
                disease TEXT NOT NULL,
                symptoms TEXT NOT NULL,
                embedding VECTOR({}) NOT NULL,
                created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
                PRIMARY KEY (collection, id)
            )
            ",
            options.dimension
        ))
        .execute(&self.pool)
        .await?;

        self.verify_embedding_dimension(options.dimension).await?;

        if options.enable_index {
            self.create_vector_index(options.distance, options.index_lists)
                .await?;
        }

        tracing::info!(
            "Schema ready (embedding dimension {}, distance {:?})",
            options.dimension,
            options.distance
        );
        Ok(())
    }

    /// Fail if an existing table was created for another embedding model
    pub async fn verify_embedding_dimension(&self, expected: usize) -> Result<()> {
        // For the vector type, atttypmod holds the declared dimension
        let declared = sqlx::query_scalar::<_, i32>(
            r"
            SELECT atttypmod
            FROM pg_attribute
            WHERE attrelid = 'knowledge_documents'::regclass
            AND attname = 'embedding'
            ",
        )
        .fetch_optional(&self.pool)
        .await?;

        match declared {
            Some(dim) if dim > 0 && dim as usize != expected => {
                Err(MedAssistError::ConfigError(format!(
                    "knowledge_documents.embedding is VECTOR({dim}) but embeddings.dimension is {expected}; \
                     drop the table or use the matching model"
                )))
            }
            _ => Ok(()),
        }
    }

    async fn create_vector_index(&self, distance: DistanceMetric, lists: usize) -> Result<()> {
        let index_name = match distance {
            DistanceMetric::L2 => "idx_knowledge_documents_embedding_l2",
            DistanceMetric::Cosine => "idx_knowledge_documents_embedding_cosine",
        };

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {index_name} ON knowledge_documents \
             USING ivfflat (embedding {}) WITH (lists = {lists})",
            distance.index_ops()
        ))
        .execute(&self.pool)
        .await?;

        tracing::info!("Vector index {} ready (lists = {})", index_name, lists);
        Ok(())
    }
}
