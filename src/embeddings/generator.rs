//! Embedding generation service with preprocessing and batch processing

use std::sync::Arc;

use tracing::debug;

use super::client::EmbeddingClient;
use super::client::EmbeddingProvider;
use super::EmbeddingConfig;
use crate::errors::MedAssistError;
use crate::errors::Result;

/// Service for generating embeddings
pub struct EmbeddingService {
    client: Arc<EmbeddingClient>,
    config: EmbeddingConfig,
}

impl EmbeddingService {
    /// Create a new embedding service
    pub fn new(config: &crate::config::AppConfig) -> Result<Self> {
        Self::from_config(EmbeddingConfig::from_app_config(config)?)
    }

    /// Create from custom config
    pub fn from_config(config: EmbeddingConfig) -> Result<Self> {
        let client = EmbeddingClient::new(
            config.provider,
            config.model.clone(),
            config.endpoint.clone(),
            config.api_key.clone(),
        )?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Generate embedding for a single text
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        let processed_text = super::preprocess_text_for_embedding(text)?;
        let embedding = self.client.generate(&processed_text).await?;
        self.check_dimension(&embedding)?;
        Ok(embedding)
    }

    /// Generate embeddings for multiple texts in batch
    ///
    /// Inputs are sent in provider batches of `batch_size`; the output keeps
    /// input order. Any input that is empty after preprocessing fails the
    /// whole call, since a placeholder vector would pollute the index.
    pub async fn generate_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let processed_texts = texts
            .iter()
            .map(|text| super::preprocess_text_for_embedding(text))
            .collect::<Result<Vec<_>>>()?;

        let mut embeddings = Vec::with_capacity(processed_texts.len());
        for (batch_idx, chunk) in processed_texts.chunks(self.config.batch_size).enumerate() {
            debug!(
                "Embedding batch {}/{} ({} texts)",
                batch_idx + 1,
                processed_texts.len().div_ceil(self.config.batch_size),
                chunk.len()
            );

            let chunk_embeddings = self
                .client
                .generate_batch(chunk.iter().map(String::as_str).collect())
                .await?;

            for embedding in &chunk_embeddings {
                self.check_dimension(embedding)?;
            }
            embeddings.extend(chunk_embeddings);
        }

        Ok(embeddings)
    }

    fn check_dimension(&self, embedding: &[f32]) -> Result<()> {
        if embedding.len() == self.config.dimension {
            Ok(())
        } else {
            Err(MedAssistError::EmbeddingError(format!(
                "Embedding dimension mismatch: model returned {}, configured {}",
                embedding.len(),
                self.config.dimension
            )))
        }
    }

    /// Get the embedding dimension
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Get the model name
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the provider
    #[must_use]
    pub const fn provider(&self) -> EmbeddingProvider {
        self.config.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dimension: usize) -> EmbeddingService {
        EmbeddingService::from_config(EmbeddingConfig {
            provider: EmbeddingProvider::Tei,
            model: "test-model".to_string(),
            dimension,
            batch_size: 2,
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key: None,
        })
        .unwrap()
    }

    #[test]
    fn test_dimension_check() {
        let service = service(3);
        assert!(service.check_dimension(&[0.1, 0.2, 0.3]).is_ok());
        assert!(matches!(
            service.check_dimension(&[0.1, 0.2]),
            Err(MedAssistError::EmbeddingError(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_request() {
        let embeddings = service(3).generate_batch(&[]).await.unwrap();
        assert!(embeddings.is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_fails_before_request() {
        let texts = vec!["fever".to_string(), "   ".to_string()];
        let result = service(3).generate_batch(&texts).await;
        assert!(matches!(result, Err(MedAssistError::EmbeddingError(_))));
    }
}
