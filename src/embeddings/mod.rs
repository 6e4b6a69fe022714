//! Embeddings generation module
//!
//! This module provides functionality for generating text embeddings using various providers:
//! - HuggingFace text-embeddings-inference (hosts sentence-transformers models such as BioBERT)
//! - OpenAI-compatible embedding APIs
//! - Ollama (local models)
//!
//! # Examples
//!
//! ```rust,no_run
//! use medassist::embeddings::EmbeddingService;
//! use medassist::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = EmbeddingService::new(&config)?;
//!
//!     let embedding = service.generate("fever, chills and a dry cough").await?;
//!     println!("Generated embedding with {} dimensions", embedding.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod generator;
pub mod text_preprocessing;

pub use client::EmbeddingClient;
pub use client::EmbeddingProvider;
pub use generator::EmbeddingService;
pub use text_preprocessing::preprocess_text_for_embedding;

use crate::errors::Result;

/// Configuration for embedding generation
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub dimension: usize,
    pub batch_size: usize,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl EmbeddingConfig {
    pub fn from_app_config(config: &crate::config::AppConfig) -> Result<Self> {
        let provider = config.embeddings.provider.parse::<EmbeddingProvider>()?;

        Ok(Self {
            provider,
            model: config.embedding_model().to_string(),
            dimension: config.embedding_dimension(),
            batch_size: config.embedding_batch_size().max(1),
            endpoint: config.embeddings.endpoint.clone(),
            api_key: config
                .embeddings
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_app_config() {
        let mut app = crate::config::AppConfig::default();
        app.embeddings.provider = "ollama".to_string();
        app.embeddings.api_key = Some(String::new());

        let config = EmbeddingConfig::from_app_config(&app).unwrap();
        assert_eq!(config.provider, EmbeddingProvider::Ollama);
        assert_eq!(config.dimension, 768);
        assert_eq!(config.batch_size, 32);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let mut app = crate::config::AppConfig::default();
        app.embeddings.provider = "sentence-transformers".to_string();
        assert!(matches!(
            EmbeddingConfig::from_app_config(&app),
            Err(crate::MedAssistError::ConfigError(_))
        ));
    }
}
