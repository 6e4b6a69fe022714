//! Embedding API clients for various providers

use std::str::FromStr;

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::MedAssistError;
use crate::errors::Result;

/// Supported embedding providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingProvider {
    /// HuggingFace text-embeddings-inference server
    Tei,
    /// `OpenAI`-compatible embeddings API
    OpenAI,
    /// Ollama local embeddings
    Ollama,
}

impl FromStr for EmbeddingProvider {
    type Err = MedAssistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tei" | "huggingface" => Ok(Self::Tei),
            "openai" => Ok(Self::OpenAI),
            "ollama" => Ok(Self::Ollama),
            other => Err(MedAssistError::ConfigError(format!(
                "Unknown embedding provider '{other}' (expected tei, openai or ollama)"
            ))),
        }
    }
}

/// Client for generating embeddings from various providers
pub struct EmbeddingClient {
    provider: EmbeddingProvider,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(
        provider: EmbeddingProvider,
        model: String,
        endpoint: String,
        api_key: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MedAssistError::HttpError(e.to_string()))?;

        Ok(Self {
            provider,
            model,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Generate embedding for a single text
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication failures)
    /// - Invalid API responses (malformed JSON, missing embedding)
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        match self.provider {
            EmbeddingProvider::Ollama => self.generate_ollama(text).await,
            EmbeddingProvider::Tei | EmbeddingProvider::OpenAI => self
                .generate_batch(vec![text])
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| MedAssistError::EmbeddingError("No embedding in response".to_string())),
        }
    }

    /// Generate embeddings for multiple texts in batch
    ///
    /// The result has one vector per input, in input order.
    pub async fn generate_batch(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let expected = texts.len();
        let embeddings = match self.provider {
            EmbeddingProvider::Tei => self.generate_batch_tei(texts).await?,
            EmbeddingProvider::OpenAI => self.generate_batch_openai(texts).await?,
            EmbeddingProvider::Ollama => {
                // Ollama's embeddings endpoint takes one prompt per request
                let mut embeddings = Vec::with_capacity(texts.len());
                for text in texts {
                    embeddings.push(self.generate_ollama(text).await?);
                }
                embeddings
            }
        };

        if embeddings.len() != expected {
            return Err(MedAssistError::EmbeddingError(format!(
                "Expected {expected} embeddings, got {}",
                embeddings.len()
            )));
        }

        Ok(embeddings)
    }

    /// Generate embeddings using a text-embeddings-inference server
    async fn generate_batch_tei(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        #[derive(Serialize)]
        struct TeiRequest<'a> {
            inputs: Vec<&'a str>,
            truncate: bool,
        }

        let url = format!("{}/embed", self.endpoint);
        debug!("Calling TEI embeddings API: {} items", texts.len());

        let request = TeiRequest {
            inputs: texts,
            truncate: true,
        };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MedAssistError::HttpError(e.to_string()))?;

        let response = check_status(response, "TEI").await?;

        response
            .json::<Vec<Vec<f32>>>()
            .await
            .map_err(|e| MedAssistError::EmbeddingError(format!("Failed to parse response: {e}")))
    }

    /// Generate embeddings in batch using an `OpenAI`-compatible API
    async fn generate_batch_openai(&self, texts: Vec<&str>) -> Result<Vec<Vec<f32>>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            MedAssistError::ConfigError("OpenAI embeddings API key not provided".to_string())
        })?;

        #[derive(Serialize)]
        struct OpenAIBatchRequest<'a> {
            input: Vec<&'a str>,
            model: &'a str,
        }

        #[derive(Deserialize)]
        struct OpenAIResponse {
            data: Vec<EmbeddingData>,
        }

        #[derive(Deserialize)]
        struct EmbeddingData {
            index: usize,
            embedding: Vec<f32>,
        }

        let url = format!("{}/embeddings", self.endpoint);
        debug!("Calling OpenAI batch embeddings API: {} items", texts.len());

        let request = OpenAIBatchRequest {
            input: texts,
            model: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MedAssistError::HttpError(e.to_string()))?;

        let response = check_status(response, "OpenAI").await?;

        let mut result: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| MedAssistError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        result.data.sort_by_key(|d| d.index);
        Ok(result.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Generate embedding using Ollama API
    async fn generate_ollama(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            embedding: Vec<f32>,
        }

        let url = format!("{}/api/embeddings", self.endpoint);
        debug!("Calling Ollama embeddings API: {}", url);

        let request = OllamaRequest {
            model: &self.model,
            prompt: text,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| MedAssistError::HttpError(e.to_string()))?;

        let response = check_status(response, "Ollama").await?;

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| MedAssistError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        Ok(result.embedding)
    }
}

async fn check_status(response: reqwest::Response, provider: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(MedAssistError::EmbeddingError(format!(
        "{provider} API error ({status}): {error_text}"
    )))
}
