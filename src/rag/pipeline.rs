//! Complete RAG pipeline: Retrieve -> Assemble -> Generate

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::database::Database;
use crate::embeddings::EmbeddingService;
use crate::errors::MedAssistError;
use crate::errors::Result;
use crate::llm::prompts::build_diagnosis_messages;
use crate::llm::LlmService;
use crate::models::RetrievedDocument;
use crate::rag::ContextAssembler;
use crate::rag::Retriever;

/// Complete RAG service
pub struct RagService {
    retriever: Retriever,
    context_assembler: ContextAssembler,
    llm_service: Option<LlmService>,
    top_k: usize,
}

impl RagService {
    /// Create a new RAG service on top of an existing pool
    ///
    /// The LLM is optional: without an API key the service still retrieves,
    /// but generation fails with `LlmNotConfigured`.
    ///
    /// # Errors
    /// - Embedding service configuration errors (unknown provider, bad endpoint)
    /// - HTTP client build errors
    pub fn new(config: &AppConfig, database: Arc<Database>) -> Result<Self> {
        let embedding_service = Arc::new(EmbeddingService::new(config)?);
        let llm_service = LlmService::optional(config)?;
        Ok(Self::from_services(config, database, embedding_service, llm_service))
    }

    /// Create from existing services
    #[must_use]
    pub fn from_services(
        config: &AppConfig,
        database: Arc<Database>,
        embedding_service: Arc<EmbeddingService>,
        llm_service: Option<LlmService>,
    ) -> Self {
        let retriever = Retriever::new(
            database,
            embedding_service,
            config.collection(),
            config.vector_store.distance,
        );

        Self {
            retriever,
            context_assembler: ContextAssembler::new(config.vector_store.max_context_length),
            llm_service,
            top_k: config.top_k(),
        }
    }

    #[must_use]
    pub const fn is_llm_available(&self) -> bool {
        self.llm_service.is_some()
    }

    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Texts of the `top_k` documents closest to the query, closest first
    pub async fn retrieve_context(&self, query: &str, top_k: usize) -> Result<Vec<String>> {
        let documents = self.retriever.semantic_search(query, top_k).await?;
        Ok(documents.into_iter().map(|doc| doc.document).collect())
    }

    /// Ask the LLM to analyze the query against the retrieved documents
    ///
    /// # Errors
    /// - `LlmNotConfigured` when the service was built without an API key
    /// - LLM API errors (transport failures, non-success status, empty choices)
    pub async fn generate_response(&self, query: &str, context: &[String]) -> Result<String> {
        let context = self.context_assembler.assemble(context);
        self.generate_from_context(query, &context).await
    }

    async fn generate_from_context(&self, query: &str, context: &str) -> Result<String> {
        let llm = self
            .llm_service
            .as_ref()
            .ok_or(MedAssistError::LlmNotConfigured)?;

        let messages = build_diagnosis_messages(query, context);

        debug!("Generating response with {} ({} context bytes)", llm.model(), context.len());
        llm.chat(&messages).await
    }

    /// Retrieve with the configured `top_k`, then generate
    pub async fn diagnose(&self, symptoms: &str) -> Result<RagResponse> {
        self.diagnose_with_top_k(symptoms, self.top_k).await
    }

    /// Retrieve `top_k` documents, then generate
    pub async fn diagnose_with_top_k(&self, symptoms: &str, top_k: usize) -> Result<RagResponse> {
        info!("Processing diagnosis query: {}", symptoms);

        debug!("Step 1: Retrieving documents");
        let sources = self.retriever.semantic_search(symptoms, top_k).await?;
        let texts: Vec<&str> = sources.iter().map(|doc| doc.document.as_str()).collect();
        let context = self.context_assembler.assemble(&texts);

        debug!("Step 2: Generating answer");
        let answer = self.generate_from_context(symptoms, &context).await?;

        info!("Diagnosis query completed with {} sources", sources.len());

        Ok(RagResponse {
            answer,
            context,
            sources,
            query: symptoms.to_string(),
        })
    }
}

/// RAG response
#[derive(Debug, Clone)]
pub struct RagResponse {
    pub answer: String,
    pub sources: Vec<RetrievedDocument>,
    pub context: String,
    pub query: String,
}

impl RagResponse {
    /// Get a formatted string representation
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Symptoms: {}\n\n", self.query));
        output.push_str(&format!("{}\n\n", self.answer.trim()));
        output.push_str(&format!("Sources ({} documents):\n", self.sources.len()));

        for (idx, source) in self.sources.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} (id: {}, distance: {:.4})\n",
                idx + 1,
                source.disease,
                source.id,
                source.distance
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_without_llm() -> RagService {
        let mut config = AppConfig::default();
        config.embeddings.endpoint = "http://127.0.0.1:9".to_string();
        let database = Arc::new(Database::connect_lazy(&config).unwrap());
        RagService::new(&config, database).unwrap()
    }

    #[tokio::test]
    async fn test_generate_without_llm() {
        let service = service_without_llm();
        assert!(!service.is_llm_available());
        assert_eq!(service.top_k(), 5);

        let result = service
            .generate_response("fever", &["The patient has flu.".to_string()])
            .await;
        assert!(matches!(result, Err(MedAssistError::LlmNotConfigured)));
    }

    #[tokio::test]
    async fn test_retrieve_fails_when_embedding_unreachable() {
        let service = service_without_llm();
        assert!(service.retrieve_context("fever", 5).await.is_err());
    }

    #[test]
    fn test_response_format() {
        let response = RagResponse {
            answer: "**Possible Conditions Based on Your Symptoms:**\n".to_string(),
            sources: vec![RetrievedDocument {
                id: "12".to_string(),
                document: "The patient has flu, with symptoms including: fever.".to_string(),
                disease: "flu".to_string(),
                symptoms: "fever".to_string(),
                distance: 0.25,
            }],
            context: String::new(),
            query: "fever".to_string(),
        };

        let formatted = response.format();
        assert!(formatted.starts_with("Symptoms: fever\n\n**Possible Conditions"));
        assert!(formatted.contains("1. flu (id: 12, distance: 0.2500)"));
    }
}
