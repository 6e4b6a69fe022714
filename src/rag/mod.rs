//! RAG (Retrieval-Augmented Generation) module
//!
//! This module answers symptom queries against the medical knowledge base:
//! - Semantic retrieval using vector embeddings
//! - Context assembly from retrieved documents
//! - LLM-based diagnosis generation
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use medassist::config::AppConfig;
//! use medassist::database::Database;
//! use medassist::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let database = Arc::new(Database::from_config(&config).await?);
//!     let service = RagService::new(&config, database)?;
//!
//!     let response = service.diagnose("fever, headache and a stiff neck").await?;
//!     println!("{}", response.answer);
//!     println!("Sources: {} documents", response.sources.len());
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;
pub mod retriever;

pub use context::ContextAssembler;
pub use pipeline::RagResponse;
pub use pipeline::RagService;
pub use retriever::Retriever;
