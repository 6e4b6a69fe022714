pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod dataset;
pub mod embeddings;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod rag;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
