//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `medassist` CLI

use crate::config::mask_database_url;
use crate::dataset::CleanReport;
use crate::dataset::IndexStats;
use crate::models::StoreStatistics;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// Returns the string with a "..." suffix if truncated, otherwise unchanged.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

pub fn print_clean_report(report: &CleanReport) {
    println!("📊 Raw dataset shape:   {:?}", report.raw_shape);
    println!("📊 Clean dataset shape: {:?}", report.clean_shape);
    println!("🧹 Rows removed: {}", report.rows_removed());
}

pub fn print_index_stats(stats: &IndexStats, collection: &str) {
    println!("📊 Indexing summary:");
    println!("  Documents embedded: {}", stats.documents);
    println!("  Chunks stored: {}", stats.chunks);
    println!("  Rows written: {}", stats.rows_written);
    println!("  Collection '{}' now holds {} entries", collection, stats.collection_count);
}

pub fn print_statistics(stats: &StoreStatistics) {
    println!("📈 MedAssist Statistics");
    println!("======================");
    println!("  Collection: {}", stats.collection);
    println!("  Knowledge documents: {}", stats.documents);
    println!("  Stored diagnoses: {}", stats.diagnoses);
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 MedAssist Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Bind: {}:{}", config.server.host, config.server.port);
    println!("  CORS origins: {:?}", config.server.cors_origins);
    println!();

    println!("🗄️  Database:");
    println!("  URL: {}", mask_database_url(config.database_url()));
    println!("  Max connections: {}", config.max_connections());
    println!("  Min connections: {}", config.min_connections());
    println!("  Connection timeout: {}s", config.connection_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!();

    println!("🧠 Embeddings:");
    println!("  Provider: {}", config.embeddings.provider);
    println!("  Endpoint: {}", config.embeddings.endpoint);
    println!("  Model: {}", config.embedding_model());
    println!("  Dimension: {}", config.embedding_dimension());
    println!("  Batch size: {}", config.embedding_batch_size());
    println!();

    println!("🗂️  Vector store:");
    println!("  Collection: {}", config.collection());
    println!("  Top k: {}", config.top_k());
    println!("  Distance: {:?}", config.vector_store.distance);
    println!("  Upsert chunk size: {}", config.vector_store.upsert_chunk_size);
    println!(
        "  IVFFlat index: {} (lists = {})",
        config.vector_store.enable_index, config.vector_store.index_lists
    );
    println!();

    println!("📁 Dataset:");
    println!("  Raw: {}", config.dataset.raw_path);
    println!("  Clean: {}", config.dataset.clean_path);
    println!();

    println!("🤖 LLM:");
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Model: {}", config.llm_model());
    println!(
        "  Key: {}",
        if config.llm_configured() { "***" } else { "(not set)" }
    );
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("fever", 10), "fever");
        assert_eq!(truncate_str("high fever", 4), "high...");
        assert_eq!(truncate_str("fièvre élevée", 6), "fièvre...");
    }
}
