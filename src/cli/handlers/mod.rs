//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - init: Database schema bootstrap
//! - data: Dataset cleaning and vector store indexing
//! - rag: Terminal diagnosis
//! - serve: API server
//! - info: Information display (stats, config)

pub mod data;
pub mod info;
pub mod init;
pub mod rag;
pub mod serve;

// Re-export all public handlers
pub use data::*;
pub use info::*;
pub use init::*;
pub use rag::*;
pub use serve::*;
