//! Text preprocessing utilities for embedding generation
//!
//! Cleans and normalizes text before it is sent to an embedding endpoint.

use tracing::debug;
use tracing::warn;

use crate::errors::MedAssistError;

/// Longest input forwarded to the embedding model, in characters.
///
/// BERT-family sentence models truncate at 512 tokens; this keeps requests
/// comfortably below that.
pub const MAX_EMBEDDING_CHARS: usize = 2000;

/// Preprocess text for embedding generation
///
/// This function handles:
/// - Normalizing whitespace and newlines
/// - Replacing control characters
/// - Truncating overly long input at a word boundary
pub fn preprocess_text_for_embedding(text: &str) -> Result<String, MedAssistError> {
    if text.is_empty() {
        return Err(MedAssistError::EmbeddingError(
            "Empty text provided".to_string(),
        ));
    }

    let sanitized = sanitize_text(&normalize_whitespace(text));

    if sanitized.trim().is_empty() {
        return Err(MedAssistError::EmbeddingError(
            "Text contains only whitespace after preprocessing".to_string(),
        ));
    }

    if sanitized.chars().count() > MAX_EMBEDDING_CHARS {
        warn!(
            "Text too long ({} chars), truncating to {}",
            sanitized.chars().count(),
            MAX_EMBEDDING_CHARS
        );
        return Ok(truncate_at_word_boundary(&sanitized, MAX_EMBEDDING_CHARS));
    }

    debug!(
        "Preprocessed text: {} -> {} chars",
        text.len(),
        sanitized.len()
    );
    Ok(sanitized)
}

/// Normalize whitespace and newlines
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Replace control characters with spaces and collapse the result
fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Truncate to `max_chars` characters, backing up to the last space when it
/// is not too far back
fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    if let Some(last_space) = truncated.rfind(' ') {
        if truncated[..last_space].chars().count() > max_chars * 3 / 4 {
            return truncated[..last_space].to_string();
        }
    }
    truncated
}
