//! Context assembly from retrieved documents

/// Separator placed between documents in the prompt context
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Assembler for creating context from retrieved documents
pub struct ContextAssembler {
    max_context_length: usize,
}

impl ContextAssembler {
    /// Create a new context assembler
    #[must_use]
    pub const fn new(max_context_length: usize) -> Self {
        Self { max_context_length }
    }

    /// Join documents with a blank line, closest first
    ///
    /// Whole documents only: once the next document would exceed the limit,
    /// assembly stops. The first document is always included so the model
    /// never receives an empty context when something was retrieved.
    #[must_use]
    pub fn assemble<S: AsRef<str>>(&self, documents: &[S]) -> String {
        let mut context = String::new();

        for (idx, document) in documents.iter().enumerate() {
            let document = document.as_ref();
            let added = if idx == 0 {
                document.len()
            } else {
                DOCUMENT_SEPARATOR.len() + document.len()
            };

            if idx > 0 && context.len() + added > self.max_context_length {
                tracing::debug!(
                    "Context limit reached: kept {} of {} documents",
                    idx,
                    documents.len()
                );
                break;
            }

            if idx > 0 {
                context.push_str(DOCUMENT_SEPARATOR);
            }
            context.push_str(document);
        }

        context
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(8000) // Default max context length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_blank_line() {
        let assembler = ContextAssembler::default();
        let docs = ["The patient has flu.", "The patient has measles."];
        assert_eq!(
            assembler.assemble(&docs),
            "The patient has flu.\n\nThe patient has measles."
        );
    }

    #[test]
    fn test_empty_input() {
        let docs: [&str; 0] = [];
        assert_eq!(ContextAssembler::default().assemble(&docs), "");
    }

    #[test]
    fn test_stops_at_limit_with_whole_documents() {
        let assembler = ContextAssembler::new(25);
        let docs = vec!["a".repeat(10), "b".repeat(10), "c".repeat(10)];
        // 10 + 2 + 10 = 22 fits, adding the third (34) does not
        assert_eq!(
            assembler.assemble(&docs),
            format!("{}\n\n{}", "a".repeat(10), "b".repeat(10))
        );
    }

    #[test]
    fn test_first_document_always_kept() {
        let assembler = ContextAssembler::new(5);
        let docs = vec!["x".repeat(50), "y".to_string()];
        assert_eq!(assembler.assemble(&docs), "x".repeat(50));
    }
}
