//! Terminal diagnosis handler

use std::sync::Arc;

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::truncate_str;
use crate::database::Database;
use crate::models::NewDiagnosis;
use crate::rag::RagService;
use crate::AppConfig;
use crate::MedAssistError;
use crate::Result;

/// `--top-k` when given, otherwise the configured value; zero is rejected like in config
fn resolve_top_k(requested: Option<usize>, configured: usize) -> Result<usize> {
    match requested {
        Some(0) => Err(MedAssistError::ConfigError(
            "vector_store.top_k must be greater than zero".to_string(),
        )),
        Some(top_k) => Ok(top_k),
        None => Ok(configured),
    }
}

/// Handle diagnose command
pub async fn handle_diagnose(
    config: &AppConfig,
    symptoms: String,
    top_k: Option<usize>,
    no_save: bool,
) -> Result<()> {
    if symptoms.trim().is_empty() {
        return Err(MedAssistError::Custom("Symptoms cannot be empty.".to_string()));
    }

    let top_k = resolve_top_k(top_k, config.top_k())?;

    let database = Arc::new(Database::from_config(config).await?);
    database.verify_schema_or_error().await?;

    let rag_service = RagService::new(config, database.clone())?;
    if !rag_service.is_llm_available() {
        return Err(MedAssistError::LlmNotConfigured);
    }

    print_info(&format!(
        "🔍 Diagnosing \"{}\" with the {top_k} closest documents...",
        truncate_str(&symptoms, 80)
    ));

    let response = rag_service.diagnose_with_top_k(&symptoms, top_k).await?;
    println!();
    println!("{}", response.format());

    if no_save {
        print_info("Diagnosis not stored (--no-save)");
    } else {
        let record = database
            .create_diagnosis(&NewDiagnosis::new(symptoms, response.answer))
            .await?;
        print_success(&format!("Diagnosis stored with id {}", record.id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_top_k() {
        assert_eq!(resolve_top_k(None, 5).unwrap(), 5);
        assert_eq!(resolve_top_k(Some(3), 5).unwrap(), 3);
        assert!(matches!(
            resolve_top_k(Some(0), 5),
            Err(MedAssistError::ConfigError(msg)) if msg == "vector_store.top_k must be greater than zero"
        ));
    }
}
