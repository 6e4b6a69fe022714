//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::MedAssistError;
    use crate::errors::Result;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = MedAssistError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = MedAssistError::ConfigError("Invalid top_k".to_string());
        assert!(matches!(error, MedAssistError::ConfigError(_)));
        assert!(format!("{error}").contains("Configuration error"));
    }

    #[test]
    fn test_llm_not_configured_message() {
        let display = format!("{}", MedAssistError::LlmNotConfigured);
        assert!(display.contains("API key"));
    }

    #[test]
    fn test_error_variants_display() {
        let errors = vec![
            MedAssistError::HttpError("http".to_string()),
            MedAssistError::EmbeddingError("embedding".to_string()),
            MedAssistError::LlmError("llm".to_string()),
            MedAssistError::DatasetError("dataset".to_string()),
            MedAssistError::ConfigError("config".to_string()),
        ];

        for error in &errors {
            assert!(!format!("{error}").is_empty());
        }
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "disease_symptom.csv");
        let err: MedAssistError = io_err.into();

        match err {
            MedAssistError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: MedAssistError = json_err.into();
        assert!(matches!(err, MedAssistError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: MedAssistError = toml_err.into();
        assert!(matches!(err, MedAssistError::TomlParsing(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        assert!(parse(r#"{"symptoms": "fever"}"#).is_ok());
        assert!(matches!(
            parse("not json"),
            Err(MedAssistError::Serialization(_))
        ));
    }

    #[test]
    fn test_error_chain_preservation() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file.txt");
        let err: MedAssistError = io_err.into();
        assert!(format!("{err}").contains("file.txt"));
    }
}
