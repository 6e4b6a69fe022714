//! API request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::types::DiagnoseRequest;
use crate::api::types::DiagnoseResponse;
use crate::api::types::HealthResponse;
use crate::api::types::RootResponse;
use crate::database::Database;
use crate::models::NewDiagnosis;
use crate::rag::RagService;
use crate::Result;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    /// `None` when the RAG service could not be built at startup
    pub rag_service: Option<Arc<RagService>>,
}

impl AppState {
    /// The RAG service, only when it can actually generate
    fn available_rag(&self) -> Option<&Arc<RagService>> {
        self.rag_service
            .as_ref()
            .filter(|service| service.is_llm_available())
    }
}

/// Root handler
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "MedAssist API is running".to_string(),
    })
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        llm_available: state.available_rag().is_some(),
    })
}

/// Diagnose symptoms with the RAG pipeline
///
/// Availability is checked before input so a misconfigured server answers
/// 503 for every request.
pub async fn diagnose(
    State(state): State<AppState>,
    Json(request): Json<DiagnoseRequest>,
) -> std::result::Result<Json<DiagnoseResponse>, ApiError> {
    let Some(rag_service) = state.available_rag() else {
        return Err(ApiError::service_unavailable());
    };

    if request.symptoms.trim().is_empty() {
        return Err(ApiError::empty_symptoms());
    }

    info!("POST /api/v1/diagnose");

    match run_diagnosis(&state.database, rag_service, &request.symptoms).await {
        Ok(diagnosis) => Ok(Json(DiagnoseResponse { diagnosis })),
        Err(e) => {
            error!("Error during diagnosis: {}", e);
            Err(ApiError::internal())
        }
    }
}

/// Retrieve, generate, then persist; the row is written only after generation succeeds
async fn run_diagnosis(database: &Database, rag_service: &RagService, symptoms: &str) -> Result<String> {
    let context = rag_service
        .retrieve_context(symptoms, rag_service.top_k())
        .await?;
    let answer = rag_service.generate_response(symptoms, &context).await?;

    let record = database
        .create_diagnosis(&NewDiagnosis::new(symptoms, answer))
        .await?;
    info!("Stored diagnosis {}", record.id);

    Ok(record.diagnosis_response)
}
