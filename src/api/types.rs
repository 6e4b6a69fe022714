//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// Diagnosis request body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagnoseRequest {
    pub symptoms: String,
}

/// Diagnosis response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagnoseResponse {
    pub diagnosis: String,
}

/// Root liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub llm_available: bool,
}

/// Error body: `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
