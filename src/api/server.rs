//! HTTP server implementation

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowMethods;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::database::Database;
use crate::database::SchemaOptions;
use crate::rag::RagService;
use crate::MedAssistError;
use crate::Result;

/// CORS for browser clients on the configured origins
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using a wildcard.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(MedAssistError::ConfigError(
                    "Wildcard CORS origin cannot be combined with credentials".to_string(),
                ));
            }
            HeaderValue::from_str(origin).map_err(|e| {
                MedAssistError::ConfigError(format!("Invalid CORS origin '{origin}': {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Router with tracing and CORS layers applied
pub fn build_app(state: AppState, cors_origins: &[String]) -> Result<Router> {
    Ok(routes::api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins)?))
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16) -> Result<()> {
    info!("🚀 Starting MedAssist API server...");

    let database = Arc::new(Database::from_config(config).await?);
    database.init_schema(SchemaOptions::from_config(config)).await?;

    let rag_service = match RagService::new(config, database.clone()) {
        Ok(service) => {
            if service.is_llm_available() {
                info!("✅ RAG service ready ({})", config.llm_model());
            } else {
                error!("GROQ_API_KEY not found. RAG service will not be available.");
            }
            Some(Arc::new(service))
        }
        Err(e) => {
            error!("Failed to initialize RAG service: {}", e);
            None
        }
    };

    match database.count_documents(config.collection()).await {
        Ok(0) => warn!(
            "Collection '{}' is empty. Run `medassist build-index` before diagnosing.",
            config.collection()
        ),
        Ok(count) => info!(
            "Collection '{}' holds {} documents",
            config.collection(),
            count
        ),
        Err(e) => warn!("Could not count documents: {}", e),
    }

    let state = AppState {
        database,
        rag_service,
    };
    let app = build_app(state, &config.server.cors_origins)?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("✅ CORS origins: {:?}", config.server.cors_origins);
    info!("Available endpoints:");
    info!("  GET  /                 - Status");
    info!("  GET  /health           - Health check");
    info!("  POST /api/v1/diagnose  - Diagnose symptoms");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_default_origin() {
        assert!(cors_layer(&["http://localhost:3001".to_string()]).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(matches!(
            cors_layer(&["http://bad\norigin".to_string()]),
            Err(MedAssistError::ConfigError(_))
        ));
        assert!(cors_layer(&["*".to_string()]).is_err());
    }
}
