//! API server handler

use crate::api::serve_api;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_api(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    println!("🚀 Starting MedAssist API Server");
    println!("=================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", config.server.cors_origins.join(", "));
    println!(
        "🤖 LLM: {}",
        if config.llm_configured() {
            config.llm_model()
        } else {
            "not configured (diagnose will answer 503)"
        }
    );
    println!();

    serve_api(config, host, port).await
}
