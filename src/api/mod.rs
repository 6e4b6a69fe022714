//! HTTP API serving symptom diagnosis over REST

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use handlers::AppState;
pub use server::build_app;
pub use server::serve_api;
