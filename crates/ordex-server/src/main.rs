//! HTTP entry point for the purchase-order analysis service.

mod routes;

use std::sync::Arc;

use ordex_core::llm::AzureOpenAiClient;
use ordex_core::models::LlmConfig;
use tracing_subscriber::EnvFilter;

use crate::routes::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match LlmConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match AzureOpenAiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build completion client: {}", e);
            std::process::exit(1);
        }
    };

    let bind = std::env::var("ORDEX_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("ORDEX_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{bind}:{port}");

    let state = Arc::new(AppState { client });
    let app = routes::router(state);

    tracing::info!("ordex server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
