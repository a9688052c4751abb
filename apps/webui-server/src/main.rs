///! LTX-Video WebUI server
///! Single-page form in front of the inference.py Job Runner

mod api;
mod models;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use invoker::{JobRunner, RunnerConfig};

use crate::api::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "webui_server=debug,invoker=debug".into()),
        )
        .init();

    info!("Starting LTX-Video WebUI server...");

    // Environment is read once here; the runner itself is plain data.
    let config = RunnerConfig::from_env();
    std::fs::create_dir_all(&config.output_root)?;
    info!(
        "Runner configured: contract={} default_model={} offload={}",
        config.contract, config.default_model, config.offload_to_cpu
    );

    let output_root = config.output_root.clone();
    let state = Arc::new(AppState {
        runner: JobRunner::new(config),
    });

    // Build router
    let app = Router::new()
        .route("/", get(|| async { Html(INDEX_HTML) }))
        .route("/api/models", get(api::list_models))
        .route("/api/generate", post(api::generate))
        // Produced videos are served straight from the output root
        .nest_service("/outputs", ServeDir::new(output_root))
        // CORS for local development
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("LTX_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(7860);
    let addr = format!("0.0.0.0:{}", port);
    info!("WebUI listening on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /              - generation form");
    info!("  GET  /api/models    - registered models");
    info!("  POST /api/generate  - run inference");
    info!("  GET  /outputs/*     - produced videos");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
