/// REST endpoints wiring the form to the Job Runner
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use invoker::{GenerationRequest, InvokeError, JobRunner};

use crate::models::{GenerateResponse, ModelsResponse};

pub struct AppState {
    pub runner: JobRunner,
}

/// API error type
pub enum ApiError {
    BadRequest(String),
    /// The inference program failed; carries its full log text.
    Inference { message: String, logs: String },
    Internal(String),
}

impl From<InvokeError> for ApiError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::UnknownModel(_) => ApiError::BadRequest(err.to_string()),
            InvokeError::InferenceFailed { status, ref logs } => ApiError::Inference {
                message: format!("inference failed (exit status {:?})", status),
                logs: logs.clone(),
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Inference { message, logs } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": message, "logs": logs }),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
        };
        (status, Json(body)).into_response()
    }
}

/// GET /api/models - registry contents for the dropdown
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state
            .runner
            .registry()
            .model_ids()
            .map(str::to_string)
            .collect(),
        default_model: state.runner.config().default_model.clone(),
    })
}

/// POST /api/generate - run one generation to completion
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let outcome = state.runner.generate(&request).await.map_err(|e| {
        error!("generation failed: {}", e);
        ApiError::from(e)
    })?;

    // Artifacts live under the output root, which is mounted at /outputs.
    let relative = outcome
        .artifact
        .strip_prefix(&state.runner.config().output_root)
        .unwrap_or(&outcome.artifact)
        .to_string_lossy()
        .replace('\\', "/");

    Ok(Json(GenerateResponse {
        video_url: format!("/outputs/{}", relative),
        artifact: outcome.artifact.to_string_lossy().into_owned(),
        logs: outcome.logs,
    }))
}
