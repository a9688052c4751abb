/// Wire types for the WebUI endpoints
use serde::Serialize;

/// GET /api/models response: dropdown contents plus the preselected entry.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub default_model: String,
}

/// POST /api/generate response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// URL the video element can play directly.
    pub video_url: String,

    /// Artifact path on disk, for user retrieval.
    pub artifact: String,

    /// Combined stdout/stderr of the inference program.
    pub logs: String,
}
