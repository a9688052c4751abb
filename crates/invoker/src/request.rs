/// Generation request
///
/// One coherent set of form values per trigger. Numeric fields are kept as
/// `f64` because browsers post JSON numbers that may carry a fractional
/// representation (`768.0`); they are coerced to integers when the command
/// line is built.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier (one of the registered checkpoints)
    pub model: String,

    /// Prompt text
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Negative prompt text (may be empty)
    #[serde(default = "default_negative_prompt")]
    pub negative_prompt: String,

    /// Output width in pixels
    #[serde(default = "default_width")]
    pub width: f64,

    /// Output height in pixels
    #[serde(default = "default_height")]
    pub height: f64,

    /// Number of frames to generate
    #[serde(default = "default_num_frames")]
    pub num_frames: f64,

    /// Playback frame rate
    #[serde(default = "default_fps")]
    pub fps: f64,

    /// Sampling seed
    #[serde(default = "default_seed")]
    pub seed: f64,

    /// Diffusion step count
    #[serde(default = "default_steps")]
    pub steps: f64,
}

fn default_prompt() -> String {
    "A cinematic shot of a cat walking in the rain, ultra realistic.".to_string()
}

fn default_negative_prompt() -> String {
    "blurry, low quality".to_string()
}

fn default_width() -> f64 {
    768.0
}

fn default_height() -> f64 {
    512.0
}

fn default_num_frames() -> f64 {
    97.0
}

fn default_fps() -> f64 {
    24.0
}

fn default_seed() -> f64 {
    42.0
}

fn default_steps() -> f64 {
    30.0
}

impl GenerationRequest {
    /// Request with the form's default values for a given model.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: default_prompt(),
            negative_prompt: default_negative_prompt(),
            width: default_width(),
            height: default_height(),
            num_frames: default_num_frames(),
            fps: default_fps(),
            seed: default_seed(),
            steps: default_steps(),
        }
    }
}
