use std::path::PathBuf;
use thiserror::Error;

/// Job Runner failure taxonomy. All variants are terminal for the current
/// job; nothing is retried or downgraded.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Requested model is not one of the registered checkpoints.
    /// Raised before any subprocess is launched.
    #[error("unsupported model: {0}")]
    UnknownModel(String),

    /// Inference program binary could not be resolved on PATH.
    #[error("inference program not found: {0}")]
    ProgramMissing(String),

    /// The child process could not be launched.
    #[error("failed to launch inference program: {0}")]
    Spawn(std::io::Error),

    /// The program exited non-zero. Carries the complete combined
    /// stdout/stderr text.
    #[error("inference failed (exit status {status:?}):\n{logs}")]
    InferenceFailed { status: Option<i32>, logs: String },

    /// The program exited zero but left no discoverable output.
    #[error("inference reported success but produced no video at {}", .location.display())]
    ArtifactMissing { location: PathBuf },

    /// Filesystem preparation failed (output root creation etc).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
