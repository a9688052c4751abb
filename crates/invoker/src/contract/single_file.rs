/// Single-file contract (pinned default)
///
/// The vocabulary the 0.9.8 checkpoints document: `--config` takes the
/// pipeline yaml, `--output_path` names the one mp4 the program writes,
/// frame rate is `--fps`, step count is `--steps`, and the offload toggle is
/// a bare `--offload_to_cpu` flag.
use std::path::Path;

use super::{ContractVersion, InferenceInvoker, OutputLocation};
use crate::job::JobId;
use crate::request::GenerationRequest;

pub struct SingleFileInvoker;

impl InferenceInvoker for SingleFileInvoker {
    fn name(&self) -> &str {
        "single-file"
    }

    fn version(&self) -> ContractVersion {
        ContractVersion::SingleFile
    }

    fn output_location(&self, output_root: &Path, model: &str, job: &JobId) -> OutputLocation {
        OutputLocation::File(output_root.join(format!("{}_{}.mp4", model, job)))
    }

    fn build_args(
        &self,
        config_path: &Path,
        request: &GenerationRequest,
        location: &OutputLocation,
        offload_to_cpu: bool,
    ) -> Vec<String> {
        let mut args = vec![
            "--config".to_string(),
            config_path.to_string_lossy().into_owned(),
            "--prompt".to_string(),
            request.prompt.clone(),
            "--negative_prompt".to_string(),
            request.negative_prompt.clone(),
            "--width".to_string(),
            (request.width as i64).to_string(),
            "--height".to_string(),
            (request.height as i64).to_string(),
            "--num_frames".to_string(),
            (request.num_frames as i64).to_string(),
            "--fps".to_string(),
            (request.fps as i64).to_string(),
            "--seed".to_string(),
            (request.seed as i64).to_string(),
            "--steps".to_string(),
            (request.steps as i64).to_string(),
            "--output_path".to_string(),
            location.path().to_string_lossy().into_owned(),
        ];
        if offload_to_cpu {
            args.push("--offload_to_cpu".to_string());
        }
        args
    }
}
