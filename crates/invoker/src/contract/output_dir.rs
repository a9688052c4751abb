/// Output-directory contract
///
/// The newer pipeline vocabulary: `--pipeline_config` takes the yaml,
/// `--output_path` names a directory the program fills with whatever it
/// produces, frame rate is `--frame_rate`, there is no steps flag (the
/// pipeline config owns the schedule), and the offload toggle takes an
/// explicit boolean argument.
use std::path::Path;

use super::{ContractVersion, InferenceInvoker, OutputLocation};
use crate::job::JobId;
use crate::request::GenerationRequest;

pub struct OutputDirInvoker;

impl InferenceInvoker for OutputDirInvoker {
    fn name(&self) -> &str {
        "output-dir"
    }

    fn version(&self) -> ContractVersion {
        ContractVersion::OutputDir
    }

    fn output_location(&self, output_root: &Path, model: &str, job: &JobId) -> OutputLocation {
        OutputLocation::Directory(output_root.join(format!("{}_{}", model, job)))
    }

    fn build_args(
        &self,
        config_path: &Path,
        request: &GenerationRequest,
        location: &OutputLocation,
        offload_to_cpu: bool,
    ) -> Vec<String> {
        let mut args = vec![
            "--pipeline_config".to_string(),
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
            "--frame_rate".to_string(),
            (request.fps as i64).to_string(),
            "--seed".to_string(),
            (request.seed as i64).to_string(),
            "--output_path".to_string(),
            location.path().to_string_lossy().into_owned(),
        ];
        if offload_to_cpu {
            args.push("--offload_to_cpu".to_string());
            args.push("true".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn flag_value(args: &[String], flag: &str) -> Option<String> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    }

    #[test]
    fn output_location_is_directory() {
        let invoker = OutputDirInvoker;
        let job = JobId("deadbeef".to_string());
        let location =
            invoker.output_location(Path::new("outputs"), "ltxv-2b-0.9.8-distilled-fp8", &job);
        assert_eq!(
            location,
            OutputLocation::Directory(PathBuf::from("outputs/ltxv-2b-0.9.8-distilled-fp8_deadbeef"))
        );
    }

    #[test]
    fn uses_pipeline_vocabulary() {
        let invoker = OutputDirInvoker;
        let mut request = GenerationRequest::for_model("ltxv-2b-0.9.8-distilled-fp8");
        request.fps = 24.0;
        let location = OutputLocation::Directory(PathBuf::from("outputs/job"));

        let args = invoker.build_args(Path::new("c.yaml"), &request, &location, false);

        assert_eq!(flag_value(&args, "--pipeline_config").unwrap(), "c.yaml");
        assert_eq!(flag_value(&args, "--frame_rate").unwrap(), "24");
        assert_eq!(flag_value(&args, "--output_path").unwrap(), "outputs/job");
        assert!(!args.contains(&"--fps".to_string()));
        assert!(!args.contains(&"--config".to_string()));
        assert!(!args.contains(&"--steps".to_string()));
    }

    #[test]
    fn offload_takes_boolean_argument() {
        let invoker = OutputDirInvoker;
        let request = GenerationRequest::for_model("ltxv-2b-0.9.8-distilled-fp8");
        let location = OutputLocation::Directory(PathBuf::from("outputs/job"));

        let args = invoker.build_args(Path::new("c.yaml"), &request, &location, true);
        let n = args.len();
        assert_eq!(&args[n - 2..], ["--offload_to_cpu", "true"]);
    }
}
