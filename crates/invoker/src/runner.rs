/// Job Runner
///
/// One synchronous child process per call: registry lookup, output location,
/// argv construction through the configured contract, execution with both
/// stdio streams captured, artifact resolution. No retries, no timeout, no
/// cancellation; the caller blocks until the program exits.
use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::artifacts;
use crate::config::RunnerConfig;
use crate::contract::InferenceInvoker;
use crate::error::InvokeError;
use crate::job::JobId;
use crate::registry::ModelRegistry;
use crate::request::GenerationRequest;

/// Successful generation: the located video plus everything the program
/// wrote to stdout and stderr.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub job: JobId,
    pub artifact: PathBuf,
    pub logs: String,
}

pub struct JobRunner {
    config: RunnerConfig,
    registry: ModelRegistry,
    invoker: Box<dyn InferenceInvoker>,
}

impl JobRunner {
    /// Runner over the builtin three-model registry.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_registry(config, ModelRegistry::builtin())
    }

    pub fn with_registry(config: RunnerConfig, registry: ModelRegistry) -> Self {
        let invoker = config.contract.create();
        Self {
            config,
            registry,
            invoker,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Run one generation to completion.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<JobOutcome, InvokeError> {
        let config_path = self
            .registry
            .config_path(&request.model)
            .ok_or_else(|| InvokeError::UnknownModel(request.model.clone()))?;
        let config_path = self.config.config_root.join(config_path);

        let job = JobId::new();
        let location = self
            .invoker
            .output_location(&self.config.output_root, &request.model, &job);
        location.prepare()?;

        let args = self
            .invoker
            .build_args(&config_path, request, &location, self.config.offload_to_cpu);
        let (program, prefix) = self.resolve_program()?;

        info!(
            job = %job,
            model = %request.model,
            contract = %self.invoker.name(),
            "launching inference program"
        );
        debug!(?args, "inference argv");

        let output = Command::new(&program)
            .args(prefix)
            .args(&args)
            .output()
            .await
            .map_err(InvokeError::Spawn)?;

        // Both streams, always, in this order; the UI surfaces them verbatim.
        let logs = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        if !output.status.success() {
            warn!(job = %job, status = ?output.status.code(), "inference program failed");
            return Err(InvokeError::InferenceFailed {
                status: output.status.code(),
                logs,
            });
        }

        let artifact = artifacts::resolve(&location)?;
        info!(job = %job, artifact = %artifact.display(), "inference complete");

        Ok(JobOutcome {
            job,
            artifact,
            logs,
        })
    }

    /// Resolve the program binary and split off the remaining argv prefix
    /// (e.g. `python3` + `["inference.py"]`).
    fn resolve_program(&self) -> Result<(PathBuf, &[String]), InvokeError> {
        let (first, rest) = self
            .config
            .program
            .split_first()
            .ok_or_else(|| InvokeError::ProgramMissing("<empty program>".to_string()))?;
        let binary =
            which::which(first).map_err(|_| InvokeError::ProgramMissing(first.clone()))?;
        Ok((binary, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ContractVersion;

    #[tokio::test]
    async fn unknown_model_fails_before_resolving_program() {
        // Program binary deliberately does not exist; an UnknownModel error
        // proves the registry check fires first.
        let config = RunnerConfig::default()
            .with_program(["definitely-not-a-real-binary-7f3a"])
            .with_contract(ContractVersion::SingleFile);
        let runner = JobRunner::new(config);

        let request = GenerationRequest::for_model("sdxl-turbo");
        match runner.generate(&request).await {
            Err(InvokeError::UnknownModel(model)) => assert_eq!(model, "sdxl-turbo"),
            other => panic!("expected UnknownModel, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_is_reported_by_name() {
        let out = tempfile::tempdir().unwrap();
        let config = RunnerConfig::default()
            .with_program(["definitely-not-a-real-binary-7f3a"])
            .with_output_root(out.path());
        let runner = JobRunner::new(config);

        let request = GenerationRequest::for_model("ltxv-13b-0.9.8-distilled");
        match runner.generate(&request).await {
            Err(InvokeError::ProgramMissing(name)) => {
                assert_eq!(name, "definitely-not-a-real-binary-7f3a")
            }
            other => panic!("expected ProgramMissing, got {:?}", other),
        }
    }
}
