//! End-to-end Job Runner tests against a stub inference program.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use invoker::{ContractVersion, GenerationRequest, InvokeError, JobRunner, RunnerConfig};

/// Write an executable shell script standing in for `inference.py`.
/// Scripts receive the full flag vector; `--output_path` is bound to `$out`.
fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stub_inference.sh");
    let script = format!(
        "#!/bin/sh\nout=\"\"\nfor arg in \"$@\"; do\n  if [ \"$want_out\" = 1 ]; then out=\"$arg\"; want_out=0; fi\n  if [ \"$arg\" = \"--output_path\" ]; then want_out=1; fi\ndone\n{}\n",
        body
    );
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn runner_with_stub(
    work: &Path,
    contract: ContractVersion,
    stub_body: &str,
) -> JobRunner {
    let stub = write_stub(work, stub_body);
    let config = RunnerConfig::default()
        .with_program([stub.to_string_lossy().into_owned()])
        .with_output_root(work.join("outputs"))
        .with_contract(contract);
    JobRunner::new(config)
}

#[tokio::test]
async fn unknown_model_launches_no_subprocess() {
    let work = tempfile::tempdir().unwrap();
    // The stub leaves a marker if it ever runs.
    let runner = runner_with_stub(
        work.path(),
        ContractVersion::SingleFile,
        ": > \"$(dirname \"$0\")/ran.marker\"",
    );

    let request = GenerationRequest::for_model("not-a-registered-model");
    let err = runner.generate(&request).await.unwrap_err();

    assert!(matches!(err, InvokeError::UnknownModel(_)));
    assert!(!work.path().join("ran.marker").exists());
}

#[tokio::test]
async fn single_file_success_returns_expected_path_and_logs() {
    let work = tempfile::tempdir().unwrap();
    let runner = runner_with_stub(
        work.path(),
        ContractVersion::SingleFile,
        "echo \"loading model\"\necho \"sampling\" 1>&2\n: > \"$out\"",
    );

    let request = GenerationRequest::for_model("ltxv-13b-0.9.8-distilled");
    let outcome = runner.generate(&request).await.unwrap();

    assert_eq!(outcome.artifact.extension().unwrap(), "mp4");
    assert!(outcome.artifact.starts_with(work.path().join("outputs")));
    assert!(outcome.artifact.is_file());
    let name = outcome.artifact.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("ltxv-13b-0.9.8-distilled_"));
    // Nothing from either stream is dropped.
    assert!(outcome.logs.contains("loading model"));
    assert!(outcome.logs.contains("sampling"));
}

#[tokio::test]
async fn argv_carries_every_field_integer_coerced() {
    let work = tempfile::tempdir().unwrap();
    // Echo the argv into the logs, then succeed.
    let runner = runner_with_stub(
        work.path(),
        ContractVersion::SingleFile,
        "echo \"$@\"\n: > \"$out\"",
    );

    let mut request = GenerationRequest::for_model("ltxv-2b-0.9.8-distilled-fp8");
    request.prompt = "a cat in the rain".to_string();
    request.width = 640.0;
    request.height = 384.0;
    request.num_frames = 49.0;
    request.fps = 24.0;
    request.seed = 42.0;

    let outcome = runner.generate(&request).await.unwrap();
    for pair in [
        "--config configs/ltxv-2b-0.9.8-distilled-fp8.yaml",
        "--prompt a cat in the rain",
        "--width 640",
        "--height 384",
        "--num_frames 49",
        "--fps 24",
        "--seed 42",
        "--steps 30",
    ] {
        assert!(outcome.logs.contains(pair), "argv missing {:?}: {}", pair, outcome.logs);
    }
}

#[tokio::test]
async fn nonzero_exit_surfaces_full_stderr() {
    let work = tempfile::tempdir().unwrap();
    let runner = runner_with_stub(
        work.path(),
        ContractVersion::SingleFile,
        "echo \"CUDA out of memory\" 1>&2\nexit 1",
    );

    let request = GenerationRequest::for_model("ltxv-13b-0.9.8-distilled-fp8");
    match runner.generate(&request).await {
        Err(InvokeError::InferenceFailed { status, logs }) => {
            assert_eq!(status, Some(1));
            assert!(logs.contains("CUDA out of memory"));
        }
        other => panic!("expected InferenceFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn offload_toggle_reaches_the_program() {
    let work = tempfile::tempdir().unwrap();
    let stub = write_stub(work.path(), "echo \"$@\"\n: > \"$out\"");
    let config = RunnerConfig::default()
        .with_program([stub.to_string_lossy().into_owned()])
        .with_output_root(work.path().join("outputs"))
        .with_offload(true);
    let runner = JobRunner::new(config);

    let request = GenerationRequest::for_model("ltxv-13b-0.9.8-distilled");
    let outcome = runner.generate(&request).await.unwrap();
    assert!(outcome.logs.contains("--offload_to_cpu"));
}

#[tokio::test]
async fn output_dir_contract_picks_latest_mp4() {
    let work = tempfile::tempdir().unwrap();
    // Two clips; clip_001 is backdated so clip_002 is the newest.
    let runner = runner_with_stub(
        work.path(),
        ContractVersion::OutputDir,
        ": > \"$out/clip_001.mp4\"\n: > \"$out/clip_002.mp4\"\ntouch -m -t 202001010000 \"$out/clip_001.mp4\"",
    );

    let request = GenerationRequest::for_model("ltxv-2b-0.9.8-distilled-fp8");
    let outcome = runner.generate(&request).await.unwrap();
    assert_eq!(
        outcome.artifact.file_name().unwrap().to_string_lossy(),
        "clip_002.mp4"
    );
}

#[tokio::test]
async fn output_dir_empty_after_success_is_artifact_missing() {
    let work = tempfile::tempdir().unwrap();
    let runner = runner_with_stub(work.path(), ContractVersion::OutputDir, "exit 0");

    let request = GenerationRequest::for_model("ltxv-13b-0.9.8-distilled");
    match runner.generate(&request).await {
        Err(InvokeError::ArtifactMissing { location }) => {
            assert!(location.starts_with(work.path().join("outputs")));
        }
        other => panic!("expected ArtifactMissing, got {:?}", other),
    }
}
