/// Inference program flag contracts
///
/// `inference.py` has shipped with two mutually incompatible flag
/// vocabularies (`--config`/`--fps`/`--steps` writing a single file vs
/// `--pipeline_config`/`--frame_rate` populating a directory). Each known
/// vocabulary gets its own `InferenceInvoker` implementation, selected
/// explicitly by version; the vocabularies are never merged.
pub mod output_dir;
pub mod single_file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use output_dir::OutputDirInvoker;
pub use single_file::SingleFileInvoker;

use crate::job::JobId;
use crate::request::GenerationRequest;

/// Known contract versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractVersion {
    /// `--config`, `--fps`, `--steps`; `--output_path` names one mp4 file.
    SingleFile,
    /// `--pipeline_config`, `--frame_rate`, no steps flag; `--output_path`
    /// names a directory the program fills.
    OutputDir,
}

impl std::fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleFile => write!(f, "single-file"),
            Self::OutputDir => write!(f, "output-dir"),
        }
    }
}

impl ContractVersion {
    /// Instantiate the invoker for this contract.
    pub fn create(self) -> Box<dyn InferenceInvoker> {
        match self {
            Self::SingleFile => Box::new(SingleFileInvoker),
            Self::OutputDir => Box::new(OutputDirInvoker),
        }
    }
}

/// Where a job's output lands, per the active contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocation {
    /// The program writes exactly this file.
    File(PathBuf),
    /// The program populates this directory.
    Directory(PathBuf),
}

impl OutputLocation {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }

    /// Create the directories the program expects to exist before launch.
    pub fn prepare(&self) -> std::io::Result<()> {
        match self {
            Self::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(())
            }
            Self::Directory(dir) => std::fs::create_dir_all(dir),
        }
    }
}

/// One `inference.py` flag vocabulary.
pub trait InferenceInvoker: Send + Sync {
    /// Contract name for logs.
    fn name(&self) -> &str;

    fn version(&self) -> ContractVersion;

    /// Derive the unique output location for a job.
    fn output_location(&self, output_root: &Path, model: &str, job: &JobId) -> OutputLocation;

    /// Translate the request into the program's argument list. Every request
    /// field appears as a flag-value pair; numeric fields are rendered as
    /// integers.
    fn build_args(
        &self,
        config_path: &Path,
        request: &GenerationRequest,
        location: &OutputLocation,
        offload_to_cpu: bool,
    ) -> Vec<String>;
}
