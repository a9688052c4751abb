/// Runner configuration
///
/// Explicit configuration passed into the Job Runner at construction time.
/// The environment is read exactly once, in `from_env`; nothing else in the
/// crate touches env vars.
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::contract::ContractVersion;

/// `LTX_MODEL` — default model shown in the UI.
pub const ENV_DEFAULT_MODEL: &str = "LTX_MODEL";
/// `LTX_OFFLOAD=1` — pass the offload-to-CPU flag through to the program.
pub const ENV_OFFLOAD: &str = "LTX_OFFLOAD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Program argv prefix the request flags are appended to.
    pub program: Vec<String>,

    /// Root directory job outputs are placed under; created if absent.
    pub output_root: PathBuf,

    /// Directory the registry's relative config paths are resolved against.
    /// Empty means the working directory.
    pub config_root: PathBuf,

    /// Model preselected in the UI.
    pub default_model: String,

    /// Forward the offload-to-CPU flag to the program.
    pub offload_to_cpu: bool,

    /// Which `inference.py` flag contract to speak.
    pub contract: ContractVersion,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: vec!["python3".to_string(), "inference.py".to_string()],
            output_root: PathBuf::from("outputs"),
            config_root: PathBuf::new(),
            default_model: "ltxv-13b-0.9.8-distilled".to_string(),
            offload_to_cpu: false,
            contract: ContractVersion::SingleFile,
        }
    }
}

impl RunnerConfig {
    /// Defaults with the `LTX_MODEL` / `LTX_OFFLOAD` overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var(ENV_DEFAULT_MODEL) {
            if !model.is_empty() {
                config.default_model = model;
            }
        }
        config.offload_to_cpu = std::env::var(ENV_OFFLOAD).as_deref() == Ok("1");
        config
    }

    /// With a different program argv prefix.
    pub fn with_program<I, S>(mut self, program: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program = program.into_iter().map(Into::into).collect();
        self
    }

    /// With a different output root.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// With a different config root.
    pub fn with_config_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config_root = root.into();
        self
    }

    /// With a different default model.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// With the offload toggle set.
    pub fn with_offload(mut self, offload: bool) -> Self {
        self.offload_to_cpu = offload;
        self
    }

    /// With a specific flag contract.
    pub fn with_contract(mut self, contract: ContractVersion) -> Self {
        self.contract = contract;
        self
    }

    /// Save configuration to JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }
}
