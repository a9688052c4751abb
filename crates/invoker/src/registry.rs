/// Model registry
///
/// Fixed mapping from model identifier to pipeline configuration file.
/// Only the three supported LTX-Video checkpoints are registered; anything
/// else is rejected before a subprocess is launched.
use std::path::{Path, PathBuf};

/// Immutable model-to-config mapping, enumerated in declaration order.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<(String, PathBuf)>,
}

impl ModelRegistry {
    /// The three supported checkpoints.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "ltxv-13b-0.9.8-distilled",
                "configs/ltxv-13b-0.9.8-distilled.yaml",
            ),
            (
                "ltxv-13b-0.9.8-distilled-fp8",
                "configs/ltxv-13b-0.9.8-distilled-fp8.yaml",
            ),
            (
                "ltxv-2b-0.9.8-distilled-fp8",
                "configs/ltxv-2b-0.9.8-distilled-fp8.yaml",
            ),
        ])
    }

    /// Build a registry from (model id, config path) pairs.
    pub fn from_entries<I, M, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (M, P)>,
        M: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(m, p)| (m.into(), p.into()))
                .collect(),
        }
    }

    /// Config path for a model identifier, if registered.
    pub fn config_path(&self, model: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(id, _)| id == model)
            .map(|(_, path)| path.as_path())
    }

    pub fn contains(&self, model: &str) -> bool {
        self.config_path(model).is_some()
    }

    /// Model identifiers in registration order (drives the UI dropdown).
    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
