/// Job identity
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Short per-invocation token used to derive a unique output location.
/// Collision-safe within a running instance; outputs are keyed as
/// `{model}_{token}` under the output root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new 8-hex-char token.
    pub fn new() -> Self {
        use sha2::{Digest, Sha256};

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let input = format!("{}-{}", now, rand::random::<u64>());
        let hash = Sha256::digest(input.as_bytes());
        Self(hex::encode(&hash[..4]))
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
