/// Artifact discovery
///
/// After a zero exit the produced video has to be located. The single-file
/// contract names the file up front; the output-directory contract requires
/// a scan. The scan prefers `.mp4` entries and picks the most recently
/// modified; if no mp4 exists it falls back to the newest file of any
/// extension. The fallback is a heuristic inherited from the program's
/// unspecified output naming: if unrelated files land in the directory the
/// pick is arbitrary.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::contract::OutputLocation;
use crate::error::InvokeError;

/// Locate the artifact for a finished job, or fail with `ArtifactMissing`.
pub fn resolve(location: &OutputLocation) -> Result<PathBuf, InvokeError> {
    let missing = || InvokeError::ArtifactMissing {
        location: location.path().to_path_buf(),
    };
    match location {
        OutputLocation::File(path) => {
            if path.is_file() {
                Ok(path.clone())
            } else {
                Err(missing())
            }
        }
        OutputLocation::Directory(dir) => newest_video(dir).ok_or_else(missing),
    }
}

/// Newest mp4 in `dir`, else newest file of any extension, else None.
/// Non-recursive; subdirectories are ignored.
fn newest_video(dir: &Path) -> Option<PathBuf> {
    let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((entry.path(), modified));
    }

    let newest = |candidates: &[(PathBuf, SystemTime)]| {
        candidates
            .iter()
            .max_by_key(|(_, modified)| *modified)
            .map(|(path, _)| path.clone())
    };

    let mp4s: Vec<(PathBuf, SystemTime)> = files
        .iter()
        .filter(|(path, _)| is_mp4(path))
        .cloned()
        .collect();

    if !mp4s.is_empty() {
        newest(&mp4s)
    } else {
        newest(&files)
    }
}

fn is_mp4(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("mp4"))
        .unwrap_or(false)
}
