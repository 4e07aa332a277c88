//! Default mapping-table discovery.
//!
//! The default table ships next to the binary (or in a `data/` folder), so
//! discovery probes a small fixed list of directories in priority order and
//! takes the first hit.

use std::path::{Path, PathBuf};

/// Builds the ordered list of locations probed for a default mapping table:
/// the application directory, its `data/` subdirectory, the working
/// directory, and its `data/` subdirectory. Duplicate paths (the app dir is
/// often the working directory) keep their earliest position.
pub fn candidate_paths(app_dir: Option<&Path>, cwd: &Path, file_name: &str) -> Vec<PathBuf> {
    let mut directories: Vec<PathBuf> = Vec::new();
    if let Some(app_dir) = app_dir {
        directories.push(app_dir.to_path_buf());
        directories.push(app_dir.join("data"));
    }
    directories.push(cwd.to_path_buf());
    directories.push(cwd.join("data"));

    let mut candidates: Vec<PathBuf> = Vec::new();
    for directory in directories {
        let candidate = directory.join(file_name);
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Candidate paths for the running process: the executable's directory
/// first, then the current working directory.
pub fn default_candidates(file_name: &str) -> Vec<PathBuf> {
    let app_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    candidate_paths(app_dir.as_deref(), &cwd, file_name)
}

/// Returns the first candidate that exists as a regular file.
pub fn find_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
}
