use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::request::Mode;

const STANDARD_DIRS: &[&str] = &["configs", "test"];

const REST_API_DIRS: &[&str] = &[
    "api",
    "api/handlers",
    "api/middleware",
    "api/routes",
    "web",
    "web/templates",
    "web/static",
    "web/static/css",
    "web/static/js",
    "internal/models",
    "internal/database",
    "configs",
    "test",
];

/// Relative directories (with `/` separators) created for `mode`, in creation order.
pub fn directories(project_name: &str, mode: Mode) -> Vec<String> {
    let mut dirs = vec![
        format!("cmd/{project_name}"),
        "internal".to_string(),
        "pkg".to_string(),
    ];
    let extra = match mode {
        Mode::Standard => STANDARD_DIRS,
        Mode::RestApi => REST_API_DIRS,
    };
    dirs.extend(extra.iter().map(|d| d.to_string()));
    dirs
}

/// Resolve a `/`-separated relative path under `root`.
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Create every directory in order, stopping at the first failure.
///
/// Directories created before the failure are left in place.
pub fn create_directories(root: &Path, dirs: &[String]) -> Result<(), ScaffoldError> {
    for dir in dirs {
        let path = resolve(root, dir);
        tracing::debug!(path = %path.display(), "creating directory");
        std::fs::create_dir_all(&path).map_err(|source| ScaffoldError::CreateDir { path, source })?;
    }
    Ok(())
}
