use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::identity::{default_module_name, resolve_identity, resolve_module_name};
use crate::layout;
use crate::prompt::Prompter;
use crate::request::{Blueprint, ScaffoldRequest};
use crate::templates::{self, GeneratedFile};
use crate::toolchain::Toolchain;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub blueprint: Blueprint,
    /// Directories created, relative to the project root.
    pub directories: Vec<String>,
    /// Files written by the scaffolder itself (not by the toolchain).
    pub files: Vec<String>,
    /// Failures of optional steps that did not stop the run.
    pub warnings: Vec<String>,
}

/// Fail if anything at all exists at `path`, including a dangling symlink.
pub fn ensure_target_free(path: &Path) -> Result<(), ScaffoldError> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Err(ScaffoldError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScaffoldError::Io(e)),
    }
}

/// Generate the project described by `request`.
///
/// Steps run strictly in order and the first fatal error aborts the run,
/// leaving whatever was already written on disk.
pub fn scaffold(
    request: &ScaffoldRequest,
    config: &Config,
    toolchain: &dyn Toolchain,
    prompter: &mut dyn Prompter,
) -> Result<ScaffoldReport, ScaffoldError> {
    let root = request.project_dir.as_path();
    tracing::debug!(project = %request.project_name, mode = %request.mode, "scaffolding");
    ensure_target_free(root)?;

    let email = toolchain.git_email();
    let identity = resolve_identity(email.as_deref(), prompter, &config.default_identity)?;
    tracing::debug!(%identity, "resolved identity");

    tracing::info!("Creating project directory: {}...", request.project_name);
    std::fs::create_dir_all(root).map_err(|source| ScaffoldError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;

    tracing::info!("Initializing Go module...");
    let default_module =
        default_module_name(&config.module_host, &identity, &request.project_name);
    let module_name = resolve_module_name(prompter, &default_module)?;
    toolchain.init_module(root, &module_name)?;

    let blueprint = Blueprint {
        project_name: request.project_name.clone(),
        identity,
        module_name,
        go_version: toolchain
            .go_version()
            .unwrap_or_else(|| config.min_go_version.clone()),
        mode: request.mode,
    };

    tracing::info!("Creating standard Go project structure...");
    let directories = layout::directories(&request.project_name, request.mode);
    layout::create_directories(root, &directories)?;

    let mut files = Vec::new();
    let mut warnings = Vec::new();

    if blueprint.is_rest_api() {
        tracing::info!("Creating REST API files...");
    }
    for file in templates::source_files(&blueprint) {
        write_file(root, &file)?;
        files.push(file.path);
    }

    if blueprint.is_rest_api()
        && let Err(e) = toolchain.fetch_dependency(root, templates::ROUTER_MODULE)
    {
        let warning = format!("unable to add {} dependency: {e}", templates::ROUTER_MODULE);
        tracing::warn!("Warning: {warning}");
        warnings.push(warning);
    }

    for file in templates::project_files(&blueprint) {
        write_file(root, &file)?;
        files.push(file.path);
    }

    tracing::info!("Initializing Git repository...");
    if let Err(e) = toolchain.init_repository(root) {
        let warning = format!("unable to initialize git repository: {e}");
        tracing::warn!("Warning: {warning}");
        warnings.push(warning);
    }

    Ok(ScaffoldReport {
        project_dir: root.to_path_buf(),
        blueprint,
        directories,
        files,
        warnings,
    })
}

fn write_file(root: &Path, file: &GeneratedFile) -> Result<(), ScaffoldError> {
    tracing::info!("Creating {}...", file.path);
    let path = layout::resolve(root, &file.path);
    std::fs::write(&path, &file.contents).map_err(|source| ScaffoldError::WriteFile { path, source })
}
