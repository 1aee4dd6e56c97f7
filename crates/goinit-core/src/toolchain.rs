use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::ScaffoldError;

/// External tools the scaffolder depends on.
///
/// Required steps return errors; optional ones are downgraded to warnings by
/// the caller.
pub trait Toolchain {
    /// Configured git `user.email`, if any.
    fn git_email(&self) -> Option<String>;

    /// Installed Go version without the `go` prefix, e.g. `1.22.3`.
    fn go_version(&self) -> Option<String>;

    /// Create `go.mod` for `module` inside `dir`.
    fn init_module(&self, dir: &Path, module: &str) -> Result<(), ScaffoldError>;

    /// Add `module` as a dependency of the project in `dir`.
    fn fetch_dependency(&self, dir: &Path, module: &str) -> Result<(), ScaffoldError>;

    /// Create a git repository in `dir`.
    fn init_repository(&self, dir: &Path) -> Result<(), ScaffoldError>;
}

/// [`Toolchain`] backed by the installed `go` binary and git.
///
/// Subprocess output is passed straight through to the terminal.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    go: String,
    /// Where git config lookup starts; a repository around it contributes its local config.
    search_dir: PathBuf,
}

impl SystemToolchain {
    pub fn new(go_command: impl Into<String>) -> Self {
        Self {
            go: go_command.into(),
            search_dir: PathBuf::from("."),
        }
    }

    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.go_command.clone())
    }
}

impl Default for SystemToolchain {
    fn default() -> Self {
        Self::new("go")
    }
}

impl Toolchain for SystemToolchain {
    fn git_email(&self) -> Option<String> {
        read_git_email(&self.search_dir).filter(|email| !email.trim().is_empty())
    }

    fn go_version(&self) -> Option<String> {
        let output = Command::new(&self.go)
            .args(["env", "GOVERSION"])
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        parse_go_version(&String::from_utf8_lossy(&output.stdout))
    }

    fn init_module(&self, dir: &Path, module: &str) -> Result<(), ScaffoldError> {
        run_passthrough(&self.go, &["mod", "init", module], dir)
    }

    fn fetch_dependency(&self, dir: &Path, module: &str) -> Result<(), ScaffoldError> {
        run_passthrough(&self.go, &["get", module], dir)
    }

    fn init_repository(&self, dir: &Path) -> Result<(), ScaffoldError> {
        init_git_repository(dir)
    }
}

/// Strip the `go` prefix from `go env GOVERSION` output.
pub fn parse_go_version(raw: &str) -> Option<String> {
    let version = raw.trim();
    let version = version.strip_prefix("go").unwrap_or(version);
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

fn run_passthrough(program: &str, args: &[&str], dir: &Path) -> Result<(), ScaffoldError> {
    let tool = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(command = %tool, dir = %dir.display(), "running");

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|source| ScaffoldError::ToolSpawn {
            tool: tool.clone(),
            source,
        })?;

    if !status.success() {
        return Err(ScaffoldError::ToolFailed { tool, status });
    }
    Ok(())
}

/// Local repository config takes precedence over global and system config.
#[cfg(feature = "git2")]
fn read_git_email(search_dir: &Path) -> Option<String> {
    let config = match git2::Repository::discover(search_dir) {
        Ok(repo) => repo.config().ok()?,
        Err(_) => git2::Config::open_default().ok()?,
    };
    config.get_string("user.email").ok()
}

#[cfg(not(feature = "git2"))]
fn read_git_email(search_dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.email"])
        .current_dir(search_dir)
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(feature = "git2")]
fn init_git_repository(dir: &Path) -> Result<(), ScaffoldError> {
    let repo = git2::Repository::init(dir).map_err(|e| ScaffoldError::Git(Box::new(e)))?;
    tracing::info!("Initialized empty Git repository in {}", repo.path().display());
    Ok(())
}

#[cfg(not(feature = "git2"))]
fn init_git_repository(dir: &Path) -> Result<(), ScaffoldError> {
    run_passthrough("git", &["init"], dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_version_prefix_is_stripped() {
        assert_eq!(parse_go_version("go1.22.3\n").as_deref(), Some("1.22.3"));
        assert_eq!(parse_go_version("1.21").as_deref(), Some("1.21"));
        assert_eq!(parse_go_version("  \n"), None);
        assert_eq!(parse_go_version("go"), None);
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let toolchain = SystemToolchain::new("go-init-test-no-such-binary");

        let err = toolchain.init_module(tmp.path(), "example.org/x").unwrap_err();
        match err {
            ScaffoldError::ToolSpawn { tool, .. } => {
                assert_eq!(tool, "go-init-test-no-such-binary mod init example.org/x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(toolchain.go_version(), None);
    }

    #[cfg(feature = "git2")]
    #[test]
    fn repository_is_created_in_place() {
        let tmp = tempfile::TempDir::new().unwrap();
        SystemToolchain::default().init_repository(tmp.path()).unwrap();
        assert!(tmp.path().join(".git").is_dir());
    }

    #[cfg(feature = "git2")]
    #[test]
    fn repository_local_email_is_found_from_subdirectory() {
        let tmp = tempfile::TempDir::new().unwrap();
        git2::Repository::init(tmp.path()).unwrap();
        let mut local = std::fs::OpenOptions::new()
            .append(true)
            .open(tmp.path().join(".git").join("config"))
            .unwrap();
        std::io::Write::write_all(&mut local, b"[user]\n\temail = local@corp.example\n").unwrap();
        let nested = tmp.path().join("sub").join("dir");
        std::fs::create_dir_all(&nested).unwrap();

        let toolchain = SystemToolchain::default().with_search_dir(&nested);

        assert_eq!(toolchain.git_email().as_deref(), Some("local@corp.example"));
    }
}
