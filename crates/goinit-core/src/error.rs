use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors produced while scaffolding a project.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("please provide a project name\nUsage: go-init <project-name> [--rest-api]")]
    MissingProjectName,

    #[error("the directory \"{}\" already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("failed to run `{tool}`: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailed { tool: String, status: ExitStatus },

    #[error("git error: {0}")]
    Git(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
