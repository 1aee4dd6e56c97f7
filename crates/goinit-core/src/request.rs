use std::path::{Path, PathBuf};

/// Layout flavour of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Standard,
    RestApi,
}

impl Mode {
    pub fn is_rest_api(self) -> bool {
        self == Mode::RestApi
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::RestApi => write!(f, "REST API"),
        }
    }
}

/// Inputs of a single scaffold run, fixed once the arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub mode: Mode,
}

impl ScaffoldRequest {
    /// The project directory is `base_dir/project_name`; the name is used verbatim.
    pub fn new(project_name: impl Into<String>, base_dir: &Path, mode: Mode) -> Self {
        let project_name = project_name.into();
        let project_dir = base_dir.join(&project_name);
        Self {
            project_name,
            project_dir,
            mode,
        }
    }

    pub fn is_rest_api(&self) -> bool {
        self.mode.is_rest_api()
    }
}

/// Everything the templates substitute, resolved during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub project_name: String,
    pub identity: String,
    pub module_name: String,
    pub go_version: String,
    pub mode: Mode,
}

impl Blueprint {
    pub fn is_rest_api(&self) -> bool {
        self.mode.is_rest_api()
    }

    /// Entry point path relative to the project root, with `/` separators.
    pub fn entry_point(&self) -> String {
        format!("cmd/{}/main.go", self.project_name)
    }
}
