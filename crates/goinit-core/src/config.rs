use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// User configuration loaded from `~/.config/go-init/config.toml`.
///
/// All fields have defaults so the config file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host prefix of the default module path (`<host>/<identity>/<name>`).
    #[serde(default = "default_module_host")]
    pub module_host: String,
    /// Identity used when git has no email and the prompt is left blank.
    #[serde(default = "default_identity")]
    pub default_identity: String,
    #[serde(default = "default_go_command")]
    pub go_command: String,
    /// Version shown in the README when the installed Go cannot be queried.
    #[serde(default = "default_min_go_version")]
    pub min_go_version: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_module_host() -> String {
    "github.com".to_string()
}

fn default_identity() -> String {
    "github-user".to_string()
}

fn default_go_command() -> String {
    "go".to_string()
}

fn default_min_go_version() -> String {
    "1.21".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_host: default_module_host(),
            default_identity: default_identity(),
            go_command: default_go_command(),
            min_go_version: default_min_go_version(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ScaffoldError> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| ScaffoldError::Config(format!("{}: {e}", path.display())))?;
                Self::parse(&content)
                    .map_err(|e| ScaffoldError::Config(format!("{}: {e}", path.display())))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "go-init").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.module_host, "github.com");
        assert_eq!(config.default_identity, "github-user");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("module_host = \"gitlab.com\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.module_host, "gitlab.com");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.min_go_version, "1.21");
        assert_eq!(config.go_command, "go");
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Config::parse("module_host = 3\n").is_err());
    }
}
