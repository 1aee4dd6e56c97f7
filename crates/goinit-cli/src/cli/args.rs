use std::ffi::OsString;

use clap::Parser;
use goinit_core::request::Mode;

/// Token that switches the generated layout to a REST API project.
pub const REST_API_FLAG: &str = "--rest-api";

/// `go-init <project-name> [--rest-api]`
///
/// Anything after the project name other than `--rest-api` is ignored, so
/// clap's own help and version flags are disabled.
#[derive(Debug, Parser)]
#[command(
    name = "go-init",
    about = "Scaffold a new Go project",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Name of the project directory to create
    #[arg(allow_hyphen_values = true)]
    pub project_name: Option<String>,

    /// Remaining arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse `argv` (program name first), taking every token literally.
    ///
    /// clap reads a leading `--` as the end of options; it is doubled so the
    /// first `--` is consumed and the second becomes the project name.
    pub fn parse_args<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.get(1).is_some_and(|arg| arg == "--") {
            argv.insert(1, OsString::from("--"));
        }
        Self::parse_from(argv)
    }

    pub fn mode(&self) -> Mode {
        if self.rest.iter().any(|arg| arg == REST_API_FLAG) {
            Mode::RestApi
        } else {
            Mode::Standard
        }
    }
}
