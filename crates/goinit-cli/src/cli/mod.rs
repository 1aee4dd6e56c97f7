pub mod args;

use colored::Colorize;

use goinit_core::config::Config;
use goinit_core::error::ScaffoldError;
use goinit_core::request::ScaffoldRequest;
use goinit_core::scaffold::{self, ScaffoldReport};
use goinit_core::summary;
use goinit_core::toolchain::SystemToolchain;

use self::args::Cli;

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let mode = cli.mode();
    let project_name = cli.project_name.ok_or(ScaffoldError::MissingProjectName)?;

    let config = Config::load()?;
    crate::logging::init(&config.log_level);

    println!("{}", format!("Go Project Initializer v{}", env!("CARGO_PKG_VERSION")).bold());
    println!("----------------------------");
    if mode.is_rest_api() {
        println!("{}", "REST API mode enabled".cyan());
    }

    let cwd = std::env::current_dir()?;
    let request = ScaffoldRequest::new(project_name, &cwd, mode);
    let toolchain = SystemToolchain::from_config(&config).with_search_dir(&cwd);
    let mut prompter = crate::input::stdin_prompter();

    let report = scaffold::scaffold(&request, &config, &toolchain, prompter.as_mut())?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ScaffoldReport) {
    let blueprint = &report.blueprint;

    println!();
    println!(
        "{} {}",
        "Successfully created Go project:".green().bold(),
        blueprint.project_name.bold()
    );
    println!();
    println!("Project structure:");
    print!("{}", summary::project_tree(blueprint));
    println!();
    print!("{}", summary::next_steps(blueprint));

    if !report.warnings.is_empty() {
        println!();
        println!("{}", "Completed with warnings:".yellow());
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    println!();
    println!("Happy coding!");
}
