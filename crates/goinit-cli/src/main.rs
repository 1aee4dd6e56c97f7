mod cli;
mod input;
mod logging;

use cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_args(std::env::args_os());
    cli::run(cli)
}
