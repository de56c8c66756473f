use clap::Parser;
use showerforge::cli::{Cli, Command};
use showerforge::config::Config;
use showerforge::utils::logging;
use showerforge::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)?;
    logging::init_logging(&config.logging)?;

    match cli.command {
        Command::Validate => showerforge::cli::commands::validate(&config)?,
        Command::Inspect { json } => showerforge::cli::commands::inspect(&config, json)?,
    }

    Ok(())
}
