//! Command line interface.

pub mod commands;

use clap::{Parser, Subcommand};

/// ShowerForge CLI
#[derive(Parser)]
#[command(name = "showerforge")]
#[command(about = "Camera-aware deep-learning event reconstruction for telescope arrays")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "showerforge.toml")]
    pub config: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Check the configuration and the configured model files
    Validate,
    /// Load every configured model and print its declared schema
    Inspect {
        /// Emit schemas as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
