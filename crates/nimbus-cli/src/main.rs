mod commands;
mod defaults;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nimbus", about = "INMET satellite animation client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a day of imagery and write an animated GIF
    Animate(commands::animate::AnimateArgs),
    /// List the areas available for a satellite
    Areas(commands::areas::AreasArgs),
    /// List the parameters available for a satellite and area
    Params(commands::params::ParamsArgs),
    /// List the hours with imagery for a selection and date
    Hours(commands::hours::HoursArgs),
    /// Print or save a default settings file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Animate(args) => commands::animate::run(args),
        Commands::Areas(args) => commands::areas::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Hours(args) => commands::hours::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
