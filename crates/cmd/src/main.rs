use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "press", version, about = "Static marketing-page generator", long_about = None)]
struct Cli {
    /// Path to the site configuration file
    #[arg(short, long, default_value = "site.yaml")]
    site: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the complete static site
    Build {
        /// Output directory for generated files
        #[arg(default_value = "dist")]
        output_dir: PathBuf,
    },
    /// Validate content records without writing output
    Check,
    /// List content records
    List,
}

fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build { output_dir } => commands::build_command(&cli.site, &output_dir),
        Commands::Check => commands::check_command(&cli.site),
        Commands::List => commands::list_command(&cli.site),
    }
}
