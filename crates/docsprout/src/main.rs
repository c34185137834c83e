//! docsprout CLI - documentation site scaffolding.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::MetadataArgs;

#[derive(Parser)]
#[command(name = "docsprout")]
#[command(about = "Scaffold and preview a documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docsprout.toml config file
    #[arg(short, long, default_value = "docsprout.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold documentation unless the folder is already initialized
    Init {
        /// Documentation folder (defaults to config or "docs")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// Preview documentation with live reload on http://127.0.0.1:3000
    Serve {
        /// Documentation folder (defaults to config or "docs")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { dir, metadata } => {
            commands::init::run(&cli.config, dir, metadata).await?;
        }
        Commands::Serve { dir } => {
            commands::serve::run(&cli.config, dir).await?;
        }
    }

    Ok(())
}
