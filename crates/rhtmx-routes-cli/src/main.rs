mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::ScanArgs;

#[derive(Parser)]
#[command(name = "rhtmx-routes")]
#[command(version, about = "RHTMX flat routes - compile a routes folder into a route manifest", long_about = None)]
struct Cli {
    /// Config file holding the [routes] table
    #[arg(long, global = true, default_value = "rhtmx.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route manifest as JSON
    Manifest {
        #[command(flatten)]
        scan: ScanArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the route hierarchy
    Tree {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Report route conflicts; exits non-zero if there are any
    Check {
        #[command(flatten)]
        scan: ScanArgs,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so `manifest` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Manifest { scan, pretty } => {
            commands::manifest::execute(&cli.config, &scan, pretty)?;
        }
        Commands::Tree { scan } => {
            commands::tree::execute(&cli.config, &scan)?;
        }
        Commands::Check { scan } => {
            commands::check::execute(&cli.config, &scan)?;
        }
    }

    Ok(())
}
