pub mod check;
pub mod manifest;
pub mod tree;

use anyhow::{Context, Result};
use clap::Args;
use rhtmx_flat_routes::{FlatRoutes, FlatRoutesConfig};
use std::path::{Path, PathBuf};

/// Options shared by every command that scans a routes folder
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Routes directory (defaults to `dir` from the config file)
    pub dir: Option<PathBuf>,

    /// Extra glob of files to ignore, relative to the routes directory
    #[arg(short, long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,
}

/// Routes directory and pipeline for a command invocation
///
/// Command-line values are layered over the config file.
pub fn prepare(config_path: &Path, args: &ScanArgs) -> Result<(PathBuf, FlatRoutes)> {
    let config = FlatRoutesConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.dir));
    let routes = FlatRoutes::from_config(&config).ignore(&args.ignore);

    tracing::debug!(dir = %dir.display(), config = %config_path.display(), "scanning routes");
    Ok((dir, routes))
}
