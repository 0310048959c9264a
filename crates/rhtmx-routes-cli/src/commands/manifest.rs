use anyhow::{Context, Result};
use rhtmx_flat_routes::TracingDiagnostics;
use std::path::Path;

use super::{prepare, ScanArgs};

pub fn execute(config_path: &Path, args: &ScanArgs, pretty: bool) -> Result<()> {
    let (dir, routes) = prepare(config_path, args)?;

    let manifest = routes
        .scan(&dir, &mut TracingDiagnostics)
        .with_context(|| format!("Failed to build routes from {}", dir.display()))?;

    let json = if pretty {
        manifest.to_json_pretty()?
    } else {
        serde_json::to_string(&manifest)?
    };
    println!("{json}");

    Ok(())
}
