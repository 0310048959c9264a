use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_flat_routes::CollectedDiagnostics;
use std::path::Path;

use super::{prepare, ScanArgs};

pub fn execute(config_path: &Path, args: &ScanArgs) -> Result<()> {
    let (dir, routes) = prepare(config_path, args)?;

    let mut diagnostics = CollectedDiagnostics::new();
    let manifest = routes
        .scan(&dir, &mut diagnostics)
        .with_context(|| format!("Failed to build routes from {}", dir.display()))?;

    if diagnostics.is_empty() {
        println!(
            "  {} {} routes, no conflicts",
            "✓".green(),
            manifest.len()
        );
        return Ok(());
    }

    for conflict in &diagnostics.conflicts {
        println!("{} {}", "⚠".yellow(), conflict);
        println!();
    }

    anyhow::bail!(
        "{} route conflict(s) in {}",
        diagnostics.conflicts.len(),
        dir.display()
    )
}
