use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_flat_routes::{ConfigRoute, RouteManifest, TracingDiagnostics};
use std::fmt::Write;
use std::path::Path;

use super::{prepare, ScanArgs};

pub fn execute(config_path: &Path, args: &ScanArgs) -> Result<()> {
    let (dir, routes) = prepare(config_path, args)?;

    let manifest = routes
        .scan(&dir, &mut TracingDiagnostics)
        .with_context(|| format!("Failed to build routes from {}", dir.display()))?;

    println!("{}", dir.display().to_string().bold());
    print!("{}", render(&manifest));
    println!();
    println!("{} routes", manifest.len());

    Ok(())
}

/// Indented route hierarchy, one route per line
fn render(manifest: &RouteManifest) -> String {
    let mut out = String::new();
    for route in manifest.roots() {
        render_route(manifest, route, 1, &mut out);
    }
    out
}

fn render_route(manifest: &RouteManifest, route: &ConfigRoute, depth: usize, out: &mut String) {
    let url = manifest.full_path(&route.id).unwrap_or_else(|| "/".to_string());
    let mut line = format!("{}{}  {}", "  ".repeat(depth), route.id.bold(), url.cyan());
    if route.is_index() {
        line.push_str(&format!(" {}", "(index)".dimmed()));
    } else if route.path.is_none() {
        line.push_str(&format!(" {}", "(layout)".dimmed()));
    }
    let _ = writeln!(out, "{line}  {}", route.file.dimmed());

    for child in manifest.children(&route.id) {
        render_route(manifest, child, depth + 1, out);
    }
}
