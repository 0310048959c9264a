// File: src/config.rs
// Purpose: Flat routes configuration from the [routes] table of rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::scan::ROUTE_MODULE_EXTENSIONS;

/// Top-level file layout; only the `[routes]` table is read
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    routes: FlatRoutesConfig,
}

/// Routing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRoutesConfig {
    /// Directory containing route modules (default: "app/routes")
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Extra globs for files that are not routes; dot files are always ignored
    #[serde(default)]
    pub ignored_route_files: Vec<String>,

    /// Extensions accepted for folder `route`/`index` modules
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_dir() -> String {
    "app/routes".to_string()
}

fn default_extensions() -> Vec<String> {
    ROUTE_MODULE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for FlatRoutesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            ignored_route_files: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

impl FlatRoutesConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.routes)
    }
}
