//! # RHTMX Flat Routes
//!
//! Compiles a directory of flat route files into a nested route manifest.
//! File *names* carry the routing information:
//!
//! - Nesting with `.` (`users.settings.tsx` → child of `users`)
//! - Dynamic parameters (`users.$id.tsx` → `users/:id`)
//! - Splats (`files.$.tsx` → `files/*`)
//! - Optional segments (`($lang).about.tsx` → `:lang?/about`)
//! - Escaping (`[sitemap.xml].tsx` → `sitemap.xml`)
//! - Pathless layouts (`_auth.tsx`, `_auth.login.tsx` → `login`)
//! - Index routes (`users._index.tsx`)
//! - Layout opt-out (`users_.$id.edit.tsx` → `users/:id/edit`, outside `users`)
//! - Folder routes (`users/route.tsx` or `users/index.tsx`)
//!
//! ## Pure / impure split
//!
//! - [`build_manifest`] takes an already-listed set of files and never
//!   touches the disk. It is the main testing surface.
//! - [`scan_routes`] lists the routes directory, then calls the same core.
//!
//! ## Conflicts
//!
//! Two files producing the same route id, or two routes producing the same
//! URL, are not errors. The file that sorts first wins and the others are
//! reported through [`Diagnostics`] (by default as `tracing` warnings).
//!
//! ## Example
//!
//! ```
//! use rhtmx_flat_routes::build_manifest;
//!
//! let manifest = build_manifest(
//!     "app/routes",
//!     &[
//!         "app/routes/_index.tsx",
//!         "app/routes/users.tsx",
//!         "app/routes/users.$id.tsx",
//!         "app/routes/users._index.tsx",
//!     ],
//! )
//! .unwrap();
//!
//! let user = manifest.get("users.$id").unwrap();
//! assert_eq!(user.parent_id.as_deref(), Some("users"));
//! assert_eq!(user.path.as_deref(), Some(":id"));
//! assert_eq!(manifest.get("users._index").unwrap().index, Some(true));
//! ```

use std::path::Path;

// ============================================================================
// Module Declarations
// ============================================================================

mod builder;
mod collate;
mod config;
mod conflict;
mod error;
mod manifest;
pub mod path;
pub mod route;
pub mod scan;
mod trie;

pub use builder::ManifestBuilder;
pub use collate::RouteCollator;
pub use config::FlatRoutesConfig;
pub use conflict::{CollectedDiagnostics, Conflict, Diagnostics, TracingDiagnostics};
pub use error::{Result, RouteError};
pub use manifest::{ConfigRoute, RouteManifest};
pub use scan::{DirectoryScanner, IgnorePatterns, RouteFs, StdFs, ROUTE_MODULE_EXTENSIONS};
pub use trie::PrefixTrie;

// ============================================================================
// Entry Points
// ============================================================================

/// Builds a manifest from a list of route files under `routes_root`
///
/// Conflicts are logged with `tracing::warn!`. Use [`ManifestBuilder`] with
/// your own [`Diagnostics`] to inspect them instead.
pub fn build_manifest<I>(routes_root: &str, files: I) -> Result<RouteManifest>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ManifestBuilder::new().build(routes_root, files, &mut TracingDiagnostics)
}

/// Scans `routes_dir` and builds its manifest
///
/// `ignore_patterns` are globs relative to `routes_dir`; dot files are
/// always ignored.
pub fn scan_routes<P, I, S>(routes_dir: P, ignore_patterns: I) -> Result<RouteManifest>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FlatRoutes::new()
        .ignore(ignore_patterns)
        .scan(routes_dir.as_ref(), &mut TracingDiagnostics)
}

/// Configurable scan-and-build pipeline
///
/// ```no_run
/// use rhtmx_flat_routes::{CollectedDiagnostics, FlatRoutes, FlatRoutesConfig};
///
/// let config = FlatRoutesConfig::load_default().unwrap();
/// let mut diagnostics = CollectedDiagnostics::new();
/// let manifest = FlatRoutes::from_config(&config)
///     .scan(config.dir.as_ref(), &mut diagnostics)
///     .unwrap();
/// println!("{} routes, {} conflicts", manifest.len(), diagnostics.conflicts.len());
/// ```
#[derive(Debug, Clone)]
pub struct FlatRoutes<F: RouteFs = StdFs> {
    fs: F,
    ignored: Vec<String>,
    extensions: Vec<String>,
    builder: ManifestBuilder,
}

impl FlatRoutes<StdFs> {
    pub fn new() -> Self {
        Self::with_fs(StdFs)
    }

    pub fn from_config(config: &FlatRoutesConfig) -> Self {
        Self::new()
            .ignore(&config.ignored_route_files)
            .extensions(&config.extensions)
    }
}

impl Default for FlatRoutes<StdFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RouteFs> FlatRoutes<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            ignored: Vec::new(),
            extensions: ROUTE_MODULE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            builder: ManifestBuilder::new(),
        }
    }

    /// Adds ignore globs
    pub fn ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored
            .extend(patterns.into_iter().map(|p| p.as_ref().to_string()));
        self
    }

    /// Replaces the folder module extensions
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().to_string())
            .collect();
        self
    }

    /// Route module files of `routes_dir`, in collated order
    pub fn list_files<D>(&self, routes_dir: &Path, diagnostics: &mut D) -> Result<Vec<String>>
    where
        D: Diagnostics + ?Sized,
    {
        let ignore = IgnorePatterns::new(&self.ignored)?;
        let mut files = DirectoryScanner::with_fs(&self.fs, ignore)
            .extensions(&self.extensions)
            .scan(routes_dir, diagnostics)?;
        RouteCollator::new().sort(&mut files);
        Ok(files)
    }

    /// Scans `routes_dir` and builds the manifest
    pub fn scan<D>(&self, routes_dir: &Path, diagnostics: &mut D) -> Result<RouteManifest>
    where
        D: Diagnostics + ?Sized,
    {
        let files = self.list_files(routes_dir, diagnostics)?;
        let root = routes_dir.to_string_lossy();
        self.builder.build(&root, files, diagnostics)
    }
}
