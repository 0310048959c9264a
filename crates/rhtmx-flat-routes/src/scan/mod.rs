//! Routes directory scanning.
//!
//! Only the direct entries of the routes directory are considered:
//! - files become route modules unless ignored
//! - folders contribute their `route.*` (or, failing that, `index.*`) module

use std::path::Path;

use crate::conflict::{Conflict, Diagnostics};
use crate::error::Result;
use crate::path::normalize_slashes;
use crate::route::{create_route_path, parse_route_segments};

pub mod fs;
pub mod ignore;

pub use fs::{DirEntryInfo, EntryKind, RouteFs, StdFs};
pub use ignore::{IgnorePatterns, DEFAULT_IGNORE};

/// Extensions a folder's `route`/`index` module may use, in lookup order
pub const ROUTE_MODULE_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".md", ".mdx"];

/// Lists route module files under a routes directory
#[derive(Debug, Clone)]
pub struct DirectoryScanner<F: RouteFs = StdFs> {
    fs: F,
    ignore: IgnorePatterns,
    extensions: Vec<String>,
}

impl DirectoryScanner<StdFs> {
    /// Scanner over the real file system with the default extensions
    pub fn new(ignore: IgnorePatterns) -> Self {
        Self::with_fs(StdFs, ignore)
    }
}

impl<F: RouteFs> DirectoryScanner<F> {
    pub fn with_fs(fs: F, ignore: IgnorePatterns) -> Self {
        Self {
            fs,
            ignore,
            extensions: ROUTE_MODULE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replaces the folder module extension list (`.tsx`, `.rs`, ...)
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    /// Lists the route module files of `routes_dir`, `/`-separated
    ///
    /// Folders holding both `route.*` and `index.*` report a URL conflict
    /// and keep `route.*`. Folders with neither are skipped.
    ///
    /// # Errors
    ///
    /// File system errors reading `routes_dir` are returned unchanged.
    pub fn scan<D>(&self, routes_dir: &Path, diagnostics: &mut D) -> Result<Vec<String>>
    where
        D: Diagnostics + ?Sized,
    {
        let mut files = Vec::new();

        for entry in self.fs.read_dir(routes_dir)? {
            if self.ignore.is_ignored(&entry.name) {
                tracing::debug!(entry = %entry.name, "ignoring route entry");
                continue;
            }

            let path = routes_dir.join(&entry.name);
            let file = match entry.kind {
                EntryKind::File => Some(path),
                EntryKind::Dir => self.folder_module(&path, &entry.name, diagnostics)?,
                EntryKind::Other => None,
            };

            if let Some(file) = file {
                files.push(normalize_slashes(&file.to_string_lossy()).into_owned());
            }
        }

        Ok(files)
    }

    fn find_module(&self, dir: &Path, basename: &str) -> Option<std::path::PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{basename}{ext}")))
            .find(|candidate| self.fs.is_file(candidate))
    }

    /// The module representing a route folder
    fn folder_module<D>(
        &self,
        dir: &Path,
        name: &str,
        diagnostics: &mut D,
    ) -> Result<Option<std::path::PathBuf>>
    where
        D: Diagnostics + ?Sized,
    {
        let route = self.find_module(dir, "route");
        let index = self.find_module(dir, "index");

        if let (Some(route), Some(index)) = (&route, &index) {
            let segments = parse_route_segments(name)?;
            let pathname = create_route_path(&segments, false).unwrap_or_else(|| "/".to_string());
            diagnostics.conflict(Conflict::UrlPath {
                pathname,
                files: [route, index]
                    .iter()
                    .map(|p| module_label(name, p))
                    .collect(),
            });
        }

        let module = route.or(index);
        match &module {
            Some(module) => tracing::debug!(folder = name, module = %module.display(), "folder route"),
            None => tracing::debug!(folder = name, "folder has no route module"),
        }
        Ok(module)
    }
}

/// `folder/route.tsx` style label for diagnostics
fn module_label(folder: &str, module: &Path) -> String {
    let file_name = module
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{folder}/{file_name}")
}
