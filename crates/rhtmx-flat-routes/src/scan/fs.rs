//! File system access used by the scanner.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, as far as route scanning cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, broken symlinks and anything else; skipped
    Other,
}

/// One direct child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Trait for the file system seen by the scanner
pub trait RouteFs {
    /// Direct entries of `dir`, without recursing
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Whether `path` exists and is a file
    fn is_file(&self, path: &Path) -> bool;
}

/// [`RouteFs`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl RouteFs for StdFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follow symlinks so linked route folders behave like real ones
            let path: PathBuf = entry.path();
            let kind = if path.is_dir() {
                EntryKind::Dir
            } else if path.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(DirEntryInfo::new(entry.file_name().to_string_lossy(), kind));
        }
        Ok(entries)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F: RouteFs + ?Sized> RouteFs for &F {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).read_dir(dir)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}
