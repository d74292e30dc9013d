//! Content catalog construction.
//!
//! The catalog is built once by recursively walking the configured content
//! roots through an abstract [`DirectoryLister`], classifying every file via
//! a [`MimeResolver`](crate::mime::MimeResolver). Directories belonging to
//! version-control metadata are excluded by a named predicate. The resulting
//! catalog is immutable; a fresh scan replaces it wholesale.

use crate::mime::MimeResolver;
use bench_core::ContentItem;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A configured root does not resolve to a readable directory.
    /// Treated as a configuration error; no partial catalog is published.
    #[error("content root {} is not a readable directory: {source}", path.display())]
    RootUnreadable {
        /// The configured root path
        path: PathBuf,
        /// Underlying listing failure
        #[source]
        source: io::Error,
    },

    /// Listing failed below a root during traversal.
    #[error("failed to list directory {}: {source}", path.display())]
    Io {
        /// The directory that failed to list
        path: PathBuf,
        /// Underlying listing failure
        #[source]
        source: io::Error,
    },
}

/// Kind of a listed directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (anything that is not a directory)
    File,

    /// Subdirectory
    Directory,
}

/// One entry returned by a [`DirectoryLister`].
#[derive(Debug, Clone)]
pub struct ListedEntry {
    /// Full path of the entry
    pub path: PathBuf,

    /// Whether the entry is a file or a directory
    pub kind: EntryKind,

    /// Size in bytes (0 for directories)
    pub size_bytes: u64,
}

impl ListedEntry {
    /// Create a file entry.
    pub fn file(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size_bytes,
        }
    }

    /// Create a directory entry.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            size_bytes: 0,
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Lists the immediate entries of one directory.
///
/// The catalog walks roots through this capability so tests can substitute
/// an in-memory fixture for the real filesystem.
pub trait DirectoryLister {
    /// List the entries of `dir`, non-recursively.
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>>;
}

/// Real filesystem lister.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                entries.push(ListedEntry::directory(entry.path()));
            } else {
                let size_bytes = entry.metadata()?.len();
                entries.push(ListedEntry::file(entry.path(), size_bytes));
            }
        }
        Ok(entries)
    }
}

/// In-memory lister for test fixtures.
///
/// Directories must be registered before files are added beneath them;
/// listing an unregistered directory fails with `NotFound`, which is how an
/// unreadable content root is simulated in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectoryLister {
    entries: BTreeMap<PathBuf, Vec<ListedEntry>>,
}

impl MemoryDirectoryLister {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory, linking it into its parent's listing when the
    /// parent is already registered.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if let Some(siblings) = self.entries.get_mut(parent) {
                siblings.push(ListedEntry::directory(path.clone()));
            }
        }
        self.entries.entry(path).or_default();
    }

    /// Register a file under an already-registered directory.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, size_bytes: u64) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.entries
                .entry(parent.to_path_buf())
                .or_default()
                .push(ListedEntry::file(path, size_bytes));
        }
    }
}

impl DirectoryLister for MemoryDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedEntry>> {
        self.entries.get(dir).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such fixture directory: {}", dir.display()),
            )
        })
    }
}

/// Version-control metadata is excluded from the catalog. The match is a
/// substring match, so "svn-backup" and ".svn" are both skipped.
pub fn is_version_control_dir(name: &str) -> bool {
    name.contains("svn")
}

/// Immutable catalog of content items discovered under the configured roots.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
}

impl ContentCatalog {
    /// Build a catalog by recursively scanning the given roots.
    ///
    /// Duplicate roots are allowed; order is irrelevant to generation.
    /// A root that does not list as a readable directory fails the whole
    /// scan, and no partial catalog is returned.
    pub fn scan(
        roots: &[PathBuf],
        lister: &dyn DirectoryLister,
        resolver: &dyn MimeResolver,
    ) -> Result<Self, CatalogError> {
        let mut items = Vec::new();
        for root in roots {
            tracing::debug!("Scanning content root {}", root.display());
            let entries = lister
                .list(root)
                .map_err(|source| CatalogError::RootUnreadable {
                    path: root.clone(),
                    source,
                })?;
            Self::scan_entries(entries, lister, resolver, &mut items)?;
        }

        tracing::info!(
            "Cataloged {} content items from {} roots",
            items.len(),
            roots.len()
        );
        Ok(Self { items })
    }

    fn scan_entries(
        entries: Vec<ListedEntry>,
        lister: &dyn DirectoryLister,
        resolver: &dyn MimeResolver,
        items: &mut Vec<ContentItem>,
    ) -> Result<(), CatalogError> {
        for entry in entries {
            match entry.kind {
                EntryKind::Directory => {
                    if is_version_control_dir(&entry.file_name()) {
                        tracing::debug!(
                            "Skipping version-control directory {}",
                            entry.path.display()
                        );
                        continue;
                    }
                    let children =
                        lister
                            .list(&entry.path)
                            .map_err(|source| CatalogError::Io {
                                path: entry.path.clone(),
                                source,
                            })?;
                    Self::scan_entries(children, lister, resolver, items)?;
                }
                EntryKind::File => {
                    let mime_type = resolver.guess_mime_type(&entry.file_name());
                    let extension = resolver.extension(&mime_type);
                    items.push(ContentItem::new(
                        entry.path.to_string_lossy().into_owned(),
                        mime_type,
                        // Recorded truncated to the 32-bit range
                        entry.size_bytes as i32,
                        extension,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Number of catalogued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All catalogued items, in discovery order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Get an item by index.
    pub fn get(&self, index: usize) -> Option<&ContentItem> {
        self.items.get(index)
    }
}
