//! Synthetic data provider for the repo-bench load testing framework.
//!
//! This crate scans configured content directories once, builds an immutable
//! in-memory [`ContentCatalog`], and answers generation requests for batches
//! of property profiles: bounded-length pseudo-random text, or a content item
//! drawn uniformly from the catalog.
//!
//! # Architecture
//!
//! ```text
//! content roots                 PropertySet (YAML)
//!      │                              │
//!      ▼                              ▼
//! ┌──────────────────┐        ┌──────────────────┐
//! │  ContentCatalog  │───────▶│   DataProvider   │
//! │                  │        │                  │
//! │  DirectoryLister │        │  - catalog       │
//! │  MimeResolver    │        │  - rng (Mutex)   │
//! └──────────────────┘        └────────┬─────────┘
//!                                      │
//!                                      ▼
//!                     GenerationResult { name → value }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use bench_core::{PropertyProfile, RepositoryProfile};
//! use bench_dataprovider::{
//!     ContentCatalog, DataProvider, FsDirectoryLister, GuessingMimeResolver,
//! };
//! use std::path::PathBuf;
//!
//! let roots = vec![PathBuf::from("/data/content")];
//! let catalog = ContentCatalog::scan(&roots, &FsDirectoryLister, &GuessingMimeResolver)?;
//!
//! let provider = DataProvider::seeded(catalog, 42);
//! let profiles = vec![PropertyProfile::text("title"), PropertyProfile::content("attachment")];
//! let result = provider.get_property_data(&RepositoryProfile::default(), &profiles)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod mime;
pub mod provider;
pub mod text;

// Re-exports for convenience
pub use catalog::{
    is_version_control_dir, CatalogError, ContentCatalog, DirectoryLister, EntryKind,
    FsDirectoryLister, ListedEntry, MemoryDirectoryLister,
};
pub use mime::{GuessingMimeResolver, MimeResolver};
pub use provider::{DataProvider, DataProviderError};
