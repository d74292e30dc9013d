//! repo-bench library surface.
//!
//! A synthetic data provider for load-testing a content repository. The
//! provider scans configured content directories once, caches the discovered
//! files in an immutable catalog, and produces batches of property values
//! (bounded-random text, or randomly selected content items) for a
//! benchmarking harness to replay against a repository.
//!
//! The heavy lifting lives in the workspace crates; this crate re-exports
//! the types the CLI and integration tests work with.

// Re-exports for convenience
pub use bench_core::{
    ContentItem, GeneratedValue, GenerationResult, ProfileError, PropertyKind, PropertyProfile,
    PropertySet, RepositoryProfile, RestrictionKey,
};
pub use bench_dataprovider::{
    CatalogError, ContentCatalog, DataProvider, DataProviderError, DirectoryLister,
    FsDirectoryLister, GuessingMimeResolver, MemoryDirectoryLister, MimeResolver,
};
