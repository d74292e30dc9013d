//! Core types for the repo-bench data provider.
//!
//! This crate provides the foundational types shared by the data provider
//! and the CLI, including:
//!
//! - [`PropertyProfile`] - One requested value: a name, a kind, and optional restrictions
//! - [`PropertySet`] - A batch of property profiles loaded from YAML
//! - [`ContentItem`] - A cached reference to a discovered content file
//! - [`GeneratedValue`] - A generated text value or selected content item
//! - [`RepositoryProfile`] - Opaque description of the target repository
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-dataprovider  (catalog construction and value generation)
//!    │
//!    └─── repo-bench          (CLI: loads PropertySet, emits GenerationResult)
//! ```

pub mod profile;
pub mod repository;
pub mod values;

// Re-exports for convenience
pub use profile::{ProfileError, PropertyKind, PropertyProfile, PropertySet, RestrictionKey};
pub use repository::RepositoryProfile;
pub use values::{ContentItem, GeneratedValue, GenerationResult, CONTENT_ENCODING};
