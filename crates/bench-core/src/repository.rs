//! Repository profile passed alongside every generation request.

use serde::{Deserialize, Serialize};

/// Opaque description of the target repository.
///
/// Accepted by generation for contract stability but not read by the
/// generation logic yet; reserved for future filtering of the catalog by
/// repository characteristics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryProfile {
    /// Identifier for the repository profile
    #[serde(default)]
    pub name: String,
}

impl RepositoryProfile {
    /// Create a named repository profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
