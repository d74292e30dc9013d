//! Value types produced by the data provider.
//!
//! A generation batch maps property names to [`GeneratedValue`]s: either a
//! bounded-random text value or a [`ContentItem`] selected from the catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Charset label recorded for every catalogued content item.
pub const CONTENT_ENCODING: &str = "UTF-8";

/// A cached reference to one discovered content file.
///
/// Items are created during catalog construction and immutable thereafter.
/// They stand in for generated binary/document content when the benchmark
/// harness issues content-creation operations against a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Absolute location of the file
    pub path: String,

    /// Media type inferred from the file name
    pub mime_type: String,

    /// Fixed charset label
    pub encoding: String,

    /// Size at discovery time, truncated to the 32-bit range
    pub size_bytes: i32,

    /// Canonical extension for the mime type
    pub extension: String,
}

impl ContentItem {
    /// Create a new content item with the fixed [`CONTENT_ENCODING`].
    pub fn new(
        path: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: i32,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            mime_type: mime_type.into(),
            encoding: CONTENT_ENCODING.to_string(),
            size_bytes,
            extension: extension.into(),
        }
    }
}

/// One generated value: text, or a reference to a cached content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// Pseudo-random text
    Text(String),

    /// Item drawn from the content catalog
    Content(ContentItem),
}

impl GeneratedValue {
    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a content item.
    pub fn as_content(&self) -> Option<&ContentItem> {
        match self {
            Self::Content(item) => Some(item),
            _ => None,
        }
    }
}

/// Result of one generation batch, keyed by property name.
///
/// One entry per requested profile; duplicate names resolve last-write-wins
/// through plain map insertion.
pub type GenerationResult = HashMap<String, GeneratedValue>;
