//! Property profiles for synthetic data generation.
//!
//! A [`PropertyProfile`] describes one value the data provider should
//! synthesize: a name to key the result by, a [`PropertyKind`], and an
//! optional map of named restrictions. Profiles are grouped into a
//! [`PropertySet`] loaded from a YAML file, which is the configuration
//! surface consumed by the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for property set operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading a property set file
    #[error("Failed to read property set file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// The kind of value a property profile requests.
///
/// Only [`PropertyKind::Text`] and [`PropertyKind::Content`] are generated
/// today; the remaining kinds exist in the content model but requesting one
/// fails the batch with a typed error. Dispatch over this enum is an
/// exhaustive match, so adding a kind is a compile-time-checked extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Bounded-length pseudo-random text
    Text,

    /// A randomly selected item from the content catalog
    Content,

    /// Integer property (declared, not yet generated)
    Int,

    /// Date/time property (declared, not yet generated)
    Datetime,

    /// Boolean property (declared, not yet generated)
    Boolean,
}

/// Named numeric constraints attachable to a property profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKey {
    /// Minimum generated text length (default 5)
    MinLength,

    /// Maximum generated text length (default 35)
    MaxLength,
}

/// One requested value: a result key, a kind, and optional restrictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyProfile {
    /// Identifier for the result mapping
    pub name: String,

    /// Kind of value to synthesize
    pub kind: PropertyKind,

    /// Named constraints; absent keys fall back to defaults
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub restrictions: HashMap<RestrictionKey, u32>,
}

impl PropertyProfile {
    /// Create a new profile with no restrictions.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            restrictions: HashMap::new(),
        }
    }

    /// Create a text profile with no restrictions.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Text)
    }

    /// Create a content profile.
    pub fn content(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Content)
    }

    /// Attach a restriction, replacing any previous value for the key.
    pub fn with_restriction(mut self, key: RestrictionKey, value: u32) -> Self {
        self.restrictions.insert(key, value);
        self
    }

    /// Look up a restriction value.
    pub fn restriction(&self, key: RestrictionKey) -> Option<u32> {
        self.restrictions.get(&key).copied()
    }
}

fn default_version() -> u32 {
    1
}

/// A batch of property profiles, loaded from a YAML file.
///
/// The set is the source of truth for one generation batch: every profile in
/// `properties` produces one entry in the result, keyed by profile name.
/// An optional `seed` makes CLI runs reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property set format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for reproducible generation (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// The profiles to generate, in request order
    pub properties: Vec<PropertyProfile>,
}

impl PropertySet {
    /// Load a property set from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a property set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let set: PropertySet = serde_yaml::from_str(yaml)?;
        Ok(set)
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&PropertyProfile> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get all property names, in request order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SET: &str = r#"
version: 1
seed: 42

properties:
  - name: title
    kind: text
    restrictions:
      min_length: 5
      max_length: 20

  - name: description
    kind: text

  - name: attachment
    kind: content
"#;

    #[test]
    fn test_parse_property_set() {
        let set = PropertySet::from_yaml(SAMPLE_SET).unwrap();

        assert_eq!(set.version, 1);
        assert_eq!(set.seed, Some(42));
        assert_eq!(set.properties.len(), 3);
        assert_eq!(set.property_names(), vec!["title", "description", "attachment"]);
    }

    #[test]
    fn test_restriction_lookup() {
        let set = PropertySet::from_yaml(SAMPLE_SET).unwrap();

        let title = set.get("title").unwrap();
        assert_eq!(title.kind, PropertyKind::Text);
        assert_eq!(title.restriction(RestrictionKey::MinLength), Some(5));
        assert_eq!(title.restriction(RestrictionKey::MaxLength), Some(20));

        // Absent keys are reported as absent; defaults are the provider's business
        let description = set.get("description").unwrap();
        assert!(description.restrictions.is_empty());
        assert_eq!(description.restriction(RestrictionKey::MinLength), None);
    }

    #[test]
    fn test_version_and_seed_defaults() {
        let set = PropertySet::from_yaml(
            r#"
properties:
  - name: body
    kind: text
"#,
        )
        .unwrap();

        assert_eq!(set.version, 1);
        assert_eq!(set.seed, None);
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let result = PropertySet::from_yaml(
            r#"
properties:
  - name: broken
    kind: geolocation
"#,
        );

        assert!(matches!(result, Err(ProfileError::YamlError(_))));
    }

    #[test]
    fn test_profile_builder() {
        let profile = PropertyProfile::text("title")
            .with_restriction(RestrictionKey::MinLength, 5)
            .with_restriction(RestrictionKey::MaxLength, 5);

        assert_eq!(profile.name, "title");
        assert_eq!(profile.kind, PropertyKind::Text);
        assert_eq!(profile.restriction(RestrictionKey::MinLength), Some(5));
        assert_eq!(profile.restriction(RestrictionKey::MaxLength), Some(5));

        let content = PropertyProfile::content("attachment");
        assert_eq!(content.kind, PropertyKind::Content);
        assert!(content.restrictions.is_empty());
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = PropertyProfile::text("title").with_restriction(RestrictionKey::MaxLength, 10);

        let yaml = serde_yaml::to_string(&profile).unwrap();
        let parsed: PropertyProfile = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.name, profile.name);
        assert_eq!(parsed.kind, profile.kind);
        assert_eq!(parsed.restrictions, profile.restrictions);
    }
}
