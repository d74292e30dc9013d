//! The synthetic data provider.
//!
//! A [`DataProvider`] holds the immutable [`ContentCatalog`] built at
//! startup and answers generation requests for batches of property
//! profiles. Generation is all-or-nothing per batch; any failure aborts
//! the batch with a typed error and no partial result.

use crate::catalog::ContentCatalog;
use crate::text;
use bench_core::{
    ContentItem, GeneratedValue, GenerationResult, PropertyKind, PropertyProfile,
    RepositoryProfile, RestrictionKey,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Mutex;

/// Error type for generation requests.
#[derive(Debug, thiserror::Error)]
pub enum DataProviderError {
    /// A profile requested a kind the provider cannot generate
    #[error("property kind {kind:?} is not supported (requested for '{name}')")]
    UnsupportedPropertyKind {
        /// The offending profile's name
        name: String,
        /// The requested kind
        kind: PropertyKind,
    },

    /// CONTENT was requested against an empty catalog
    #[error("no content available: the catalog is empty")]
    NoContentAvailable,

    /// A text profile carried `min_length > max_length`
    #[error("invalid restriction on '{name}': min_length {min} exceeds max_length {max}")]
    InvalidRestriction {
        /// The offending profile's name
        name: String,
        /// The resolved minimum length
        min: u32,
        /// The resolved maximum length
        max: u32,
    },
}

/// Synthetic data provider: an immutable catalog plus an injected random
/// source.
///
/// The catalog is established at construction and never mutated, so
/// concurrent [`get_property_data`](Self::get_property_data) calls are safe;
/// the mutex serializes only the random source. Production code uses the
/// entropy-seeded [`new`](Self::new); tests use [`seeded`](Self::seeded) or
/// [`with_rng`](Self::with_rng) for reproducible output.
pub struct DataProvider<R: Rng = StdRng> {
    catalog: ContentCatalog,
    rng: Mutex<R>,
}

impl DataProvider<StdRng> {
    /// Create a provider with an entropy-seeded random source.
    pub fn new(catalog: ContentCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a provider with a seeded random source for reproducible runs.
    pub fn seeded(catalog: ContentCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DataProvider<R> {
    /// Create a provider with an arbitrary injected random source.
    pub fn with_rng(catalog: ContentCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    /// The catalog established at construction.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Generate one value per profile, keyed by profile name.
    ///
    /// The repository profile is accepted for contract stability but not
    /// read by the generation logic yet. Duplicate profile names resolve
    /// last-write-wins through plain map insertion.
    pub fn get_property_data(
        &self,
        _repository: &RepositoryProfile,
        profiles: &[PropertyProfile],
    ) -> Result<GenerationResult, DataProviderError> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut result: GenerationResult = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            let value = match profile.kind {
                PropertyKind::Text => {
                    GeneratedValue::Text(Self::text_value(&mut *rng, profile)?)
                }
                PropertyKind::Content => {
                    GeneratedValue::Content(self.content_value(&mut *rng)?)
                }
                PropertyKind::Int | PropertyKind::Datetime | PropertyKind::Boolean => {
                    return Err(DataProviderError::UnsupportedPropertyKind {
                        name: profile.name.clone(),
                        kind: profile.kind,
                    });
                }
            };
            result.insert(profile.name.clone(), value);
        }

        tracing::debug!("Generated {} property values", result.len());
        Ok(result)
    }

    fn text_value(rng: &mut R, profile: &PropertyProfile) -> Result<String, DataProviderError> {
        let min = profile
            .restriction(RestrictionKey::MinLength)
            .unwrap_or(text::DEFAULT_MIN_LENGTH);
        let max = profile
            .restriction(RestrictionKey::MaxLength)
            .unwrap_or(text::DEFAULT_MAX_LENGTH);

        if max < min {
            return Err(DataProviderError::InvalidRestriction {
                name: profile.name.clone(),
                min,
                max,
            });
        }

        Ok(text::generate_text(rng, min, max))
    }

    fn content_value(&self, rng: &mut R) -> Result<ContentItem, DataProviderError> {
        if self.catalog.is_empty() {
            return Err(DataProviderError::NoContentAvailable);
        }

        // Selection is uniform and with replacement
        let index = rng.gen_range(0..self.catalog.len());
        self.catalog
            .get(index)
            .cloned()
            .ok_or(DataProviderError::NoContentAvailable)
    }
}
