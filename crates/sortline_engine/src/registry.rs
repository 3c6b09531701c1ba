//! Identifier-to-algorithm lookup.
//!
//! The registry holds every catalog name in catalog order. A name maps
//! either to a runnable [`Algorithm`] or to nothing, in which case lookup
//! hands out a placeholder sorter instead of failing.

use crate::algorithm::Algorithm;
use crate::config::SortConfig;
use crate::sorter::{Sorter, Strategy};
use indexmap::IndexMap;
use sortline_core::{CoreError, CoreResult, SortValue};
use tracing::debug;

/// Catalog of sortable algorithms
#[derive(Debug, Clone)]
pub struct SorterRegistry {
    entries: IndexMap<&'static str, Option<Algorithm>>,
    config: SortConfig,
}

impl SorterRegistry {
    /// Registry with every catalog algorithm implemented and default tuning
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Algorithm::ALL
                .into_iter()
                .map(|algorithm| (algorithm.name(), Some(algorithm)))
                .collect(),
            config: SortConfig::default(),
        }
    }

    /// Registry that knows every catalog name but implements none of them
    #[must_use]
    pub fn catalog_only() -> Self {
        Self {
            entries: Algorithm::ALL
                .into_iter()
                .map(|algorithm| (algorithm.name(), None))
                .collect(),
            config: SortConfig::default(),
        }
    }

    /// Replace the tuning knobs used by sorters from this registry
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the configuration is unusable
    pub fn with_config(mut self, config: SortConfig) -> CoreResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Make `algorithm` runnable
    pub fn register(&mut self, algorithm: Algorithm) {
        self.entries.insert(algorithm.name(), Some(algorithm));
    }

    /// Keep `name` in the catalog but serve placeholders for it
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownAlgorithm` if the name is not in the catalog
    pub fn unregister(&mut self, name: &str) -> CoreResult<()> {
        match self.entries.get_mut(name) {
            Some(entry) => {
                *entry = None;
                Ok(())
            }
            None => Err(CoreError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Catalog names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Whether `name` resolves to a real algorithm
    #[must_use]
    pub fn is_implemented(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Some(_)))
    }

    /// Tuning knobs handed to new sorters
    #[must_use]
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Create a fresh, unsorted sorter for `name` over a copy of `input`
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownAlgorithm` if the name is not in the catalog
    pub fn get<V: SortValue>(&self, name: &str, input: &[V]) -> CoreResult<Sorter<V>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: name.to_string(),
            })?;

        let strategy = match entry {
            Some(algorithm) => Strategy::Run(*algorithm),
            None => {
                debug!(name, "serving placeholder sorter");
                Strategy::Placeholder {
                    name: name.to_string(),
                }
            }
        };
        Ok(Sorter::new(input, strategy, self.config.clone()))
    }
}

impl Default for SorterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory over the default registry: the sorter for `name`, not yet run
///
/// # Errors
///
/// Returns `CoreError::UnknownAlgorithm` if the name is not in the catalog
pub fn get_sorter<V: SortValue>(name: &str, input: &[V]) -> CoreResult<Sorter<V>> {
    SorterRegistry::new().get(name, input)
}
