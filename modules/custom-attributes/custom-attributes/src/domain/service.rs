//! Retrieval of attribute definitions from the host settings.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use custom_attributes_sdk::SettingsSource;

use super::definition::AttributeDefinition;
use super::parser::parse;
use crate::config::CustomAttributesConfig;

/// Definitions parsed at a given settings revision.
struct CachedDefinitions {
    revision: u64,
    definitions: Arc<[AttributeDefinition]>,
}

/// Reads and parses the custom attribute definitions.
///
/// Failures to read the settings are logged and treated as "nothing
/// configured"; callers never see an error.
pub struct ConfigurationService {
    settings: Arc<dyn SettingsSource>,
    config: CustomAttributesConfig,
    cache: ArcSwapOption<CachedDefinitions>,
}

impl ConfigurationService {
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsSource>, config: CustomAttributesConfig) -> Self {
        Self {
            settings,
            config,
            cache: ArcSwapOption::from(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CustomAttributesConfig {
        &self.config
    }

    /// Current definitions, in declaration order.
    ///
    /// Re-read from the settings on every call unless `cache_definitions` is
    /// enabled, in which case the parsed list is reused until the settings
    /// revision changes.
    #[must_use]
    pub fn definitions(&self) -> Arc<[AttributeDefinition]> {
        if !self.config.cache_definitions {
            return self.read().unwrap_or_else(empty);
        }

        // Sample the revision before reading so a concurrent reload can only
        // make the cached entry look older than it is.
        let revision = self.settings.revision();
        if let Some(cached) = self.cache.load().as_ref()
            && cached.revision == revision
        {
            return Arc::clone(&cached.definitions);
        }

        let Some(definitions) = self.read() else {
            return empty();
        };
        self.cache.store(Some(Arc::new(CachedDefinitions {
            revision,
            definitions: Arc::clone(&definitions),
        })));
        tracing::debug!(revision, count = definitions.len(), "Cached custom attribute definitions");
        definitions
    }

    fn read(&self) -> Option<Arc<[AttributeDefinition]>> {
        let property = self.config.property.as_str();
        match self.settings.get_property(property) {
            Ok(raw) => {
                tracing::debug!(property, value = ?raw, "Read custom attribute definitions");
                Some(parse(raw.as_deref()).into())
            }
            Err(e) => {
                tracing::error!(property, error = %e, "Failed to read custom attribute definitions");
                None
            }
        }
    }
}

fn empty() -> Arc<[AttributeDefinition]> {
    Arc::from(Vec::new())
}
