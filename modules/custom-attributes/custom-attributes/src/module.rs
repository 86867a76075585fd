//! Custom attributes plugin entry point.

use std::sync::Arc;

use custom_attributes_sdk::{SettingsSource, UserContext};
use tracing::info;

use crate::config::CustomAttributesConfig;
use crate::domain::{ConfigurationService, CustomAttributeUserContext};

/// Decorates the user contexts of other authentication extensions.
pub struct CustomAttributesPlugin {
    service: Arc<ConfigurationService>,
}

impl CustomAttributesPlugin {
    /// Extension identifier registered with the host.
    pub const IDENTIFIER: &'static str = "customattr";

    #[must_use]
    pub fn new(settings: Arc<dyn SettingsSource>, config: CustomAttributesConfig) -> Self {
        info!(
            property = %config.property,
            cache_definitions = config.cache_definitions,
            "Initializing custom attributes plugin"
        );
        Self {
            service: Arc::new(ConfigurationService::new(settings, config)),
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Arc<ConfigurationService> {
        &self.service
    }

    /// Wrap a host context so its users and schema carry custom attributes.
    #[must_use]
    pub fn decorate(&self, context: Arc<dyn UserContext>) -> Arc<dyn UserContext> {
        Arc::new(CustomAttributeUserContext::new(
            context,
            Arc::clone(&self.service),
        ))
    }

    /// Called when a session is refreshed. The previous wrapper is discarded
    /// and the fresh host context is wrapped again.
    #[must_use]
    pub fn redecorate(
        &self,
        _decorated: &Arc<dyn UserContext>,
        context: Arc<dyn UserContext>,
    ) -> Arc<dyn UserContext> {
        self.decorate(context)
    }
}
