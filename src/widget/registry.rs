use std::collections::HashMap;
use std::sync::Arc;

use crate::api::registry::RegistryError;
use crate::widget::configuration::WidgetRenderingConfiguration;
use crate::widget::provider::WidgetDataProvider;

/// Widget-id keyed provider lookup. Built once from an ordered collection of
/// providers, immutable afterwards; duplicate ids fail construction instead of
/// shadowing an earlier registration.
pub struct WidgetProviderRegistry {
    providers: HashMap<String, Arc<dyn WidgetDataProvider>>,
}

impl WidgetProviderRegistry {
    pub fn new(
        providers: impl IntoIterator<Item = Arc<dyn WidgetDataProvider>>,
    ) -> Result<Self, RegistryError> {
        let mut table: HashMap<String, Arc<dyn WidgetDataProvider>> = HashMap::new();

        for provider in providers {
            let id = provider.widget_id().to_string();
            if table.contains_key(&id) {
                return Err(RegistryError::DuplicateWidgetProvider(id));
            }
            table.insert(id, provider);
        }

        tracing::debug!(providers = table.len(), "built widget provider registry");
        Ok(Self { providers: table })
    }

    pub fn provider(&self, id: &str) -> Option<&Arc<dyn WidgetDataProvider>> {
        self.providers.get(id)
    }

    pub fn has_provider(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// Every id in the tree (pre-order, duplicates kept) that has no
    /// registered provider. Used to reject a configuration before persisting
    /// it — distinct from the render-time policy, which substitutes an inline
    /// error node instead of failing the tree.
    pub fn non_registered_widget_ids(
        &self,
        configuration: &WidgetRenderingConfiguration,
    ) -> Vec<String> {
        let mut missing = Vec::new();
        self.collect_non_registered(configuration, &mut missing);
        missing
    }

    fn collect_non_registered(
        &self,
        configuration: &WidgetRenderingConfiguration,
        missing: &mut Vec<String>,
    ) {
        if !self.has_provider(&configuration.id) {
            missing.push(configuration.id.clone());
        }
        for nested in &configuration.nested {
            self.collect_non_registered(nested, missing);
        }
    }
}
