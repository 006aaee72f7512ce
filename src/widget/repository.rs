use async_trait::async_trait;
use std::sync::Arc;

use crate::api::response::NonOk;
use crate::config::CONFIG;
use crate::widget::configuration::WidgetRenderingConfiguration;
use crate::widget::registry::WidgetProviderRegistry;

/// Whole-tree persistence for rendering configurations. Trees are saved,
/// replaced and deleted as a unit, keyed by the root id.
#[async_trait]
pub trait WidgetRenderingRepository: Send + Sync {
    async fn save(&self, configuration: &WidgetRenderingConfiguration) -> Result<(), NonOk>;

    async fn update(&self, configuration: &WidgetRenderingConfiguration) -> Result<(), NonOk>;

    /// Returns whether a configuration was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, NonOk>;

    async fn fetch(&self, id: &str) -> Result<Option<WidgetRenderingConfiguration>, NonOk>;
}

/// Validate-then-persist front for rendering configurations.
///
/// Persisting is the hard-fail side of the provider-lookup asymmetry: any id
/// in the tree without a registered provider rejects the whole tree with
/// `InvalidRequest`, and the repository is never called. (Rendering the same
/// tree would instead substitute inline error nodes.) Trees deeper than the
/// configured bound are rejected the same way.
pub struct WidgetConfigurationService {
    registry: Arc<WidgetProviderRegistry>,
    repository: Arc<dyn WidgetRenderingRepository>,
}

impl WidgetConfigurationService {
    pub fn new(
        registry: Arc<WidgetProviderRegistry>,
        repository: Arc<dyn WidgetRenderingRepository>,
    ) -> Self {
        Self { registry, repository }
    }

    pub async fn save(&self, configuration: &WidgetRenderingConfiguration) -> Result<(), NonOk> {
        self.validate(configuration)?;
        self.repository.save(configuration).await
    }

    pub async fn update(&self, configuration: &WidgetRenderingConfiguration) -> Result<(), NonOk> {
        self.validate(configuration)?;
        self.repository.update(configuration).await
    }

    /// Deletion is by top-level id only; there is nothing to validate.
    pub async fn delete(&self, id: &str) -> Result<bool, NonOk> {
        self.repository.delete(id).await
    }

    pub async fn fetch(&self, id: &str) -> Result<Option<WidgetRenderingConfiguration>, NonOk> {
        self.repository.fetch(id).await
    }

    fn validate(&self, configuration: &WidgetRenderingConfiguration) -> Result<(), NonOk> {
        let max_depth = CONFIG.widget.max_nested_depth;
        if configuration.depth() > max_depth {
            return Err(NonOk::invalid_request([format!(
                "configuration exceeds maximum nesting depth of {}",
                max_depth
            )]));
        }

        let missing = self.registry.non_registered_widget_ids(configuration);
        if !missing.is_empty() {
            return Err(NonOk::InvalidRequest(
                missing
                    .into_iter()
                    .map(|id| format!("no data provider registered for widget '{}'", id))
                    .collect(),
            ));
        }

        Ok(())
    }
}
