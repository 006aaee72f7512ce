use futures::future::{self, BoxFuture};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::widget::configuration::WidgetRenderingConfiguration;
use crate::widget::registry::WidgetProviderRegistry;

/// Resolves widget trees into nested render results.
///
/// Resolution is post-order: each node's render model and all of its children
/// resolve concurrently, then assemble into `{ widgetId, model, nested }`.
/// Children are independent and may complete in any order, but `nested`
/// always reflects the input order. A node whose id has no registered
/// provider does not fail the tree; its slot carries an inline error marker
/// so the rest of the page still renders.
pub struct WidgetRenderingService {
    registry: Arc<WidgetProviderRegistry>,
}

impl WidgetRenderingService {
    pub fn new(registry: Arc<WidgetProviderRegistry>) -> Self {
        Self { registry }
    }

    pub async fn resolve(&self, configuration: &WidgetRenderingConfiguration) -> Value {
        self.resolve_node(configuration).await
    }

    fn resolve_node<'a>(
        &'a self,
        configuration: &'a WidgetRenderingConfiguration,
    ) -> BoxFuture<'a, Value> {
        Box::pin(async move {
            let Some(provider) = self.registry.provider(&configuration.id) else {
                tracing::warn!(widget = %configuration.id, "no data provider registered; emitting inline error node");
                return json!({
                    "widgetId": configuration.id,
                    "error": format!("no data provider registered for widget '{}'", configuration.id),
                });
            };

            let model = provider.get_render_model(&configuration.configuration);
            let nested = future::join_all(
                configuration.nested.iter().map(|child| self.resolve_node(child)),
            );
            let (model, nested) = future::join(model, nested).await;

            json!({
                "widgetId": configuration.id,
                "model": model,
                "nested": nested,
            })
        })
    }

    /// Direct API call addressed to one widget. Absence of a provider is
    /// signalled structurally here, unlike the tree resolver's inline error.
    pub async fn process_api_request(&self, id: &str, request: &Value) -> Option<Value> {
        match self.registry.provider(id) {
            Some(provider) => Some(provider.process_api_request(request).await),
            None => None,
        }
    }

    /// Pre-save companion walk; see `WidgetProviderRegistry::non_registered_widget_ids`.
    pub fn get_non_registered_widget_ids(
        &self,
        configuration: &WidgetRenderingConfiguration,
    ) -> Vec<String> {
        self.registry.non_registered_widget_ids(configuration)
    }
}
