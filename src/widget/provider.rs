use async_trait::async_trait;
use serde_json::Value;

/// Collaborator producing the render model and handling per-widget API calls
/// for one widget id. Implementations live outside the core (a news feed, a
/// banner rotation, a search box) and interpret the opaque configuration and
/// request payloads themselves.
#[async_trait]
pub trait WidgetDataProvider: Send + Sync {
    /// The widget id this provider serves; registry key.
    fn widget_id(&self) -> &str;

    async fn get_render_model(&self, configuration: &Value) -> Value;

    async fn process_api_request(&self, request: &Value) -> Value;
}
