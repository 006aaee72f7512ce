use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of a widget tree: which widget renders here, its opaque
/// configuration (interpreted only by the matching data provider), and the
/// ordered child configurations.
///
/// Trees are persisted and replaced as a unit; there is no partial node
/// update. Every id in the tree must have a registered data provider by the
/// time the tree is validated for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRenderingConfiguration {
    pub id: String,
    #[serde(default)]
    pub configuration: Value,
    #[serde(default)]
    pub nested: Vec<WidgetRenderingConfiguration>,
}

impl WidgetRenderingConfiguration {
    pub fn new(id: impl Into<String>, configuration: Value) -> Self {
        Self { id: id.into(), configuration, nested: Vec::new() }
    }

    pub fn with_nested(mut self, nested: Vec<WidgetRenderingConfiguration>) -> Self {
        self.nested = nested;
        self
    }

    /// Depth of the tree rooted at this node; a leaf counts as 1.
    pub fn depth(&self) -> u32 {
        1 + self.nested.iter().map(WidgetRenderingConfiguration::depth).max().unwrap_or(0)
    }
}
