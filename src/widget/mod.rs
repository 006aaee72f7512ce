pub mod configuration;
pub mod provider;
pub mod registry;
pub mod rendering;
pub mod repository;

pub use configuration::WidgetRenderingConfiguration;
pub use provider::WidgetDataProvider;
pub use registry::WidgetProviderRegistry;
pub use rendering::WidgetRenderingService;
pub use repository::{WidgetConfigurationService, WidgetRenderingRepository};
